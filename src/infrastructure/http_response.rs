// HTTP response utilities for rendered HTML with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use maud::Markup;
use tokio::io::AsyncReadExt;

/// Check if client accepts Brotli compression. `br;q=0` is a refusal.
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(brotli_with_nonzero_quality))
        .unwrap_or(false)
}

fn brotli_with_nonzero_quality(entry: &str) -> bool {
    let mut params = entry.split(';');
    let coding = params.next().unwrap_or_default().trim();
    if !coding.eq_ignore_ascii_case("br") {
        return false;
    }

    // An unparseable weight is treated like a missing one
    let quality = params
        .filter_map(|p| p.trim().strip_prefix("q="))
        .next()
        .and_then(|q| q.trim().parse::<f32>().ok())
        .unwrap_or(1.0);
    quality > 0.0
}

async fn brotli_compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = BrotliEncoder::new(bytes);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Serialize rendered markup, compressing with Brotli when requested
pub async fn html_response(markup: Markup, compress: bool) -> Result<Response<Body>, StatusCode> {
    let html_bytes = markup.into_string().into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let compressed = brotli_compress(&html_bytes).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            "Compressed: {} → {} bytes",
            html_bytes.len(),
            compressed.len()
        );
        (compressed, Some("br"))
    } else {
        (html_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::VARY, "accept-encoding")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br;q=1.0"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip,BR ; q=0.5"));
        assert!(accepts_brotli(&headers));
    }

    #[test]
    fn test_zero_quality_refuses_brotli() {
        let mut headers = HeaderMap::new();

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br;q=0"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("br; q=0.000, gzip"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("brotli-ish"));
        assert!(!accepts_brotli(&headers));
    }

    #[tokio::test]
    async fn test_uncompressed_response_carries_html() {
        let response = html_response(html! { p { "hi" } }, false).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "9");

        let body = axum::body::to_bytes(response.into_body(), 1_000).await.unwrap();
        assert_eq!(&body[..], b"<p>hi</p>");
    }

    #[tokio::test]
    async fn test_compressed_response_sets_encoding() {
        let markup = html! { @for _ in 0..50 { p { "repeated content" } } };
        let plain_len = markup.clone().into_string().len();

        let response = html_response(markup, true).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");

        let body = axum::body::to_bytes(response.into_body(), 100_000).await.unwrap();
        assert!(body.len() < plain_len);
    }
}
