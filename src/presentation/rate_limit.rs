// Per-client request limiting for the dashboard routes
use crate::presentation::app_state::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc};
use tracing::{debug, warn};

const UNKNOWN_CLIENT: &str = "unknown";

/// One token bucket per client address.
pub struct ClientRateLimiter {
    // TODO: evict buckets of clients that have been idle for longer than a minute
    limiters: DashMap<String, RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    quota: Option<Quota>,
}

impl ClientRateLimiter {
    /// `requests` per minute per client, bursting up to the same amount.
    /// Zero disables limiting.
    pub fn per_minute(requests: u32) -> Self {
        Self {
            limiters: DashMap::new(),
            quota: NonZeroU32::new(requests).map(Quota::per_minute),
        }
    }

    /// Returns `true` if the request may proceed
    pub fn check(&self, client: &str) -> bool {
        let Some(quota) = self.quota else {
            return true;
        };

        let limiter = self
            .limiters
            .entry(client.to_string())
            .or_insert_with(|| RateLimiter::direct(quota));

        match limiter.check() {
            Ok(()) => {
                debug!(client = client, "rate limit check passed");
                true
            }
            Err(_) => {
                warn!(client = client, "rate limit exceeded");
                false
            }
        }
    }
}

fn client_key(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Middleware answering 429 once a client exceeds its quota
pub async fn limit_per_client(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);
    if !state.rate_limiter.check(&client) {
        return (StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded").into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_is_per_client() {
        let limiter = ClientRateLimiter::per_minute(2);

        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"));

        assert!(limiter.check("10.0.0.2"));
    }

    #[test]
    fn test_zero_disables_limiting() {
        let limiter = ClientRateLimiter::per_minute(0);
        assert!((0..100).all(|_| limiter.check("10.0.0.1")));
    }

    #[test]
    fn test_client_key_uses_peer_address() {
        let mut request = Request::new(axum::body::Body::empty());
        assert_eq!(client_key(&request), UNKNOWN_CLIENT);

        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 7], 5000))));
        assert_eq!(client_key(&request), "192.0.2.7");
    }
}
