// Metric domain model
use super::icon::Icon;
use serde::Deserialize;
use std::fmt;

/// A metric reading exactly as the producer sent it. Displayed verbatim.
///
/// Numbers keep the producer's literal (`1e21`, `18446744073709551615`,
/// `0.10`) because serde_json is built with `arbitrary_precision`, so nothing
/// is parsed into a machine type and printed back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(v) => write!(f, "{}", v),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<f64> for MetricValue {
    // NaN and infinities have no JSON form
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => MetricValue::Number(n),
            None => MetricValue::Text(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    pub sub_value: Option<String>,
    pub tooltip: Option<String>,
    /// Text treatment of the primary value only
    #[serde(alias = "styleClass")]
    pub color_class: String,
    pub icon: Option<Icon>,
}

impl Metric {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<MetricValue>,
        color_class: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            sub_value: None,
            tooltip: None,
            color_class: color_class.into(),
            icon: None,
        }
    }

    pub fn with_sub_value(mut self, sub_value: impl Into<String>) -> Self {
        self.sub_value = Some(sub_value.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    // Empty strings count as absent
    pub fn sub_value(&self) -> Option<&str> {
        self.sub_value.as_deref().filter(|s| !s.is_empty())
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display_is_verbatim() {
        assert_eq!(MetricValue::from("12ms").to_string(), "12ms");
        assert_eq!(MetricValue::from("  1,234.50 USD").to_string(), "  1,234.50 USD");
        assert_eq!(MetricValue::from(42_i64).to_string(), "42");
        assert_eq!(MetricValue::from(0.25_f64).to_string(), "0.25");
        assert_eq!(MetricValue::from(-3.5_f64).to_string(), "-3.5");
    }

    #[test]
    fn test_decode_camel_case_metric() {
        let metric: Metric = serde_json::from_str(
            r#"{"label": "P/E", "value": 25.5, "subValue": "fwd 24.0", "colorClass": "text-white"}"#,
        )
        .unwrap();
        assert_eq!(metric.value.to_string(), "25.5");
        assert_eq!(metric.sub_value(), Some("fwd 24.0"));
        assert_eq!(metric.tooltip(), None);
        assert_eq!(metric.color_class, "text-white");
    }

    #[test]
    fn test_style_class_alias_and_integer_value() {
        let metric: Metric = serde_json::from_str(
            r#"{"label": "Volume", "value": 110, "styleClass": "text-amber-400"}"#,
        )
        .unwrap();
        assert_eq!(metric.value, MetricValue::from(110_i64));
        assert_eq!(metric.color_class, "text-amber-400");
    }

    #[test]
    fn test_number_literals_are_not_rounded() {
        for literal in ["18446744073709551615", "1e21", "-0.000001", "1.50", "123456789012345678901234567890"] {
            let metric: Metric = serde_json::from_str(&format!(
                r#"{{"label": "n", "value": {}, "colorClass": "text-white"}}"#,
                literal
            ))
            .unwrap();
            assert!(matches!(metric.value, MetricValue::Number(_)));
            assert_eq!(metric.value.to_string(), literal);
        }
    }

    #[test]
    fn test_non_finite_float_falls_back_to_text() {
        assert_eq!(MetricValue::from(f64::NAN), MetricValue::Text("NaN".into()));
    }

    #[test]
    fn test_empty_optional_strings_are_absent() {
        let metric = Metric::new("Beta", "1.2", "text-white")
            .with_sub_value("")
            .with_tooltip("");
        assert_eq!(metric.sub_value(), None);
        assert_eq!(metric.tooltip(), None);
    }
}
