//! Loosely-typed field values and parse-or-default helpers
//!
//! Loaders and user interfaces hand the core raw values. Identifiers are
//! checked strictly; balances, thresholds and dates fall back to documented
//! defaults instead of failing.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A raw value supplied for one field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
    #[default]
    Missing,
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Date(d) => write!(f, "{}", d),
            Self::Text(s) => write!(f, "{}", s),
            Self::Missing => write!(f, "None"),
        }
    }
}

/// A value produced by a parse-or-default helper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    /// True when the input was unusable and the default was substituted
    pub defaulted: bool,
}

impl<T> Coerced<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Accept only whole-number values
///
/// Floats and numeric text are rejected, even `22.0` or `"22"`.
pub fn whole_number(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Int(v) => Some(*v),
        _ => None,
    }
}

/// Read a value as a finite number, if it is one
///
/// NaN and the infinities are not numbers here, whether they arrive as
/// floats or as text such as `"nan"` or `"inf"`.
pub fn as_number(value: &FieldValue) -> Option<f64> {
    let number = match value {
        FieldValue::Int(v) => Some(*v as f64),
        FieldValue::Float(v) => Some(*v),
        FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        FieldValue::Date(_) | FieldValue::Missing => None,
    };
    number.filter(|v| v.is_finite())
}

/// Read a number, substituting `default` when the value is not numeric
pub fn float_or(value: &FieldValue, default: f64, field: &'static str) -> Coerced<f64> {
    match as_number(value) {
        Some(v) => Coerced::parsed(v),
        None => {
            debug!(field, input = %value, default, "Substituting default for non-numeric value");
            Coerced::fallback(default)
        }
    }
}

/// Read a date, substituting today's date when the value is not one
pub fn date_or_today(value: &FieldValue) -> Coerced<NaiveDate> {
    match value {
        FieldValue::Date(d) => Coerced::parsed(*d),
        other => {
            let today = today();
            debug!(input = %other, %today, "Substituting today for invalid creation date");
            Coerced::fallback(today)
        }
    }
}

/// The current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number(&22.into()), Some(22));
        assert_eq!(whole_number(&22.0.into()), None);
        assert_eq!(whole_number(&"22".into()), None);
        assert_eq!(whole_number(&FieldValue::Missing), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&200.into()), Some(200.0));
        assert_eq!(as_number(&12.5.into()), Some(12.5));
        assert_eq!(as_number(&" 1000 ".into()), Some(1000.0));
        assert_eq!(as_number(&"number".into()), None);
        assert_eq!(as_number(&FieldValue::Missing), None);
    }

    #[test]
    fn test_as_number_rejects_non_finite() {
        assert_eq!(as_number(&"nan".into()), None);
        assert_eq!(as_number(&" inf ".into()), None);
        assert_eq!(as_number(&"-infinity".into()), None);
        assert_eq!(as_number(&f64::NAN.into()), None);
        assert_eq!(as_number(&f64::INFINITY.into()), None);
        assert_eq!(float_or(&"nan".into(), 0.0, "balance").value, 0.0);
    }

    #[test]
    fn test_float_or() {
        let parsed = float_or(&"-150".into(), -100.0, "overdraft_limit");
        assert_eq!(parsed.value, -150.0);
        assert!(!parsed.defaulted);

        let fallback = float_or(&"limit".into(), -100.0, "overdraft_limit");
        assert_eq!(fallback.value, -100.0);
        assert!(fallback.defaulted);
    }

    #[test]
    fn test_date_or_today() {
        let d = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        let kept = date_or_today(&d.into());
        assert_eq!(kept.value, d);
        assert!(!kept.defaulted);

        let fallback = date_or_today(&"yesterday".into());
        assert_eq!(fallback.value, today());
        assert!(fallback.defaulted);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(None::<f64>), FieldValue::Missing);
        assert_eq!(FieldValue::from(Some(5)), FieldValue::Int(5));
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[22, 10.5, "2020-01-15", "abc", null]"#).unwrap();
        assert_eq!(values[0], FieldValue::Int(22));
        assert_eq!(values[1], FieldValue::Float(10.5));
        assert_eq!(
            values[2],
            FieldValue::Date(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap())
        );
        assert_eq!(values[3], FieldValue::Text("abc".into()));
        assert_eq!(values[4], FieldValue::Missing);
    }
}
