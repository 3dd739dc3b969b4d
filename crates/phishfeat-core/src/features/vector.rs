//! The fixed-schema feature vector.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::{FEATURE_COUNT, FEATURE_SCHEMA};

/// One feature value, keeping integer columns integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(u64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Int(v) => v as f64,
            FeatureValue::Float(v) => v,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{}", v),
            FeatureValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Numeric representation of one URL, field order = schema order.
///
/// Indicator columns hold 0 or 1. `entropy` is finite, non-negative and
/// rounded to four decimals. Serializing yields the schema keys in order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub url_length: u64,
    pub hostname_length: u64,
    pub path_length: u64,
    pub query_length: u64,
    pub num_dots: u64,
    pub num_hyphens: u64,
    pub num_digits: u64,
    pub num_special_chars: u64,
    pub has_https: u8,
    pub has_ip: u8,
    pub has_at_symbol: u8,
    pub has_double_slash: u8,
    pub has_suspicious_tld: u8,
    pub keyword_count: u64,
    pub entropy: f64,
}

impl FeatureVector {
    /// The degenerate-input vector: every column zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zeroed()
    }

    /// Values in schema order.
    pub fn values(&self) -> [FeatureValue; FEATURE_COUNT] {
        use FeatureValue::{Float, Int};
        [
            Int(self.url_length),
            Int(self.hostname_length),
            Int(self.path_length),
            Int(self.query_length),
            Int(self.num_dots),
            Int(self.num_hyphens),
            Int(self.num_digits),
            Int(self.num_special_chars),
            Int(self.has_https.into()),
            Int(self.has_ip.into()),
            Int(self.has_at_symbol.into()),
            Int(self.has_double_slash.into()),
            Int(self.has_suspicious_tld.into()),
            Int(self.keyword_count),
            Float(self.entropy),
        ]
    }

    /// Columns as floats, the layout scalers and classifiers consume.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        self.values().map(FeatureValue::as_f64)
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> {
        FEATURE_SCHEMA.into_iter().zip(self.values())
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Forces `entropy` to +0.0 when it is non-finite or not positive (this
    /// also folds -0.0). Every other column is unsigned and always in range.
    pub(crate) fn sanitized(mut self) -> Self {
        if !self.entropy.is_finite() || self.entropy <= 0.0 {
            self.entropy = 0.0;
        }
        self
    }
}
