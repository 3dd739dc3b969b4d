//! Classification boundary: sanitize → optional scaler → binary classifier.
//!
//! Scalers and classifiers are fitted elsewhere against the schema's column
//! order. This module only defines the seam they plug into, plus JSON-backed
//! implementations for a standard scaler and a logistic model.

mod error;
mod logistic;
mod scaler;

pub use error::PipelineError;
pub use logistic::{resolve_threshold, LogisticModel, DEFAULT_THRESHOLD};
pub use scaler::StandardScaler;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::features::{extract, FeatureVector};
use crate::schema::FEATURE_COUNT;

/// A fitted per-column transform keyed to the schema order.
pub trait Scaler: Send + Sync {
    fn transform(&self, row: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT], PipelineError>;
}

/// A fitted binary classifier: 1 = malicious, 0 = benign.
pub trait Classifier: Send + Sync {
    fn predict(&self, row: &[f64; FEATURE_COUNT]) -> Result<u8, PipelineError>;
}

/// Classifier output as shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Benign,
    Malicious,
}

impl Verdict {
    pub fn from_label(label: u8) -> Result<Self, PipelineError> {
        match label {
            0 => Ok(Verdict::Benign),
            1 => Ok(Verdict::Malicious),
            other => Err(PipelineError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Benign => write!(f, "benign"),
            Verdict::Malicious => write!(f, "malicious"),
        }
    }
}

/// Result of classifying one URL.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub url: String,
    pub features: FeatureVector,
    pub verdict: Verdict,
    /// False when no scaler was given or the scaler failed.
    pub scaled: bool,
}

/// Feature columns as floats with any NaN or infinity replaced by 0.
pub fn sanitize(features: &FeatureVector) -> [f64; FEATURE_COUNT] {
    features
        .to_array()
        .map(|v| if v.is_finite() { v } else { 0.0 })
}

/// Extracts, sanitizes, optionally scales and classifies `url`.
///
/// A scaler error is logged and the unscaled row is classified instead; a
/// classifier error is returned.
pub fn classify(
    url: &str,
    scaler: Option<&dyn Scaler>,
    model: &dyn Classifier,
) -> Result<Classification, PipelineError> {
    let features = extract(url);
    let row = sanitize(&features);

    let (row, scaled) = match scaler {
        Some(s) => match s.transform(&row) {
            Ok(scaled_row) => (scaled_row, true),
            Err(e) => {
                tracing::warn!("scaling failed, classifying unscaled features: {e}");
                (row, false)
            }
        },
        None => (row, false),
    };

    let verdict = Verdict::from_label(model.predict(&row)?)?;
    tracing::debug!(%verdict, scaled, "classified url");
    Ok(Classification {
        url: url.to_string(),
        features,
        verdict,
        scaled,
    })
}

/// Loads a JSON artifact (scaler or model parameters).
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    let data = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| PipelineError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// One value per column, all finite.
fn check_columns(what: &'static str, values: &[f64]) -> Result<(), PipelineError> {
    if values.len() != FEATURE_COUNT {
        return Err(PipelineError::DimensionMismatch {
            what,
            expected: FEATURE_COUNT,
            actual: values.len(),
        });
    }
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(PipelineError::InvalidParameter(format!(
            "{what}: column {i} is not finite"
        )));
    }
    Ok(())
}
