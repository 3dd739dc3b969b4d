//! Logistic-regression inference from exported weights.

use serde::{Deserialize, Serialize};

use super::{check_columns, Classifier};
use crate::pipeline::PipelineError;
use crate::schema::FEATURE_COUNT;

/// Decision threshold used when neither the model file nor the caller sets one.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Decision threshold to use: the model file's own value, else the caller's
/// fallback (config `threshold`), else [`DEFAULT_THRESHOLD`].
pub fn resolve_threshold(from_model: Option<f64>, fallback: Option<f64>) -> f64 {
    from_model.or(fallback).unwrap_or(DEFAULT_THRESHOLD)
}

/// Linear model over the (optionally scaled) feature row.
///
/// JSON form: `{"coef": [..15 floats..], "intercept": f, "threshold": f}`;
/// `threshold` is optional; see [`LogisticModel::threshold`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coef: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl LogisticModel {
    /// Effective decision threshold.
    pub fn threshold(&self) -> f64 {
        resolve_threshold(self.threshold, None)
    }

    /// Fills in a missing threshold from `fallback`; a value set in the model
    /// file is kept.
    pub fn with_fallback_threshold(mut self, fallback: Option<f64>) -> Self {
        self.threshold = Some(resolve_threshold(self.threshold, fallback));
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        check_columns("model coef", &self.coef)?;
        if !self.intercept.is_finite() {
            return Err(PipelineError::InvalidParameter(
                "model intercept is not finite".to_string(),
            ));
        }
        let threshold = self.threshold();
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PipelineError::InvalidParameter(format!(
                "threshold {threshold} outside [0, 1]"
            )));
        }
        Ok(())
    }

    /// Probability of the malicious class.
    pub fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> Result<f64, PipelineError> {
        self.validate()?;
        let z: f64 = self
            .coef
            .iter()
            .zip(row.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, row: &[f64; FEATURE_COUNT]) -> Result<u8, PipelineError> {
        let p = self.predict_proba(row)?;
        Ok(u8::from(p >= self.threshold()))
    }
}
