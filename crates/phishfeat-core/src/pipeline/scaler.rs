//! Per-column standardisation fitted elsewhere and shipped as JSON.

use serde::{Deserialize, Serialize};

use super::{check_columns, Scaler};
use crate::pipeline::PipelineError;
use crate::schema::FEATURE_COUNT;

/// `(x - mean) / scale` per column, in schema order.
///
/// JSON form: `{"mean": [..15 floats..], "scale": [..15 floats..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Checks column counts and that every parameter is finite with a
    /// non-zero scale.
    pub fn validate(&self) -> Result<(), PipelineError> {
        check_columns("scaler mean", &self.mean)?;
        check_columns("scaler scale", &self.scale)?;
        if let Some(i) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(PipelineError::InvalidParameter(format!(
                "scaler scale for column {i} is zero"
            )));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, row: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT], PipelineError> {
        self.validate()?;
        let mut out = [0.0; FEATURE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (row[i] - self.mean[i]) / self.scale[i];
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler(mean: f64, scale: f64) -> StandardScaler {
        StandardScaler {
            mean: vec![mean; FEATURE_COUNT],
            scale: vec![scale; FEATURE_COUNT],
        }
    }

    #[test]
    fn transform_standardises() {
        let s = scaler(1.0, 2.0);
        let out = s.transform(&[5.0; FEATURE_COUNT]).unwrap();
        assert!(out.iter().all(|v| (*v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn wrong_column_count_rejected() {
        let s = StandardScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; FEATURE_COUNT],
        };
        match s.transform(&[0.0; FEATURE_COUNT]) {
            Err(PipelineError::DimensionMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, FEATURE_COUNT);
                assert_eq!(actual, 3);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn zero_or_nan_scale_rejected() {
        assert!(matches!(
            scaler(0.0, 0.0).validate(),
            Err(PipelineError::InvalidParameter(_))
        ));
        assert!(scaler(0.0, f64::NAN).validate().is_err());
        assert!(scaler(0.0, 1.0).validate().is_ok());
    }

    #[test]
    fn json_form() {
        let json = format!(
            r#"{{"mean": {:?}, "scale": {:?}}}"#,
            vec![0.5; FEATURE_COUNT],
            vec![2.0; FEATURE_COUNT]
        );
        let s: StandardScaler = serde_json::from_str(&json).unwrap();
        assert_eq!(s, scaler(0.5, 2.0));
    }
}
