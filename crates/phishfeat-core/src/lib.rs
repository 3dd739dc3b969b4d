//! phishfeat-core: deterministic URL feature extraction for phishing classifiers.
//!
//! [`features::extract`] turns any string into a [`features::FeatureVector`]
//! with the fixed column set in [`schema::FEATURE_SCHEMA`]. The remaining
//! modules sit around it: batch matrices, the scaler/classifier seam, config
//! and logging.

pub mod config;
pub mod logging;

pub mod batch;
pub mod features;
pub mod pipeline;
pub mod schema;
pub mod url_model;

pub use features::{extract, extract_bytes, extract_opt, FeatureValue, FeatureVector};
pub use schema::{FEATURE_COUNT, FEATURE_SCHEMA};
