//! `phishfeat classify <url>` – extract, scale and classify one URL.

use anyhow::{Context, Result};
use phishfeat_core::config::{OutputFormat, PhishfeatConfig};
use phishfeat_core::pipeline::{
    self, Classification, LogisticModel, Scaler, StandardScaler, Verdict,
};
use std::path::PathBuf;

pub fn run_classify(
    cfg: &PhishfeatConfig,
    url: &str,
    model: Option<PathBuf>,
    scaler: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let model_path = model
        .or_else(|| cfg.model_path.clone())
        .context("no model given: pass --model or set model_path in config.toml")?;
    let model: LogisticModel = pipeline::load_json(&model_path)?;
    let model = model.with_fallback_threshold(Some(cfg.threshold));
    model
        .validate()
        .with_context(|| format!("model {}", model_path.display()))?;

    let scaler: Option<StandardScaler> = match scaler.or_else(|| cfg.scaler_path.clone()) {
        Some(p) => Some(pipeline::load_json(&p)?),
        None => None,
    };
    let scaler_ref = scaler.as_ref().map(|s| s as &dyn Scaler);

    let result = pipeline::classify(url, scaler_ref, &model)?;

    match format {
        OutputFormat::Text => {
            for line in text_report(&result, scaler.is_some()) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

/// Text output: the verdict line, then a warning when a scaler was given but
/// could not be applied.
pub(crate) fn text_report(result: &Classification, scaler_given: bool) -> Vec<String> {
    let message = match result.verdict {
        Verdict::Malicious => "Phishing / malicious URL detected",
        Verdict::Benign => "URL appears benign",
    };
    let mut lines = vec![format!("{}: {} ({})", result.verdict, message, result.url)];
    if scaler_given && !result.scaled {
        lines.push("warning: scaler could not be applied; classified unscaled features".to_string());
    }
    lines
}
