//! `phishfeat extract <url>...` – print feature vectors.

use anyhow::Result;
use phishfeat_core::config::OutputFormat;
use phishfeat_core::{extract, FeatureVector};

fn print_text(url: &str, features: &FeatureVector) {
    println!("{url}");
    for (name, value) in features.iter() {
        println!("  {:<20} {}", name, value);
    }
}

pub fn run_extract(urls: &[String], format: OutputFormat) -> Result<()> {
    let rows: Vec<(&str, FeatureVector)> = urls.iter().map(|u| (u.as_str(), extract(u))).collect();
    tracing::debug!(count = rows.len(), "extracted feature vectors");

    match format {
        OutputFormat::Text => {
            for (i, (url, features)) in rows.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_text(url, features);
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = rows
                .iter()
                .map(|(url, features)| serde_json::json!({ "url": url, "features": features }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
