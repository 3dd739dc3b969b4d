//! Batch extraction: build a feature matrix for a list of URLs.
//!
//! Each URL is independent, so rows are computed across a rayon pool and
//! collected back in input order.

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::features::{extract, FeatureVector};
use crate::schema::FEATURE_SCHEMA;

/// Header cell for the label column of a labelled matrix.
const LABEL_COLUMN: &str = "label";

/// One input row: a URL and, for training data, its 0/1 label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledUrl {
    pub url: String,
    pub label: Option<u8>,
}

/// Extracts every URL on the global rayon pool. Output order matches input order.
pub fn extract_many<S: AsRef<str> + Sync>(urls: &[S]) -> Vec<FeatureVector> {
    urls.par_iter().map(|u| extract(u.as_ref())).collect()
}

/// Like [`extract_many`], on a dedicated pool of `threads` workers when given.
pub fn extract_many_with_threads<S: AsRef<str> + Sync>(
    urls: &[S],
    threads: Option<usize>,
) -> Result<Vec<FeatureVector>> {
    let Some(n) = threads else {
        return Ok(extract_many(urls));
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build()
        .context("build extraction thread pool")?;
    tracing::debug!(threads = n, rows = urls.len(), "extracting on dedicated pool");
    Ok(pool.install(|| extract_many(urls)))
}

/// Reads one URL per line, skipping blank lines.
///
/// With `labelled`, each line is `url,label` split at the last comma. The
/// label is `0`/`legit` or `1`/`phish` (trimmed, case-insensitive), and a
/// `url,label` header on the first non-blank line is skipped.
pub fn read_url_list(path: &Path, labelled: bool) -> Result<Vec<LabelledUrl>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read URL list {}", path.display()))?;
    parse_url_list(&data, labelled).with_context(|| format!("parse {}", path.display()))
}

fn parse_label(cell: &str) -> Option<u8> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "0" | "legit" => Some(0),
        "1" | "phish" => Some(1),
        _ => None,
    }
}

fn parse_url_list(data: &str, labelled: bool) -> Result<Vec<LabelledUrl>> {
    let mut out = Vec::new();
    let mut first = true;
    for (idx, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let header_candidate = std::mem::replace(&mut first, false);
        if !labelled {
            out.push(LabelledUrl {
                url: line.to_string(),
                label: None,
            });
            continue;
        }

        let Some((url, label)) = line.rsplit_once(',') else {
            bail!("line {}: expected `url,label`", idx + 1);
        };
        if header_candidate && label.trim().eq_ignore_ascii_case(LABEL_COLUMN) {
            continue;
        }
        let Some(label) = parse_label(label) else {
            bail!(
                "line {}: label must be 0/legit or 1/phish, got {:?}",
                idx + 1,
                label.trim()
            );
        };
        out.push(LabelledUrl {
            url: url.to_string(),
            label: Some(label),
        });
    }
    Ok(out)
}

/// Writes rows as CSV with a schema-ordered header, plus a trailing `label`
/// column when `labels` is given.
pub fn write_matrix<W: Write>(
    out: &mut W,
    rows: &[FeatureVector],
    labels: Option<&[u8]>,
) -> Result<()> {
    if let Some(labels) = labels {
        if labels.len() != rows.len() {
            bail!("{} rows but {} labels", rows.len(), labels.len());
        }
    }

    let mut header = FEATURE_SCHEMA.join(",");
    if labels.is_some() {
        header.push(',');
        header.push_str(LABEL_COLUMN);
    }
    writeln!(out, "{header}")?;

    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.values().iter().map(|v| v.to_string()).collect();
        match labels {
            Some(labels) => writeln!(out, "{},{}", cells.join(","), labels[i])?,
            None => writeln!(out, "{}", cells.join(","))?,
        }
    }
    Ok(())
}
