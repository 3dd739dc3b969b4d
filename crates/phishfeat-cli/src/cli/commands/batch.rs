//! `phishfeat batch <file>` – feature matrix as CSV.

use anyhow::{Context, Result};
use phishfeat_core::batch::{extract_many_with_threads, read_url_list, write_matrix};
use phishfeat_core::config::PhishfeatConfig;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn run_batch(
    cfg: &PhishfeatConfig,
    path: &Path,
    labelled: bool,
    output: Option<&Path>,
) -> Result<()> {
    let entries = read_url_list(path, labelled)?;
    let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
    let rows = extract_many_with_threads(&urls, cfg.batch_threads)?;
    let labels: Option<Vec<u8>> = if labelled {
        entries.iter().map(|e| e.label).collect()
    } else {
        None
    };
    tracing::info!(rows = rows.len(), labelled, "built feature matrix from {}", path.display());

    match output {
        Some(out_path) => {
            let file = File::create(out_path)
                .with_context(|| format!("create {}", out_path.display()))?;
            let mut w = BufWriter::new(file);
            write_matrix(&mut w, &rows, labels.as_deref())?;
            w.flush()?;
            eprintln!("Wrote {} rows to {}", rows.len(), out_path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            write_matrix(&mut w, &rows, labels.as_deref())?;
            w.flush()?;
        }
    }
    Ok(())
}
