//! CLI for phishfeat.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishfeat_core::config::{self, OutputFormat};
use std::path::PathBuf;

use commands::{run_batch, run_classify, run_extract, run_schema};

/// Top-level CLI for phishfeat.
#[derive(Debug, Parser)]
#[command(name = "phishfeat")]
#[command(about = "phishfeat: URL feature extraction for phishing classifiers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the feature vector of one or more URLs.
    Extract {
        /// Candidate URLs (any string is accepted).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Output format: text or json (default from config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Print the feature names in column order.
    Schema,

    /// Build a CSV feature matrix from a file with one URL per line.
    Batch {
        /// Input file (one URL per line, or `url,label` with --labelled).
        path: PathBuf,
        /// Lines are `url,label`; the label is copied into the matrix.
        #[arg(long)]
        labelled: bool,
        /// Write the matrix here instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Classify a URL with an exported logistic model (and optional scaler).
    Classify {
        /// Candidate URL.
        url: String,
        /// Model parameters (JSON); defaults to `model_path` from config.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        /// Scaler parameters (JSON); defaults to `scaler_path` from config.
        #[arg(long, value_name = "PATH")]
        scaler: Option<PathBuf>,
        /// Output format: text or json (default from config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { urls, format } => {
                run_extract(&urls, format.unwrap_or(cfg.output_format))?
            }
            CliCommand::Schema => run_schema(),
            CliCommand::Batch {
                path,
                labelled,
                output,
            } => run_batch(&cfg, &path, labelled, output.as_deref())?,
            CliCommand::Classify {
                url,
                model,
                scaler,
                format,
            } => {
                let format = format.unwrap_or(cfg.output_format);
                run_classify(&cfg, &url, model, scaler, format)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
