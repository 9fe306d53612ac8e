//! Command-line front end for the report pipeline
//!
//! The CLI keeps one stored snapshot (the same session the editor keeps in
//! browser storage) and can render, export and edit it from a terminal.

pub mod captures;
pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use report_export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "report")]
#[command(version, about = "Quarterly report authoring and export")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored snapshot (overrides the config file)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the initial report template as JSON
    New {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write printable HTML for the report
    Render {
        /// Snapshot to render instead of the stored session
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Export the report as pdf, json, csv or word
    Export {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "pdf")]
        format: ExportFormat,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Directory of page-NNN.png captures, required for pdf
        #[arg(long)]
        captures: Option<PathBuf>,
    },
    /// Validate a snapshot and make it the stored session
    Import {
        #[arg(long)]
        input: PathBuf,
    },
    /// Set one text field of the stored session by its snapshot key
    Set {
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
    },
    /// List the available cover themes
    Themes,
}
