//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// bivar: explore pairs of variables in tabular data
#[derive(Parser)]
#[command(name = "bivar")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by every command that loads data.
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Data files to concatenate (CSV/TSV, identical headers)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Field delimiter (default: auto-detect; use "\t" for tab)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Maximum rows to read from each file
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Number of histogram bins for quantitative variables
    #[arg(long, default_value = "30")]
    pub bins: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List columns with their storage type and measurement kind
    Columns {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print summary statistics for two variables
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// First variable (default: first column)
        #[arg(long)]
        var1: Option<String>,

        /// Second variable (default: second column)
        #[arg(long)]
        var2: Option<String>,

        /// Output the full view (report and charts) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the interactive dashboard
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Port for web server
        #[arg(short, long, default_value = "8050")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}
