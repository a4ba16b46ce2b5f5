//! CLI command implementations.

pub mod columns;
pub mod serve;
pub mod summary;

use bivar::{Dashboard, DashboardConfig, ParserConfig};
use colored::Colorize;

use crate::cli::SourceArgs;

/// Build the dashboard configuration from command-line options.
pub fn config_from_args(source: &SourceArgs) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let delimiter = source
        .delimiter
        .as_deref()
        .map(ParserConfig::delimiter_from_str)
        .transpose()?;

    Ok(DashboardConfig {
        parser: ParserConfig {
            delimiter,
            max_rows: source.max_rows,
            ..ParserConfig::default()
        },
        histogram_bins: source.bins,
    })
}

/// Load and concatenate the sources named on the command line.
pub fn load_dashboard(source: &SourceArgs) -> Result<Dashboard, Box<dyn std::error::Error>> {
    for file in &source.files {
        if !file.exists() {
            return Err(format!("File not found: {}", file.display()).into());
        }
    }

    let config = config_from_args(source)?;
    let dashboard = Dashboard::load_with_config(&source.files, config)?;

    eprintln!(
        "{} {} rows x {} columns from {} file(s)",
        "Loaded".cyan().bold(),
        dashboard.store().row_count().to_string().white().bold(),
        dashboard.store().column_count().to_string().white().bold(),
        source.files.len()
    );

    Ok(dashboard)
}
