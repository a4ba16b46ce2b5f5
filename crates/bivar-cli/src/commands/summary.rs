//! Summary command - print statistics for one selection.

use bivar::ReportRow;
use colored::Colorize;

use super::load_dashboard;
use crate::cli::SourceArgs;

pub fn run(
    source: SourceArgs,
    var1: Option<String>,
    var2: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = load_dashboard(&source)?;
    let view = dashboard.view_or_default(var1.as_deref(), var2.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let width = view.var1.len().max(view.var2.len()).max(14);

    println!();
    println!(
        "  {:22} {:>w$} {:>w$}",
        "Metric".bold(),
        view.var1.cyan().bold(),
        view.var2.cyan().bold(),
        w = width
    );
    for row in &view.summary_table {
        match row {
            ReportRow::PerVariable { metric, var1, var2 } => {
                println!("  {:22} {:>w$} {:>w$}", metric, var1, var2, w = width);
            }
            ReportRow::Spanning { metric, value } => {
                let value = if value.is_empty() {
                    "-".dimmed()
                } else {
                    value.as_str().white().bold()
                };
                println!("  {:22} {}", metric, value);
            }
        }
    }

    if let Some(note) = &view.report.note {
        println!();
        println!("{} {}", "Note:".yellow(), note);
    }

    Ok(())
}
