//! Columns command - list the variables available for selection.

use bivar::VariableKind;
use colored::Colorize;

use super::load_dashboard;
use crate::cli::SourceArgs;

pub fn run(source: SourceArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = load_dashboard(&source)?;
    let schema = dashboard.schema();

    if json {
        println!("{}", serde_json::to_string_pretty(schema)?);
        return Ok(());
    }

    println!();
    println!(
        "  {:24} {:10} {:14} {:>8} {:>9}",
        "Column".bold(),
        "Storage".bold(),
        "Kind".bold(),
        "Missing".bold(),
        "Distinct".bold()
    );
    for col in &schema.columns {
        let kind = match col.kind {
            VariableKind::Quantitative => col.kind.as_str().green(),
            VariableKind::Categorical => col.kind.as_str().blue(),
        };
        println!(
            "  {:24} {:10} {:14} {:>8} {:>9}",
            col.name,
            format!("{:?}", col.storage_type),
            kind,
            format!("{:.1}%", col.missing_percentage()),
            col.distinct_count
        );
    }

    println!();
    println!(
        "{} quantitative, {} categorical",
        schema
            .columns_of_kind(VariableKind::Quantitative)
            .count()
            .to_string()
            .green(),
        schema
            .columns_of_kind(VariableKind::Categorical)
            .count()
            .to_string()
            .blue()
    );

    Ok(())
}
