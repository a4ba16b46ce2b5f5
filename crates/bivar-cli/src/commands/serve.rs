//! Serve command - run the interactive dashboard in the browser.

use colored::Colorize;

use super::load_dashboard;
use crate::cli::SourceArgs;
use crate::server::{app, state::AppState};

pub fn run(
    source: SourceArgs,
    port: u16,
    no_open: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = load_dashboard(&source)?;

    if verbose {
        for meta in dashboard.sources() {
            println!(
                "  {} {} rows, {} ({})",
                meta.file, meta.row_count, meta.format, meta.hash
            );
        }
    }

    let state = AppState::new(dashboard);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })?;

    Ok(())
}
