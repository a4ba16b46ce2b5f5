//! bivar CLI - interactive bivariate analytics dashboard.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Columns { source, json } => commands::columns::run(source, json),

        Commands::Summary {
            source,
            var1,
            var2,
            json,
        } => commands::summary::run(source, var1, var2, json),

        Commands::Serve {
            source,
            port,
            no_open,
        } => commands::serve::run(source, port, no_open, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
