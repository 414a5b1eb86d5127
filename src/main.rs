mod cache;
mod charts;
mod clean;
mod cli;
mod error;
mod filter;
mod fmt;
mod kpi;
mod loader;
mod models;
mod schema;
mod settings;
mod template;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show {
            file,
            filters,
            all,
            breakdown,
        } => cli::show::run(file.as_deref(), &filters, all, &breakdown),
        Commands::Kpis { file, filters, json } => cli::kpis::run(file.as_deref(), &filters, json),
        Commands::Check { file } => cli::check::run(&file),
        Commands::Template { path } => cli::template::run(&path),
        Commands::Export { path, file, filters } => {
            cli::export::run(&path, file.as_deref(), &filters)
        }
        Commands::Demo => cli::demo::run(),
        Commands::Config {
            sheet_url,
            cache_ttl,
            fetch_timeout,
        } => cli::config::run(sheet_url, cache_ttl, fetch_timeout),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}
