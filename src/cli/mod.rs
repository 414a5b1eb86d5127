pub mod check;
pub mod config;
pub mod demo;
pub mod export;
pub mod kpis;
pub mod render;
pub mod show;
pub mod template;

use clap::{Args, Parser, Subcommand};

use crate::filter::Filter;

#[derive(Parser)]
#[command(name = "findash", about = "Terminal personal-finance dashboard over CSV/Excel transaction data.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by the view-producing commands.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only include these months (repeatable)
    #[arg(long = "month")]
    pub months: Vec<String>,
    /// Only include these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Only include these transaction types (repeatable)
    #[arg(long = "kind")]
    pub kinds: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Filter {
        Filter {
            months: self.months.clone(),
            categories: self.categories.clone(),
            kinds: self.kinds.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard: KPIs, charts, and transaction table.
    Show {
        /// CSV or Excel file to analyze (falls back to the remote sheet, then demo data)
        #[arg(long)]
        file: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
        /// Show every transaction instead of the first 10
        #[arg(long)]
        all: bool,
        /// Expense type for the category breakdown (Fixed, Variable, or Investment)
        #[arg(long, default_value = "Variable")]
        breakdown: String,
    },
    /// Print the KPI set for the active dataset.
    Kpis {
        /// CSV or Excel file to analyze
        #[arg(long)]
        file: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a data file and report what the dashboard would load.
    Check {
        /// Path to a CSV or Excel file
        file: String,
    },
    /// Write the sample CSV template users fill in and upload back.
    Template {
        /// Output path (default: financial_data_template.csv)
        #[arg(default_value = "financial_data_template.csv")]
        path: String,
    },
    /// Export the active (optionally filtered) dataset as CSV.
    Export {
        /// Output path
        path: String,
        /// CSV or Excel file to analyze
        #[arg(long)]
        file: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the built-in demo dataset.
    Demo,
    /// Show or update the saved configuration.
    Config {
        /// Remote sheet CSV-export URL
        #[arg(long)]
        sheet_url: Option<String>,
        /// Remote-sheet cache TTL in seconds
        #[arg(long)]
        cache_ttl: Option<u64>,
        /// Remote fetch timeout in seconds
        #[arg(long)]
        fetch_timeout: Option<u64>,
    },
}
