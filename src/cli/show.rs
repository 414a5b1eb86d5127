use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use crate::cache::SheetCache;
use crate::charts;
use crate::cli::render;
use crate::cli::FilterArgs;
use crate::error::Result;
use crate::fmt::money;
use crate::kpi;
use crate::loader::{resolve, Upload};
use crate::models::TxnType;
use crate::settings::load_settings;

const PREVIEW_ROWS: usize = 10;

pub fn run(
    file: Option<&str>,
    filter_args: &FilterArgs,
    all: bool,
    breakdown_kind: &str,
) -> Result<()> {
    let settings = load_settings();
    let mut cache = SheetCache::new(Duration::from_secs(settings.cache_ttl_secs));

    let upload = match file {
        Some(path) => Some(Upload::from_path(Path::new(path))?),
        None => None,
    };
    let resolved = resolve(upload.as_ref(), &settings, &mut cache);

    render::print_notices(&resolved.notices);
    println!(
        "{}",
        render::status_line(resolved.provenance, resolved.transactions.len())
    );
    println!();

    let filter = filter_args.to_filter();
    let view = filter.apply(&resolved.transactions);
    if view.is_empty() {
        // A filter state, not a data-loading failure. No fallback.
        println!(
            "{}",
            "No data matches your filters. Please adjust your selection.".yellow()
        );
        return Ok(());
    }
    if !filter.is_empty() {
        println!("Current view: {} of {} transactions", view.len(), resolved.transactions.len());
        println!();
    }

    println!("{}", "Key Performance Indicators".bold());
    println!("{}", render::kpi_table(&kpi::compute(&view)));
    println!();

    render::print_monthly_overview(&charts::monthly_overview(&view));
    println!();

    render::print_breakdown(&charts::category_breakdown(
        &view,
        &TxnType::from_label(breakdown_kind),
    ));
    println!();

    let trend = charts::savings_trend(&view);
    if trend.len() > 1 {
        render::print_trend(&trend);
        println!();
    }

    if let Some(rows) = charts::budget_comparison(&view) {
        println!("{}", "Budget vs Actual by Category".bold());
        for row in &rows {
            println!(
                "  {:<16} actual {:>12}   budget {:>12}",
                row.category,
                money(row.actual),
                money(row.budget)
            );
        }
        println!();
    }

    println!("{}", "Transaction Details".bold());
    if all || view.len() <= PREVIEW_ROWS {
        println!("{}", render::txn_table(&view));
    } else {
        println!("{}", render::txn_table(&view[..PREVIEW_ROWS]));
        println!(
            "Showing {PREVIEW_ROWS} of {} transactions. Pass --all to see the rest.",
            view.len()
        );
    }

    Ok(())
}
