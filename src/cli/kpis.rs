use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use crate::cache::SheetCache;
use crate::cli::render;
use crate::cli::FilterArgs;
use crate::error::{DashError, Result};
use crate::kpi;
use crate::loader::{resolve, Upload};
use crate::settings::load_settings;

pub fn run(file: Option<&str>, filter_args: &FilterArgs, json: bool) -> Result<()> {
    let settings = load_settings();
    let mut cache = SheetCache::new(Duration::from_secs(settings.cache_ttl_secs));

    let upload = match file {
        Some(path) => Some(Upload::from_path(Path::new(path))?),
        None => None,
    };
    let resolved = resolve(upload.as_ref(), &settings, &mut cache);
    render::print_notices(&resolved.notices);

    let view = filter_args.to_filter().apply(&resolved.transactions);
    if view.is_empty() {
        // Stderr so --json output stays machine-readable.
        eprintln!(
            "{}",
            "No data matches your filters. Please adjust your selection.".yellow()
        );
    }
    let kpis = kpi::compute(&view);

    if json {
        let payload = serde_json::json!({
            "provenance": resolved.provenance,
            "transactions": view.len(),
            "kpis": kpis,
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| DashError::Other(format!("Failed to serialize KPIs: {e}")))?;
        println!("{rendered}");
    } else {
        println!(
            "{}",
            render::status_line(resolved.provenance, resolved.transactions.len())
        );
        println!("{}", render::kpi_table(&kpis));
    }
    Ok(())
}
