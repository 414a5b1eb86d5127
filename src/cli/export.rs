use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use crate::cache::SheetCache;
use crate::cli::render;
use crate::cli::FilterArgs;
use crate::error::Result;
use crate::loader::{resolve, Upload};
use crate::settings::load_settings;
use crate::template::export_csv;

pub fn run(path: &str, file: Option<&str>, filter_args: &FilterArgs) -> Result<()> {
    let settings = load_settings();
    let mut cache = SheetCache::new(Duration::from_secs(settings.cache_ttl_secs));

    let upload = match file {
        Some(p) => Some(Upload::from_path(Path::new(p))?),
        None => None,
    };
    let resolved = resolve(upload.as_ref(), &settings, &mut cache);
    render::print_notices(&resolved.notices);

    let view = filter_args.to_filter().apply(&resolved.transactions);
    if view.is_empty() {
        println!("{}", "No data matches your filters; nothing exported.".yellow());
        return Ok(());
    }

    std::fs::write(path, export_csv(&view)?)?;
    println!(
        "{} {} transactions ({}) written to {path}",
        "ok:".green(),
        view.len(),
        resolved.provenance.label()
    );
    Ok(())
}
