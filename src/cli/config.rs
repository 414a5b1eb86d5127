use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, save_settings};

/// Show or update the persisted settings. With no flags, print the active
/// values (including any `GOOGLE_SHEET_URL` override).
pub fn run(
    sheet_url: Option<String>,
    cache_ttl: Option<u64>,
    fetch_timeout: Option<u64>,
) -> Result<()> {
    let mut settings = load_settings();

    if sheet_url.is_none() && cache_ttl.is_none() && fetch_timeout.is_none() {
        println!("sheet_url:          {}", settings.sheet_url);
        println!("cache_ttl_secs:     {}", settings.cache_ttl_secs);
        println!("fetch_timeout_secs: {}", settings.fetch_timeout_secs);
        return Ok(());
    }

    if let Some(url) = sheet_url {
        settings.sheet_url = url;
    }
    if let Some(ttl) = cache_ttl {
        settings.cache_ttl_secs = ttl;
    }
    if let Some(timeout) = fetch_timeout {
        settings.fetch_timeout_secs = timeout;
    }
    save_settings(&settings)?;
    println!("{} settings saved", "ok:".green());
    Ok(())
}
