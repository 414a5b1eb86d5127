use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

/// Public read-only sample sheet, exported as CSV. No API key needed.
const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1k6DNSgJ5XHw1D7rM7JTkv_d8TmqVstgwTwj8qETBKsU/export?format=csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_sheet_url")]
    pub sheet_url: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_sheet_url() -> String {
    DEFAULT_SHEET_URL.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheet_url: default_sheet_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("findash")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Load settings from disk, falling back to defaults, then apply the
/// `GOOGLE_SHEET_URL` environment override.
pub fn load_settings() -> Settings {
    let path = settings_path();
    let mut settings = if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    };
    if let Ok(url) = std::env::var("GOOGLE_SHEET_URL") {
        if !url.is_empty() {
            settings.sheet_url = url;
        }
    }
    settings
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| DashError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.cache_ttl_secs, 300);
        assert_eq!(s.fetch_timeout_secs, 10);
        assert!(s.sheet_url.contains("export?format=csv"));
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"sheet_url": "http://example.test/sheet.csv"}"#).unwrap();
        assert_eq!(s.sheet_url, "http://example.test/sheet.csv");
        assert_eq!(s.cache_ttl_secs, 300);
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            sheet_url: "http://example.test/a.csv".to_string(),
            cache_ttl_secs: 60,
            fetch_timeout_secs: 5,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let loaded: Settings = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.sheet_url, settings.sheet_url);
        assert_eq!(loaded.cache_ttl_secs, 60);
    }
}
