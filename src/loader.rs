use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use crate::cache::SheetCache;
use crate::clean::clean;
use crate::error::{DashError, Result};
use crate::models::{Provenance, RawTable, Transaction, TxnType};
use crate::schema::validate;
use crate::settings::Settings;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_ROWS: usize = 10_000;

// ---------------------------------------------------------------------------
// Raw-table parsers
// ---------------------------------------------------------------------------

pub fn parse_csv_bytes(data: &[u8]) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(Cursor::new(data));
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    Ok(RawTable { headers, rows })
}

/// Render a spreadsheet cell the way a CSV would carry it, so the cleaner's
/// coercion applies identically to both parsers. Integral floats lose the
/// trailing `.0` (month codes stored as numbers must stay clean tokens).
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

pub fn parse_spreadsheet_bytes(data: &[u8]) -> Result<RawTable> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| DashError::Spreadsheet(e.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| DashError::Spreadsheet("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| DashError::Spreadsheet(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(RawTable::default()),
    };
    let rows: Vec<Vec<String>> = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// Upload loader
// ---------------------------------------------------------------------------

/// A user-supplied file: name, declared byte size, and content.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub declared_size: u64,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload from a local path. Oversize files are never read;
    /// their declared size alone makes [`load_upload`] reject them, which
    /// keeps the failure inside the fallback chain instead of aborting the
    /// command.
    pub fn from_path(path: &Path) -> Result<Self> {
        let declared_size = std::fs::metadata(path)?.len();
        let bytes = if declared_size > MAX_UPLOAD_BYTES {
            Vec::new()
        } else {
            std::fs::read(path)?
        };
        Ok(Self {
            filename: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string(),
            declared_size,
            bytes,
        })
    }

    fn extension(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
    }
}

/// A cleaned table plus the pre-truncation row count, when the cap applied.
#[derive(Debug)]
pub struct LoadedUpload {
    pub transactions: Vec<Transaction>,
    pub truncated_from: Option<usize>,
}

/// Parse, limit, validate, and clean an uploaded file.
///
/// The size limit rejects before any parsing; the row cap truncates to the
/// first [`MAX_ROWS`] rows instead of rejecting.
pub fn load_upload(upload: &Upload) -> Result<LoadedUpload> {
    if upload.declared_size > MAX_UPLOAD_BYTES {
        return Err(DashError::OversizeUpload(upload.declared_size));
    }

    let mut table = match upload.extension().as_str() {
        "csv" => parse_csv_bytes(&upload.bytes)?,
        "xlsx" | "xls" => parse_spreadsheet_bytes(&upload.bytes)?,
        _ => return Err(DashError::UnsupportedFormat(upload.filename.clone())),
    };

    let truncated_from = if table.rows.len() > MAX_ROWS {
        let original = table.rows.len();
        table.rows.truncate(MAX_ROWS);
        Some(original)
    } else {
        None
    };

    validate(&table)?;
    Ok(LoadedUpload {
        transactions: clean(&table),
        truncated_from,
    })
}

// ---------------------------------------------------------------------------
// Remote-sheet loader
// ---------------------------------------------------------------------------

/// Fetch and clean the configured sheet export, consulting the cache first.
pub fn load_remote(settings: &Settings, cache: &mut SheetCache) -> Result<Vec<Transaction>> {
    if let Some(cached) = cache.get(&settings.sheet_url) {
        return Ok(cached.to_vec());
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(settings.fetch_timeout_secs))
        .build()
        .map_err(|e| DashError::Transport(e.to_string()))?;
    let response = client
        .get(&settings.sheet_url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| DashError::Transport(e.to_string()))?;
    let body = response
        .bytes()
        .map_err(|e| DashError::Transport(e.to_string()))?;

    let table = parse_csv_bytes(&body)?;
    validate(&table)?;
    let transactions = clean(&table);
    cache.put(&settings.sheet_url, transactions.clone());
    Ok(transactions)
}

// ---------------------------------------------------------------------------
// Demo generator
// ---------------------------------------------------------------------------

struct DemoRow {
    month: &'static str,
    kind: &'static str,
    category: &'static str,
    description: &'static str,
    amount: f64,
}

const DEMO_ROWS: &[DemoRow] = &[
    DemoRow { month: "August2025", kind: "Income", category: "Salary", description: "Main job", amount: 5000.0 },
    DemoRow { month: "August2025", kind: "Income", category: "Freelance", description: "Freelance work", amount: 1200.0 },
    DemoRow { month: "August2025", kind: "Fixed", category: "Housing", description: "Rent", amount: -1200.0 },
    DemoRow { month: "August2025", kind: "Fixed", category: "Utilities", description: "Bills", amount: -400.0 },
    DemoRow { month: "August2025", kind: "Variable", category: "Food", description: "Groceries", amount: -550.0 },
    DemoRow { month: "August2025", kind: "Variable", category: "Leisure", description: "Entertainment", amount: -220.0 },
    DemoRow { month: "September2025", kind: "Income", category: "Salary", description: "Main job", amount: 5000.0 },
    DemoRow { month: "September2025", kind: "Income", category: "Freelance", description: "Freelance work", amount: 1500.0 },
    DemoRow { month: "September2025", kind: "Fixed", category: "Housing", description: "Rent", amount: -1200.0 },
    DemoRow { month: "September2025", kind: "Fixed", category: "Utilities", description: "Bills", amount: -400.0 },
    DemoRow { month: "September2025", kind: "Variable", category: "Food", description: "Groceries", amount: -600.0 },
    DemoRow { month: "September2025", kind: "Variable", category: "Leisure", description: "Entertainment", amount: -200.0 },
];

/// Fixed two-month synthetic dataset, the terminal fallback. Never fails.
pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_ROWS
        .iter()
        .map(|r| Transaction {
            month: r.month.to_string(),
            kind: TxnType::from_label(r.kind),
            category: r.category.to_string(),
            description: r.description.to_string(),
            amount: r.amount,
            budget: None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fallback resolver
// ---------------------------------------------------------------------------

pub struct Resolved {
    pub transactions: Vec<Transaction>,
    pub provenance: Provenance,
    /// User-facing messages accumulated from sources that were tried and
    /// failed, plus truncation warnings.
    pub notices: Vec<String>,
}

/// Try sources in strict priority order (uploaded, remote, demo) and return
/// the first non-empty result. The demo fallback is terminal, so callers
/// never see an empty table.
pub fn resolve(
    upload: Option<&Upload>,
    settings: &Settings,
    cache: &mut SheetCache,
) -> Resolved {
    let mut notices = Vec::new();

    if let Some(upload) = upload {
        match load_upload(upload) {
            Ok(loaded) if !loaded.transactions.is_empty() => {
                if let Some(original) = loaded.truncated_from {
                    notices.push(format!(
                        "File has {original} rows; using the first {MAX_ROWS} only."
                    ));
                }
                return Resolved {
                    transactions: loaded.transactions,
                    provenance: Provenance::Uploaded,
                    notices,
                };
            }
            Ok(_) => notices.push("Upload contained no usable rows.".to_string()),
            Err(e) => notices.push(format!("Upload failed: {e}")),
        }
    }

    match load_remote(settings, cache) {
        Ok(transactions) if !transactions.is_empty() => {
            return Resolved {
                transactions,
                provenance: Provenance::Remote,
                notices,
            };
        }
        Ok(_) => notices.push("Remote sheet contained no usable rows.".to_string()),
        Err(e) => notices.push(format!("Remote data unavailable: {e}")),
    }

    Resolved {
        transactions: demo_transactions(),
        provenance: Provenance::Demo,
        notices,
    }
}
