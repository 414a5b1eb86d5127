use std::path::Path;

use colored::Colorize;

use crate::charts::distinct_months;
use crate::error::Result;
use crate::loader::{load_upload, Upload};

/// Validate a file standalone and report what `show --file` would load.
/// Validation failures are the expected output here, not program errors.
pub fn run(file: &str) -> Result<()> {
    let upload = match Upload::from_path(Path::new(file)) {
        Ok(upload) => upload,
        Err(e) => {
            println!("{} {e}", "invalid:".red());
            return Ok(());
        }
    };

    match load_upload(&upload) {
        Ok(loaded) => {
            println!("{} {}", "valid:".green(), upload.filename);
            println!("  Transactions: {}", loaded.transactions.len());
            println!("  Months:       {}", distinct_months(&loaded.transactions).join(", "));
            if let Some(original) = loaded.truncated_from {
                println!(
                    "  {} file has {original} rows; only the first {} would be used",
                    "warning:".yellow(),
                    loaded.transactions.len()
                );
            }
        }
        Err(e) => {
            println!("{} {e}", "invalid:".red());
            println!("Run `findash template` to get a file with the correct format.");
        }
    }
    Ok(())
}
