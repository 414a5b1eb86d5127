use crate::clean::coerce_amount;
use crate::error::{DashError, Result};
use crate::models::{RawTable, COL_AMOUNT, REQUIRED_COLUMNS};

/// Check a raw table against the required schema.
///
/// Column matching is case-sensitive. `NonNumericAmount` fires only when no
/// row's amount coerces at all; partial failures survive to the cleaner,
/// which drops the offending rows.
pub fn validate(table: &RawTable) -> Result<()> {
    if table.is_empty() {
        return Err(DashError::EmptyInput);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| table.column_index(col).is_none())
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DashError::MissingColumns(missing));
    }

    let idx_amount = table
        .column_index(COL_AMOUNT)
        .expect("checked above");
    let any_numeric = table
        .rows
        .iter()
        .any(|row| row.get(idx_amount).is_some_and(|c| coerce_amount(c).is_some()));
    if !any_numeric {
        return Err(DashError::NonNumericAmount);
    }

    Ok(())
}
