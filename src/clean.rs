use crate::models::{
    RawTable, Transaction, TxnType, COL_AMOUNT, COL_BUDGET, COL_CATEGORY, COL_DESCRIPTION,
    COL_MONTH, COL_TYPE,
};

/// Coerce a raw cell to an amount. Strips currency symbols, thousands
/// separators, and surrounding quotes; accepts parenthesized negatives.
/// `None` is the missing sentinel — rows carrying it get dropped.
pub fn coerce_amount(raw: &str) -> Option<f64> {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return inner.trim().parse::<f64>().ok().map(|v| -v);
    }
    s.parse().ok()
}

fn cell<'a>(row: &'a [String], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

/// Normalize a validated-shape table into cleaned transactions.
///
/// Never fails: rows whose amount cannot be coerced are silently dropped
/// (survivor order preserved), text columns are trimmed, and a missing or
/// blank description falls back to the category.
pub fn clean(table: &RawTable) -> Vec<Transaction> {
    let idx_month = table.column_index(COL_MONTH);
    let idx_type = table.column_index(COL_TYPE);
    let idx_category = table.column_index(COL_CATEGORY);
    let idx_amount = table.column_index(COL_AMOUNT);
    let idx_description = table.column_index(COL_DESCRIPTION);
    let idx_budget = table.column_index(COL_BUDGET);

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(amount) = coerce_amount(cell(row, idx_amount)) else {
            continue;
        };
        let category = cell(row, idx_category).trim().to_string();
        let description = match cell(row, idx_description).trim() {
            "" => category.clone(),
            d => d.to_string(),
        };
        out.push(Transaction {
            month: cell(row, idx_month).trim().to_string(),
            kind: TxnType::from_label(cell(row, idx_type).trim()),
            category,
            description,
            amount,
            budget: coerce_amount(cell(row, idx_budget)),
        });
    }
    out
}
