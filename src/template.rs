use crate::error::{DashError, Result};
use crate::models::Transaction;

/// Columns in the downloadable template, in order.
const TEMPLATE_HEADERS: &[&str] = &["Month", "Type", "Category", "Description", "Amount"];

struct TemplateRow {
    month: &'static str,
    kind: &'static str,
    category: &'static str,
    description: &'static str,
    amount: f64,
}

const TEMPLATE_ROWS: &[TemplateRow] = &[
    TemplateRow { month: "January2025", kind: "Income", category: "Salary", description: "Monthly salary", amount: 5000.0 },
    TemplateRow { month: "January2025", kind: "Fixed", category: "Rent", description: "Apartment rent", amount: -1200.0 },
    TemplateRow { month: "January2025", kind: "Variable", category: "Food", description: "Groceries", amount: -400.0 },
    TemplateRow { month: "January2025", kind: "Variable", category: "Transportation", description: "Gas and parking", amount: -150.0 },
    TemplateRow { month: "February2025", kind: "Income", category: "Salary", description: "Monthly salary", amount: 5000.0 },
    TemplateRow { month: "February2025", kind: "Fixed", category: "Rent", description: "Apartment rent", amount: -1200.0 },
];

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| DashError::Other(format!("Failed to build CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DashError::Other(format!("CSV is not UTF-8: {e}")))
}

/// The sample CSV users download, fill in, and upload back. Round-trips
/// through the validator and cleaner unchanged.
pub fn template_csv() -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(TEMPLATE_HEADERS)?;
    for row in TEMPLATE_ROWS {
        let amount = format_amount(row.amount);
        wtr.write_record([
            row.month,
            row.kind,
            row.category,
            row.description,
            amount.as_str(),
        ])?;
    }
    finish(wtr)
}

/// Serialize a view as CSV with the template's column set, plus Budget when
/// any row carries one.
pub fn export_csv(transactions: &[Transaction]) -> Result<String> {
    let has_budget = transactions.iter().any(|t| t.budget.is_some());

    let mut wtr = csv::Writer::from_writer(Vec::new());
    let mut headers: Vec<&str> = TEMPLATE_HEADERS.to_vec();
    if has_budget {
        headers.push("Budget");
    }
    wtr.write_record(&headers)?;

    for t in transactions {
        let mut record = vec![
            t.month.clone(),
            t.kind.label().to_string(),
            t.category.clone(),
            t.description.clone(),
            format_amount(t.amount),
        ];
        if has_budget {
            record.push(t.budget.map(format_amount).unwrap_or_default());
        }
        wtr.write_record(&record)?;
    }
    finish(wtr)
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}
