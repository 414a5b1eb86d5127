use std::collections::BTreeMap;

use crate::models::{Transaction, TxnType};

// Pure transforms from a cleaned table to chart data. Rendering lives in the
// CLI layer; nothing here touches IO.

/// Distinct month labels in sorted order. Months are opaque tokens, so the
/// ordering is lexical.
pub fn distinct_months(transactions: &[Transaction]) -> Vec<String> {
    let mut months: Vec<String> = transactions.iter().map(|t| t.month.clone()).collect();
    months.sort();
    months.dedup();
    months
}

// ---------------------------------------------------------------------------
// Monthly income vs. expense overview
// ---------------------------------------------------------------------------

pub struct TypeSeries {
    pub kind: String,
    /// One total per month, aligned with `MonthlyOverview::months`.
    pub totals: Vec<f64>,
}

pub struct MonthlyOverview {
    pub months: Vec<String>,
    pub series: Vec<TypeSeries>,
}

pub fn monthly_overview(transactions: &[Transaction]) -> MonthlyOverview {
    let months = distinct_months(transactions);

    let mut by_kind: BTreeMap<String, BTreeMap<&str, f64>> = BTreeMap::new();
    for t in transactions {
        *by_kind
            .entry(t.kind.label().to_string())
            .or_default()
            .entry(t.month.as_str())
            .or_default() += t.amount;
    }

    let series = by_kind
        .into_iter()
        .map(|(kind, totals)| TypeSeries {
            totals: months
                .iter()
                .map(|m| totals.get(m.as_str()).copied().unwrap_or(0.0))
                .collect(),
            kind,
        })
        .collect();

    MonthlyOverview { months, series }
}

// ---------------------------------------------------------------------------
// Category breakdown for one expense kind
// ---------------------------------------------------------------------------

pub struct Slice {
    pub category: String,
    pub total: f64,
    pub pct: f64,
}

pub struct CategoryBreakdown {
    pub kind: String,
    pub slices: Vec<Slice>,
    pub total: f64,
}

/// Absolute per-category totals for one transaction kind, largest first.
pub fn category_breakdown(transactions: &[Transaction], kind: &TxnType) -> CategoryBreakdown {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for t in transactions.iter().filter(|t| &t.kind == kind) {
        *totals.entry(t.category.as_str()).or_default() += t.amount.abs();
    }
    let total: f64 = totals.values().sum();

    let mut slices: Vec<Slice> = totals
        .into_iter()
        .map(|(category, sum)| Slice {
            category: category.to_string(),
            total: sum,
            pct: if total > 0.0 { sum / total * 100.0 } else { 0.0 },
        })
        .collect();
    slices.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));

    CategoryBreakdown {
        kind: kind.label().to_string(),
        slices,
        total,
    }
}

// ---------------------------------------------------------------------------
// Budget vs. actual
// ---------------------------------------------------------------------------

pub struct BudgetRow {
    pub category: String,
    pub actual: f64,
    pub budget: f64,
}

/// Per-category actual and budget sums. `None` when no row carries a budget,
/// which toggles the whole comparison off downstream.
pub fn budget_comparison(transactions: &[Transaction]) -> Option<Vec<BudgetRow>> {
    if transactions.iter().all(|t| t.budget.is_none()) {
        return None;
    }

    let mut by_category: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for t in transactions {
        let entry = by_category.entry(t.category.as_str()).or_default();
        entry.0 += t.amount;
        entry.1 += t.budget.unwrap_or(0.0);
    }

    Some(
        by_category
            .into_iter()
            .map(|(category, (actual, budget))| BudgetRow {
                category: category.to_string(),
                actual,
                budget,
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Savings trend
// ---------------------------------------------------------------------------

pub struct TrendPoint {
    pub month: String,
    pub net_savings: f64,
}

/// Net savings per month: income plus the (negative) Fixed/Variable sums.
/// Investments and unrecognized kinds do not move the trend.
pub fn savings_trend(transactions: &[Transaction]) -> Vec<TrendPoint> {
    distinct_months(transactions)
        .into_iter()
        .map(|month| {
            let net: f64 = transactions
                .iter()
                .filter(|t| t.month == month)
                .filter(|t| t.kind == TxnType::Income || t.kind.is_expense())
                .map(|t| t.amount)
                .sum();
            TrendPoint {
                month,
                net_savings: net,
            }
        })
        .collect()
}
