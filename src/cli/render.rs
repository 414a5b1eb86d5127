use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::charts::{CategoryBreakdown, MonthlyOverview, TrendPoint};
use crate::fmt::{money, pct};
use crate::models::{KpiSet, Provenance, Transaction};

const BAR_WIDTH: usize = 32;

pub fn status_line(provenance: Provenance, count: usize) -> String {
    match provenance {
        Provenance::Uploaded => format!(
            "{} {} transactions from your data",
            "Your file loaded successfully.".green(),
            count
        ),
        Provenance::Remote => format!(
            "{} {} sample transactions — pass --file to analyze your own data",
            "Showing sample sheet data.".cyan(),
            count
        ),
        Provenance::Demo => format!(
            "{} {} built-in transactions — pass --file to analyze your own data",
            "Using demo data.".yellow(),
            count
        ),
    }
}

pub fn print_notices(notices: &[String]) {
    for notice in notices {
        eprintln!("{} {notice}", "note:".yellow());
    }
}

pub fn kpi_table(kpis: &KpiSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Total Income"), Cell::new(money(kpis.total_income))]);
    table.add_row(vec![Cell::new("Total Expenses"), Cell::new(money(kpis.total_expenses))]);
    table.add_row(vec![Cell::new("Net Income"), Cell::new(money(kpis.net_income))]);
    table.add_row(vec![Cell::new("Savings Rate"), Cell::new(pct(kpis.savings_rate))]);
    table.add_row(vec![Cell::new("Investments"), Cell::new(money(kpis.total_investments))]);
    table
}

pub fn txn_table(transactions: &[Transaction]) -> Table {
    let has_budget = transactions.iter().any(|t| t.budget.is_some());
    let mut table = Table::new();
    let mut headers = vec!["Month", "Type", "Category", "Description", "Amount"];
    if has_budget {
        headers.push("Budget");
    }
    table.set_header(headers);
    for t in transactions {
        let mut row = vec![
            Cell::new(&t.month),
            Cell::new(t.kind.label()),
            Cell::new(&t.category),
            Cell::new(&t.description),
            Cell::new(money(t.amount)),
        ];
        if has_budget {
            row.push(Cell::new(t.budget.map(money).unwrap_or_default()));
        }
        table.add_row(row);
    }
    table
}

fn bar(value: f64, max_abs: f64) -> String {
    if max_abs <= 0.0 {
        return String::new();
    }
    let len = ((value.abs() / max_abs) * BAR_WIDTH as f64).round() as usize;
    let len = len.max(usize::from(value != 0.0));
    if len == 0 {
        return String::new();
    }
    let bar = "█".repeat(len);
    if value < 0.0 {
        bar.red().to_string()
    } else {
        bar.green().to_string()
    }
}

pub fn print_monthly_overview(overview: &MonthlyOverview) {
    println!("{}", "Monthly Income vs Expenses".bold());
    let max_abs = overview
        .series
        .iter()
        .flat_map(|s| s.totals.iter())
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    for (i, month) in overview.months.iter().enumerate() {
        println!("  {month}");
        for series in &overview.series {
            let total = series.totals[i];
            if total == 0.0 {
                continue;
            }
            println!(
                "    {:<12} {:>12}  {}",
                series.kind,
                money(total),
                bar(total, max_abs)
            );
        }
    }
}

pub fn print_breakdown(breakdown: &CategoryBreakdown) {
    println!("{}", format!("{} Expenses Breakdown", breakdown.kind).bold());
    if breakdown.slices.is_empty() {
        println!("  (no {} transactions in the current view)", breakdown.kind);
        return;
    }
    for slice in &breakdown.slices {
        println!(
            "  {:<16} {:>12}  {:>6}  {}",
            slice.category,
            money(slice.total),
            pct(slice.pct),
            bar(slice.total, breakdown.total)
        );
    }
}

pub fn print_trend(trend: &[TrendPoint]) {
    println!("{}", "Monthly Savings Trend".bold());
    let max_abs = trend
        .iter()
        .fold(0.0f64, |acc, p| acc.max(p.net_savings.abs()));
    for point in trend {
        println!(
            "  {:<16} {:>12}  {}",
            point.month,
            money(point.net_savings),
            bar(point.net_savings, max_abs)
        );
    }
}
