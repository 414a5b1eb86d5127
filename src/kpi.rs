use crate::models::{KpiSet, Transaction, TxnType};

/// Reduce a cleaned table to its aggregate metrics.
///
/// Expenses and investments are stored as negative amounts and reported as
/// positive magnitudes. Investments are excluded from net income and the
/// savings rate. Transaction types outside the four recognized ones do not
/// enter any formula. An empty table yields all zeros.
pub fn compute(transactions: &[Transaction]) -> KpiSet {
    // `Sum<f64>` uses -0.0 as its identity, so an empty selection would sum
    // to -0.0; adding 0.0 normalizes the sign without affecting other values.
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TxnType::Income)
        .map(|t| t.amount)
        .sum::<f64>()
        + 0.0;
    let expense_sum: f64 = transactions
        .iter()
        .filter(|t| t.kind.is_expense())
        .map(|t| t.amount)
        .sum::<f64>()
        + 0.0;
    let investment_sum: f64 = transactions
        .iter()
        .filter(|t| t.kind == TxnType::Investment)
        .map(|t| t.amount)
        .sum::<f64>()
        + 0.0;

    let net_income = total_income + expense_sum;
    let savings_rate = if total_income > 0.0 {
        net_income / total_income * 100.0
    } else {
        0.0
    };

    KpiSet {
        total_income,
        total_expenses: expense_sum.abs(),
        total_investments: investment_sum.abs(),
        net_income,
        savings_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::demo_transactions;

    fn txn(kind: &str, amount: f64) -> Transaction {
        Transaction {
            month: "Jan2025".into(),
            kind: TxnType::from_label(kind),
            category: "Cat".into(),
            description: "Cat".into(),
            amount,
            budget: None,
        }
    }

    #[test]
    fn test_empty_table_all_zeros() {
        let kpis = compute(&[]);
        assert_eq!(kpis.total_income, 0.0);
        assert_eq!(kpis.total_expenses, 0.0);
        assert_eq!(kpis.total_investments, 0.0);
        assert_eq!(kpis.net_income, 0.0);
        assert_eq!(kpis.savings_rate, 0.0);
    }

    #[test]
    fn test_basic_formulas() {
        let txns = vec![
            txn("Income", 5000.0),
            txn("Fixed", -1200.0),
            txn("Variable", -400.0),
            txn("Investment", -500.0),
        ];
        let kpis = compute(&txns);
        assert_eq!(kpis.total_income, 5000.0);
        assert_eq!(kpis.total_expenses, 1600.0);
        assert_eq!(kpis.total_investments, 500.0);
        assert_eq!(kpis.net_income, 3400.0);
        assert!((kpis.savings_rate - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_investments_excluded_from_net_income() {
        let with = compute(&[txn("Income", 1000.0), txn("Investment", -900.0)]);
        assert_eq!(with.net_income, 1000.0);
        assert_eq!(with.savings_rate, 100.0);
    }

    #[test]
    fn test_unrecognized_types_ignored() {
        let kpis = compute(&[txn("Income", 1000.0), txn("Transfer", -999.0)]);
        assert_eq!(kpis.total_income, 1000.0);
        assert_eq!(kpis.total_expenses, 0.0);
        assert_eq!(kpis.net_income, 1000.0);
    }

    #[test]
    fn test_zero_income_savings_rate_defined() {
        let kpis = compute(&[txn("Fixed", -100.0)]);
        assert_eq!(kpis.savings_rate, 0.0);
        assert_eq!(kpis.net_income, -100.0);
    }

    #[test]
    fn test_demo_dataset_kpis() {
        let kpis = compute(&demo_transactions());
        assert_eq!(kpis.total_income, 12_700.0);
        assert_eq!(kpis.total_expenses, 4_770.0);
        assert_eq!(kpis.net_income, 7_930.0);
        assert!((kpis.savings_rate - 100.0 * 7_930.0 / 12_700.0).abs() < 1e-9);
    }
}
