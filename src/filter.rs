use crate::models::Transaction;

/// A view selection over a cleaned table. Empty lists mean "everything".
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub months: Vec<String>,
    pub categories: Vec<String>,
    pub kinds: Vec<String>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty() && self.categories.is_empty() && self.kinds.is_empty()
    }

    fn matches(&self, t: &Transaction) -> bool {
        (self.months.is_empty() || self.months.contains(&t.month))
            && (self.categories.is_empty() || self.categories.contains(&t.category))
            && (self.kinds.is_empty() || self.kinds.iter().any(|k| k.as_str() == t.kind.label()))
    }

    /// Derive a new table; the source is untouched. Zero survivors is a
    /// valid filter-configuration state, not an error.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}
