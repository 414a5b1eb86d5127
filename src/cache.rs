use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::Transaction;

/// Time-bounded cache for remote-sheet results, keyed by source URL.
/// Upload results never go through here; only the remote loader uses it.
pub struct SheetCache {
    ttl: Duration,
    entries: HashMap<String, (Instant, Vec<Transaction>)>,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, url: &str) -> Option<&[Transaction]> {
        let (stored_at, txns) = self.entries.get(url)?;
        if stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(txns)
    }

    pub fn put(&mut self, url: &str, txns: Vec<Transaction>) {
        self.entries.insert(url.to_string(), (Instant::now(), txns));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxnType;

    fn txn() -> Transaction {
        Transaction {
            month: "Jan2025".into(),
            kind: TxnType::Income,
            category: "Salary".into(),
            description: "Salary".into(),
            amount: 5000.0,
            budget: None,
        }
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let mut cache = SheetCache::new(Duration::from_secs(300));
        cache.put("http://a", vec![txn()]);
        assert_eq!(cache.get("http://a").unwrap().len(), 1);
    }

    #[test]
    fn test_zero_ttl_always_expired() {
        let mut cache = SheetCache::new(Duration::ZERO);
        cache.put("http://a", vec![txn()]);
        assert!(cache.get("http://a").is_none());
    }

    #[test]
    fn test_keyed_by_url() {
        let mut cache = SheetCache::new(Duration::from_secs(300));
        cache.put("http://a", vec![txn()]);
        assert!(cache.get("http://b").is_none());
    }
}
