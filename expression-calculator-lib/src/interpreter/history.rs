use std::collections::VecDeque;

/// One past evaluation, as the user saw it: the expression text and the
/// displayed result (which may be the error string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub expression: String,
    pub result: String,
}

/// An append-only, capacity-bounded record of past evaluations.
///
/// The ledger never grows past its capacity: recording into a full ledger
/// drops the oldest entry first. There is no element-wise removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLedger {
    capacity: usize,
    items: VecDeque<HistoryItem>,
}

impl HistoryLedger {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HistoryLedger {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns a new ledger with the given evaluation appended, evicting
    /// the oldest entry if the ledger was already at capacity.
    pub fn record(&self, expression: impl Into<String>, result: impl Into<String>) -> Self {
        let mut items = self.items.clone();
        while items.len() >= self.capacity.max(1) {
            items.pop_front();
        }
        if self.capacity > 0 {
            items.push_back(HistoryItem {
                expression: expression.into(),
                result: result.into(),
            });
        }
        HistoryLedger {
            capacity: self.capacity,
            items,
        }
    }

    /// Recorded evaluations, oldest first.
    pub fn items(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recording_appends_in_insertion_order() {
        let ledger = HistoryLedger::new()
            .record("1+1", "2")
            .record("2+2", "4");

        let expressions: Vec<&str> = ledger.items().map(|item| item.expression.as_str()).collect();
        assert_eq!(expressions, vec!["1+1", "2+2"]);
    }

    #[test]
    fn recording_does_not_mutate_the_original_ledger() {
        let before = HistoryLedger::new().record("1+1", "2");

        let after = before.record("2+2", "4");

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn recording_past_capacity_evicts_the_oldest_entry() {
        let capacity = 3;
        let mut ledger = HistoryLedger::with_capacity(capacity);
        for index in 0..=capacity {
            ledger = ledger.record(format!("{index}+0"), format!("{index}"));
        }

        assert_eq!(ledger.len(), capacity);
        let expressions: Vec<&str> = ledger.items().map(|item| item.expression.as_str()).collect();
        assert_eq!(expressions, vec!["1+0", "2+0", "3+0"]);
    }

    #[test]
    fn default_capacity_is_ten() {
        let mut ledger = HistoryLedger::new();
        for index in 0..20 {
            ledger = ledger.record(format!("{index}"), format!("{index}"));
        }

        assert_eq!(ledger.len(), HistoryLedger::DEFAULT_CAPACITY);
    }

    #[test]
    fn failed_evaluations_are_recorded_like_any_other() {
        let ledger = HistoryLedger::new().record("5+", "Error");

        assert_eq!(
            ledger.items().next().unwrap(),
            &HistoryItem {
                expression: "5+".to_string(),
                result: "Error".to_string(),
            }
        );
    }

    #[test]
    fn zero_capacity_ledger_stays_empty() {
        let ledger = HistoryLedger::with_capacity(0).record("1+1", "2");

        assert!(ledger.is_empty());
    }
}
