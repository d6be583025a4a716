use std::collections::VecDeque;

use ahash::AHashMap;

/// Terms remembered per category before the oldest is evicted.
pub(crate) const HISTORY_CAPACITY: usize = 10;

/// Bounded log of the last terms indexed per category. Maintained for
/// embedders that want the raw recency stream; ranking never reads it.
#[derive(Default)]
pub(crate) struct ContextHistory {
    entries: AHashMap<String, VecDeque<String>>,
}

impl ContextHistory {
    pub fn record(&mut self, category: &str, term: &str) {
        let log = self.entries.entry(category.to_string()).or_default();
        if log.len() == HISTORY_CAPACITY {
            log.pop_front();
        }
        log.push_back(term.to_string());
    }

    /// Oldest first; empty for unknown categories.
    pub fn recent(&self, category: &str) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .get(category)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}
