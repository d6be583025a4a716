use parking_lot::RwLock;

use crate::engine::AutocompleteEngine;

/// Thread-safe wrapper for deploying one engine behind many callers.
///
/// Indexing takes the write lock, so decay and increment are observed as a
/// single atomic update. Searches share the read lock and may run
/// concurrently with each other.
pub struct SharedEngine {
    inner: RwLock<AutocompleteEngine>,
}

impl SharedEngine {
    pub fn new(engine: AutocompleteEngine) -> Self {
        Self {
            inner: RwLock::new(engine),
        }
    }

    pub fn index_term(&self, term: &str, category: Option<&str>) {
        self.inner.write().index_term(term, category);
    }

    pub fn search(&self, prefix: &str, category: Option<&str>, limit: usize) -> Vec<String> {
        self.inner.read().search(prefix, category, limit)
    }

    pub fn suggest(&self, prefix: &str, category: Option<&str>) -> Vec<String> {
        self.inner.read().suggest(prefix, category)
    }

    /// Index-then-search under one write lock; no other caller can observe
    /// the state between the two steps.
    pub fn simulate_user_interaction(&self, category: &str, term: &str) -> Vec<String> {
        self.inner.write().simulate_user_interaction(category, term)
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(AutocompleteEngine::new())
    }
}
