use ahash::AHashMap;

/// Occurrence tracking: monotone global counts plus per-category scores
/// that decay multiplicatively on every new occurrence in that category.
///
/// Absent keys read as zero everywhere; nothing here ever fails.
pub(crate) struct FrequencyStore {
    global: AHashMap<String, u64>,
    max_global: u64,
    context: AHashMap<String, AHashMap<String, f64>>,
    decay_factor: f64,
}

impl FrequencyStore {
    pub fn new(decay_factor: f64) -> Self {
        Self {
            global: AHashMap::new(),
            max_global: 0,
            context: AHashMap::new(),
            decay_factor,
        }
    }

    pub fn record_global(&mut self, term: &str) {
        let count = self.global.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.max_global = self.max_global.max(*count);
    }

    /// Decays every existing score in the category, then bumps `term` by 1.0.
    /// The decay and the increment form one update; callers must not observe
    /// the map between the two steps.
    pub fn record_context(&mut self, category: &str, term: &str) {
        let scores = self.context.entry(category.to_string()).or_default();
        for score in scores.values_mut() {
            *score *= self.decay_factor;
        }
        *scores.entry(term.to_string()).or_insert(0.0) += 1.0;
    }

    pub fn global_count(&self, term: &str) -> u64 {
        self.global.get(term).copied().unwrap_or(0)
    }

    pub fn max_global_count(&self) -> u64 {
        self.max_global
    }

    pub fn context_score(&self, category: &str, term: &str) -> f64 {
        self.context
            .get(category)
            .and_then(|scores| scores.get(term))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn max_context_score(&self, category: &str) -> f64 {
        self.context
            .get(category)
            .map(|scores| scores.values().fold(0.0, |max: f64, &s| max.max(s)))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_reads_as_zero() {
        let store = FrequencyStore::new(0.9);
        assert_eq!(store.global_count("apple"), 0);
        assert_eq!(store.max_global_count(), 0);
        assert_eq!(store.context_score("fruits", "apple"), 0.0);
        assert_eq!(store.max_context_score("fruits"), 0.0);
    }

    #[test]
    fn global_counts_and_running_max() {
        let mut store = FrequencyStore::new(0.9);
        store.record_global("apple");
        store.record_global("apple");
        store.record_global("pear");

        assert_eq!(store.global_count("apple"), 2);
        assert_eq!(store.global_count("pear"), 1);
        assert_eq!(store.max_global_count(), 2);
    }

    #[test]
    fn context_decays_then_increments() {
        let mut store = FrequencyStore::new(0.8);
        store.record_context("fruits", "apple");
        assert_eq!(store.context_score("fruits", "apple"), 1.0);

        store.record_context("fruits", "pear");
        assert_eq!(store.context_score("fruits", "apple"), 0.8);
        assert_eq!(store.context_score("fruits", "pear"), 1.0);
        assert_eq!(store.max_context_score("fruits"), 1.0);
    }

    #[test]
    fn reindexing_same_term_decays_its_own_score_first() {
        let mut store = FrequencyStore::new(0.5);
        store.record_context("fruits", "apple");
        store.record_context("fruits", "apple");

        assert_eq!(store.context_score("fruits", "apple"), 1.5);
    }

    #[test]
    fn categories_are_independent() {
        let mut store = FrequencyStore::new(0.5);
        store.record_context("fruits", "apple");
        store.record_context("vegetables", "leek");

        assert_eq!(store.context_score("fruits", "apple"), 1.0);
        assert_eq!(store.context_score("vegetables", "leek"), 1.0);
    }
}
