use log::{debug, trace};

use crate::config::{ConfigError, EngineConfig, DEFAULT_LIMIT};
use crate::frequency::FrequencyStore;
use crate::history::ContextHistory;
use crate::ranking;
use crate::trie::Trie;

/// Prefix autocomplete with per-category context biasing.
///
/// Terms are normalized (trimmed, lowercased) before storage and lookup.
/// Categories are opaque keys; `None` means no context anywhere. Malformed
/// input never fails: indexing an empty term is a no-op and searching an
/// unknown prefix returns an empty list.
pub struct AutocompleteEngine {
    trie: Trie,
    frequencies: FrequencyStore,
    history: ContextHistory,
    config: EngineConfig,
}

impl AutocompleteEngine {
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            trie: Trie::default(),
            frequencies: FrequencyStore::new(config.decay_factor),
            history: ContextHistory::default(),
            config,
        }
    }

    /// Records one occurrence of `term`, optionally under a category.
    /// No-op when the term normalizes to empty.
    pub fn index_term(&mut self, term: &str, category: Option<&str>) {
        let term = normalize(term);
        if term.is_empty() {
            return;
        }
        debug!("indexing {term:?} (category: {category:?})");

        self.trie.insert(&term);
        self.frequencies.record_global(&term);
        if let Some(category) = category {
            self.history.record(category, &term);
            self.frequencies.record_context(category, &term);
        }
    }

    /// Up to `limit` known terms starting with `prefix`, best first.
    /// Pure read; ties order lexicographically, so repeated calls on
    /// unchanged state return identical output.
    pub fn search(&self, prefix: &str, category: Option<&str>, limit: usize) -> Vec<String> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        let Some(node) = self.trie.prefix_node(&prefix) else {
            return Vec::new();
        };

        let candidates = Trie::collect_terms(node);
        trace!("{} candidates for {prefix:?}", candidates.len());
        ranking::rank(
            &self.frequencies,
            candidates,
            category,
            self.config.context_weight,
            limit,
        )
    }

    /// `search` with the default limit of 5.
    pub fn suggest(&self, prefix: &str, category: Option<&str>) -> Vec<String> {
        self.search(prefix, category, DEFAULT_LIMIT)
    }

    /// Models "user typed and selected `term`": indexes it under `category`,
    /// then searches the full term in that category. The fresh increment is
    /// already visible to the returned ranking.
    pub fn simulate_user_interaction(&mut self, category: &str, term: &str) -> Vec<String> {
        self.index_term(term, Some(category));
        self.search(term, Some(category), DEFAULT_LIMIT)
    }

    /// The last terms indexed under `category`, oldest first (at most 10).
    /// Informational only; ranking does not consult it.
    pub fn recent_terms(&self, category: &str) -> Vec<&str> {
        self.history.recent(category).collect()
    }
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
