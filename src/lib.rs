//! Context-biased prefix autocomplete.
//!
//! Index terms (optionally under a category), then ask for the best
//! completions of a prefix. Ranking blends log-dampened global popularity
//! with an exponentially recency-weighted, per-category usage signal.
//!
//! ```
//! use sokugo::AutocompleteEngine;
//!
//! let mut engine = AutocompleteEngine::new();
//! engine.index_term("apple", Some("fruits"));
//! engine.index_term("apricot", Some("fruits"));
//!
//! // apricot was used more recently in this category
//! assert_eq!(engine.suggest("ap", Some("fruits")), vec!["apricot", "apple"]);
//! ```

mod config;
mod engine;
mod frequency;
mod history;
mod ranking;
mod shared;
mod trie;

pub use config::{
    ConfigError, EngineConfig, DEFAULT_CONTEXT_WEIGHT, DEFAULT_DECAY_FACTOR, DEFAULT_LIMIT,
};
pub use engine::AutocompleteEngine;
pub use shared::SharedEngine;
