use thiserror::Error;

/// Results returned by `suggest` and `simulate_user_interaction` are capped
/// at this many terms.
pub const DEFAULT_LIMIT: usize = 5;

pub const DEFAULT_DECAY_FACTOR: f64 = 0.85;
pub const DEFAULT_CONTEXT_WEIGHT: f64 = 0.7;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("decay_factor must be in (0, 1], got {0}")]
    DecayFactorOutOfRange(f64),
    #[error("context_weight must be in [0, 1], got {0}")]
    ContextWeightOutOfRange(f64),
}

/// Engine tuning, fixed for the engine's lifetime.
///
/// `decay_factor` is the multiplicative shrink applied to a category's
/// existing scores on every new occurrence there (values around 0.7-0.95
/// work well). `context_weight` is the fraction of the bias attributable to
/// category recency versus global popularity.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub decay_factor: f64,
    pub context_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decay_factor: DEFAULT_DECAY_FACTOR,
            context_weight: DEFAULT_CONTEXT_WEIGHT,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(ConfigError::DecayFactorOutOfRange(self.decay_factor));
        }
        if !(self.context_weight >= 0.0 && self.context_weight <= 1.0) {
            return Err(ConfigError::ContextWeightOutOfRange(self.context_weight));
        }
        Ok(())
    }
}
