//! Configuration hash for change detection
//!
//! Deterministic within one build: floats are hashed by bit pattern, so any
//! parameter change (including `-0.0` vs `0.0`) yields a new hash.

use crate::config::FilterConfig;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use washout_filters::{AxisArray, ClipRange};

/// Calculate a deterministic hash of a filter configuration.
///
/// ```
/// use washout_engine::{FilterConfig, calculate_config_hash};
/// use washout_filters::FilterKind;
///
/// let a = FilterConfig::new(FilterKind::Classical);
/// let b = a.with_gain(0.5);
/// assert_eq!(calculate_config_hash(&a), calculate_config_hash(&a));
/// assert_ne!(calculate_config_hash(&a), calculate_config_hash(&b));
/// ```
#[must_use]
pub fn calculate_config_hash(config: &FilterConfig) -> u64 {
    let mut hasher = DefaultHasher::new();

    config.active.hash(&mut hasher);

    hash_flags(&config.disabled.enabled, &mut hasher);

    hash_values(&config.exponential.decay, &mut hasher);
    hash_flags(&config.exponential.enabled, &mut hasher);

    hash_values(&config.classical.tau, &mut hasher);
    config.classical.gain.to_bits().hash(&mut hasher);
    hash_clip(config.classical.clip, &mut hasher);
    hash_flags(&config.classical.enabled, &mut hasher);

    hasher.finish()
}

fn hash_values(values: &AxisArray<f64>, hasher: &mut DefaultHasher) {
    for (_, value) in values.iter() {
        value.to_bits().hash(hasher);
    }
}

fn hash_flags(flags: &AxisArray<bool>, hasher: &mut DefaultHasher) {
    for (_, flag) in flags.iter() {
        flag.hash(hasher);
    }
}

fn hash_clip(clip: Option<ClipRange>, hasher: &mut DefaultHasher) {
    match clip {
        Some(range) => {
            1u8.hash(hasher);
            range.min.to_bits().hash(hasher);
            range.max.to_bits().hash(hasher);
        }
        None => 0u8.hash(hasher),
    }
}
