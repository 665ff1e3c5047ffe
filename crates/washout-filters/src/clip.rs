//! Output Gain and Clip
//!
//! Post-processing for the classical filter: a shared gain followed by an
//! optional hard range limit on the final actuator command.

use serde::{Deserialize, Serialize};

/// Inclusive output range applied after gain.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl ClipRange {
    /// Create a clip range. Use [`ClipRange::is_valid`] before relying on it.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric range `[-limit, limit]`.
    #[must_use]
    pub const fn symmetric(limit: f64) -> Self {
        Self {
            min: -limit,
            max: limit,
        }
    }

    /// Both bounds are finite and `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Bound `value` to `[min, max]`.
    ///
    /// Never panics, unlike `f64::clamp`, even on an unvalidated range.
    #[inline]
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Whether `value` lies inside the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Apply the shared gain, then the optional clip.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use washout_filters::{ClipRange, gain_clip_filter};
///
/// let clip = Some(ClipRange::symmetric(0.5));
/// assert_abs_diff_eq!(gain_clip_filter(0.4, 2.0, clip), 0.5, epsilon = 1e-12);
/// assert_abs_diff_eq!(gain_clip_filter(0.1, 2.0, clip), 0.2, epsilon = 1e-12);
/// ```
#[inline]
#[must_use]
pub fn gain_clip_filter(value: f64, gain: f64, clip: Option<ClipRange>) -> f64 {
    let gained = value * gain;
    match clip {
        Some(range) => range.apply(gained),
        None => gained,
    }
}
