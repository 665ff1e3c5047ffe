//! Exponential Washout ("fast rise, tunable decay")
//!
//! The filter follows the input immediately while the stimulus is growing and
//! bleeds the held output back toward neutral by a fixed fraction per tick once
//! the stimulus recedes. At a 20 Hz tick a decay of 0.015-0.025 removes roughly
//! 95-98% of a held cue within 2-4 seconds.

/// State for the exponential washout filter.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ExponentialState {
    /// Previous filtered output
    pub prev_output: f64,
}

impl ExponentialState {
    /// Create a zeroed state.
    #[must_use]
    pub const fn new() -> Self {
        Self { prev_output: 0.0 }
    }
}

/// Whether `raw` counts as rising relative to `prev_out`.
///
/// A larger or equal magnitude is a rise, and so is any sign reversal: a cue
/// in the opposite direction is new stimulus, not a receding one.
#[inline]
#[must_use]
pub fn is_rising(raw: f64, prev_out: f64) -> bool {
    raw.abs() >= prev_out.abs() || raw * prev_out < 0.0
}

/// One exponential washout step.
///
/// Returns `raw` while the signal is rising (see [`is_rising`]), otherwise
/// `prev_out * (1 - decay)`. A `decay` of zero holds the output indefinitely.
///
/// # Example
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use washout_filters::exponential_step;
///
/// // Rising: track the input exactly
/// assert_eq!(exponential_step(0.8, 0.5, 0.025).to_bits(), 0.8_f64.to_bits());
///
/// // Receding: decay the held output
/// let out = exponential_step(0.0, 1.0, 0.025);
/// assert_abs_diff_eq!(out, 0.975, epsilon = 1e-12);
/// ```
#[inline]
#[must_use]
pub fn exponential_step(raw: f64, prev_out: f64, decay: f64) -> f64 {
    if is_rising(raw, prev_out) {
        raw
    } else {
        prev_out * (1.0 - decay)
    }
}

/// Exponential washout filter, updating `state` in place.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - No syscalls or I/O
#[inline]
pub fn exponential_filter(raw: f64, state: &mut ExponentialState, decay: f64) -> f64 {
    let output = exponential_step(raw, state.prev_output, decay);
    state.prev_output = output;
    output
}
