//! Disabled Washout (bypass)
//!
//! Direct pass-through for diagnostics or platforms without travel limits.

/// Bypass filter - returns the input unchanged. Stateless.
///
/// ```
/// use washout_filters::bypass_filter;
///
/// assert_eq!(bypass_filter(0.42).to_bits(), 0.42_f64.to_bits());
/// ```
#[inline]
#[must_use]
pub fn bypass_filter(raw: f64) -> f64 {
    raw
}
