//! Platform Axes
//!
//! The motion platform always has exactly six degrees of freedom. Per-axis
//! data is stored in a fixed-size [`AxisArray`] indexed by [`AxisId`], so
//! "all six axes present" is a property of the type rather than a runtime
//! check, and lookups on the hot path are plain array offsets.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of platform axes.
pub const AXIS_COUNT: usize = 6;

/// One of the six platform degrees of freedom, in wire order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    /// Surge
    X = 0,
    /// Sway
    Y = 1,
    /// Heave
    Z = 2,
    /// Roll
    Roll = 3,
    /// Pitch
    Pitch = 4,
    /// Yaw
    Yaw = 5,
}

impl AxisId {
    /// All axes in their fixed order.
    pub const ALL: [AxisId; AXIS_COUNT] = [
        AxisId::X,
        AxisId::Y,
        AxisId::Z,
        AxisId::Roll,
        AxisId::Pitch,
        AxisId::Yaw,
    ];

    /// Slot of this axis in an [`AxisArray`]. Always `< AXIS_COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in configuration keys (`decay_roll`, `enabled_x`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AxisId::X => "x",
            AxisId::Y => "y",
            AxisId::Z => "z",
            AxisId::Roll => "roll",
            AxisId::Pitch => "pitch",
            AxisId::Yaw => "yaw",
        }
    }

    /// Axis for a slot index, if the index is in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(AxisId::X),
            1 => Some(AxisId::Y),
            2 => Some(AxisId::Z),
            3 => Some(AxisId::Roll),
            4 => Some(AxisId::Pitch),
            5 => Some(AxisId::Yaw),
            _ => None,
        }
    }

    /// Split a configuration key of the form `<param>_<axis>`.
    ///
    /// Returns the parameter prefix and the axis, or `None` when the key has
    /// no recognised axis suffix.
    ///
    /// ```
    /// use washout_filters::AxisId;
    ///
    /// assert_eq!(AxisId::split_key("tau_pitch"), Some(("tau", AxisId::Pitch)));
    /// assert_eq!(AxisId::split_key("gain"), None);
    /// ```
    #[must_use]
    pub fn split_key(key: &str) -> Option<(&str, AxisId)> {
        let (param, suffix) = key.rsplit_once('_')?;
        let axis = suffix.parse().ok()?;
        if param.is_empty() {
            return None;
        }
        Some((param, axis))
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AxisId::ALL
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownAxis(trimmed.to_string()))
    }
}

/// Fixed six-slot storage indexed by [`AxisId`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisArray<T>([T; AXIS_COUNT]);

/// Six per-axis scalar values in [`AxisId::ALL`] order.
pub type AxisVector = AxisArray<f64>;

impl<T> AxisArray<T> {
    /// Wrap a raw array laid out in [`AxisId::ALL`] order.
    #[inline]
    pub const fn new(values: [T; AXIS_COUNT]) -> Self {
        Self(values)
    }

    /// Build an array by evaluating `f` for every axis.
    pub fn from_fn(mut f: impl FnMut(AxisId) -> T) -> Self {
        Self(AxisId::ALL.map(&mut f))
    }

    /// Borrow the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; AXIS_COUNT] {
        &self.0
    }

    /// Unwrap into the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; AXIS_COUNT] {
        self.0
    }

    /// Iterate `(axis, &value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisId, &T)> {
        AxisId::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate `(axis, &mut value)` pairs in axis order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AxisId, &mut T)> {
        AxisId::ALL.into_iter().zip(self.0.iter_mut())
    }

    /// Map every slot, keeping axis order.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> AxisArray<U> {
        AxisArray(self.0.map(f))
    }
}

impl<T: Copy> AxisArray<T> {
    /// Array with the same value in every slot.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; AXIS_COUNT])
    }
}

impl<T: Default> Default for AxisArray<T> {
    fn default() -> Self {
        Self(core::array::from_fn(|_| T::default()))
    }
}

impl<T> From<[T; AXIS_COUNT]> for AxisArray<T> {
    fn from(values: [T; AXIS_COUNT]) -> Self {
        Self(values)
    }
}

impl<T> From<AxisArray<T>> for [T; AXIS_COUNT] {
    fn from(values: AxisArray<T>) -> Self {
        values.0
    }
}

impl<T> Index<AxisId> for AxisArray<T> {
    type Output = T;

    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "AxisId::index() is always below AXIS_COUNT"
    )]
    fn index(&self, axis: AxisId) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<AxisId> for AxisArray<T> {
    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "AxisId::index() is always below AXIS_COUNT"
    )]
    fn index_mut(&mut self, axis: AxisId) -> &mut T {
        &mut self.0[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axis_order_matches_index() {
        for (i, axis) in AxisId::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
            assert_eq!(AxisId::from_index(i), Some(*axis));
        }
        assert_eq!(AxisId::from_index(AXIS_COUNT), None);
    }

    #[test]
    fn test_axis_parse_case_insensitive() -> Result<(), ParseError> {
        assert_eq!("ROLL".parse::<AxisId>()?, AxisId::Roll);
        assert_eq!(" yaw ".parse::<AxisId>()?, AxisId::Yaw);
        assert!("w".parse::<AxisId>().is_err());
        Ok(())
    }

    #[test]
    fn test_split_key() {
        assert_eq!(AxisId::split_key("decay_x"), Some(("decay", AxisId::X)));
        assert_eq!(
            AxisId::split_key("decay_rate_yaw"),
            Some(("decay_rate", AxisId::Yaw))
        );
        assert_eq!(AxisId::split_key("enabled_z"), Some(("enabled", AxisId::Z)));
        assert_eq!(AxisId::split_key("_x"), None);
        assert_eq!(AxisId::split_key("clip"), None);
        assert_eq!(AxisId::split_key("time_constant"), None);
    }

    #[test]
    fn test_axis_array_indexing() {
        let mut values = AxisVector::splat(0.0);
        values[AxisId::Pitch] = 2.5;

        assert_abs_diff_eq!(values[AxisId::Pitch], 2.5);
        assert_abs_diff_eq!(values.as_array()[4], 2.5);
        assert_abs_diff_eq!(values[AxisId::X], 0.0);
    }

    #[test]
    fn test_axis_array_from_fn_and_iter() {
        let names = AxisArray::from_fn(AxisId::name);
        let collected: Vec<_> = names.iter().map(|(axis, name)| (axis, *name)).collect();

        assert_eq!(collected.len(), AXIS_COUNT);
        assert_eq!(collected.get(3), Some(&(AxisId::Roll, "roll")));
    }
}
