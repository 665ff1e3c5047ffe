//! Filter State Types
//!
//! Per-axis memory for the stateful kinds. Every axis carries state for both
//! stateful kinds at once, so switching kinds never allocates.

use crate::axis::AxisArray;
pub use crate::classical::ClassicalState;
pub use crate::exponential::ExponentialState;

/// Filter trait for common filter operations.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the filter state to initial values.
    fn reset(&mut self);
}

impl FilterState for ExponentialState {
    fn reset(&mut self) {
        self.prev_output = 0.0;
    }
}

impl FilterState for ClassicalState {
    fn reset(&mut self) {
        self.prev_input = 0.0;
        self.prev_output = 0.0;
    }
}

/// Memory for one axis under every stateful kind.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisState {
    /// Exponential washout memory
    pub exponential: ExponentialState,
    /// Classical washout memory
    pub classical: ClassicalState,
}

impl AxisState {
    /// Create zeroed state for both kinds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exponential: ExponentialState::new(),
            classical: ClassicalState::new(),
        }
    }

    /// Whether both kinds are at their initial (zero) memory.
    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        *self == Self::new()
    }
}

impl FilterState for AxisState {
    fn reset(&mut self) {
        self.exponential.reset();
        self.classical.reset();
    }
}

/// State for all six axes.
pub type AxisStates = AxisArray<AxisState>;

impl FilterState for AxisStates {
    fn reset(&mut self) {
        for (_, state) in self.iter_mut() {
            state.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisId;

    #[test]
    fn test_axis_state_reset() {
        let mut state = AxisState {
            exponential: ExponentialState { prev_output: 0.4 },
            classical: ClassicalState {
                prev_input: 1.0,
                prev_output: -0.3,
            },
        };
        assert!(!state.is_zeroed());

        state.reset();
        assert!(state.is_zeroed());
    }

    #[test]
    fn test_all_axes_reset() {
        let mut states = AxisStates::default();
        states[AxisId::Yaw].classical.prev_output = 0.7;
        states[AxisId::X].exponential.prev_output = -0.2;

        states.reset();
        assert!(states.iter().all(|(_, s)| s.is_zeroed()));
    }
}
