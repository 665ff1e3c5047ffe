//! Assertion macros for filter outputs.

/// Assert that two floating-point values are within `tolerance` of each other.
///
/// ```rust
/// use washout_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.96, 1.2 / 1.25, 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two six-axis vectors agree component-wise.
///
/// Both sides must convert into `[f64; 6]`, so plain arrays and axis vectors
/// can be mixed.
///
/// ```rust
/// use washout_test_helpers::assert_axes_approx_eq;
///
/// let out = [0.5, 0.0, 0.0, 0.0, 0.0, -0.25];
/// assert_axes_approx_eq!(out, [0.5, 0.0, 0.0, 0.0, 0.0, -0.25], 1e-12);
/// ```
#[macro_export]
macro_rules! assert_axes_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: [f64; 6] = ::core::convert::Into::into($left);
        let right: [f64; 6] = ::core::convert::Into::into($right);
        let tolerance: f64 = $tolerance;
        for (index, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            let diff = (l - r).abs();
            if !(diff <= tolerance) {
                panic!(
                    "assertion failed: axis {} differs\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                    index, left, right, diff, tolerance
                );
            }
        }
    };
}

/// Assert that every value yielded by an iterable is finite.
///
/// ```rust
/// use washout_test_helpers::assert_all_finite;
///
/// assert_all_finite!([0.1, -0.2, 0.0]);
/// ```
#[macro_export]
macro_rules! assert_all_finite {
    ($values:expr $(,)?) => {
        for (index, value) in ::core::iter::IntoIterator::into_iter($values).enumerate() {
            let value: f64 = value;
            if !value.is_finite() {
                panic!(
                    "assertion failed: value at index {} is not finite: `{:?}`",
                    index, value
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn approx_eq_passes_within_tolerance() {
        assert_approx_eq!(0.05, 0.0504, 1e-3);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn approx_eq_fails_outside_tolerance() {
        assert_approx_eq!(1.0, 1.1, 1e-3);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 0.0, 1.0);
    }

    #[test]
    fn axes_approx_eq_compares_each_component() {
        assert_axes_approx_eq!([1.0; 6], [1.0 + 1e-10; 6], 1e-9);
    }

    #[test]
    #[should_panic(expected = "axis 4 differs")]
    fn axes_approx_eq_names_failing_axis() {
        assert_axes_approx_eq!([0.0; 6], [0.0, 0.0, 0.0, 0.0, 0.5, 0.0], 1e-9);
    }

    #[test]
    #[should_panic(expected = "not finite")]
    fn all_finite_catches_infinity() {
        assert_all_finite!([0.0, f64::INFINITY]);
    }
}
