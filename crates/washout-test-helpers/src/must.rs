//! Unwrap helpers that report the caller's location on failure.
//!
//! Workspace lints deny `unwrap()` and `expect()`; tests use these instead so
//! a failing setup step points at the test line, not at this crate.

use std::fmt::Debug;
use std::str::FromStr;

/// Unwrap a `Result`, panicking with the error's debug form.
///
/// ```rust
/// use washout_test_helpers::must;
///
/// let value: Result<f64, &str> = Ok(0.02);
/// assert_eq!(must(value), 0.02);
/// ```
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` on `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Parse a string, panicking if it does not parse.
///
/// ```rust
/// use washout_test_helpers::must_parse;
///
/// let tau: f64 = must_parse("1.2");
/// assert_eq!(tau, 1.2);
/// ```
#[track_caller]
pub fn must_parse<T: FromStr>(s: &str) -> T
where
    T::Err: Debug,
{
    match s.parse() {
        Ok(v) => v,
        Err(e) => panic!("must_parse: failed to parse {s:?}: {e:?}"),
    }
}

/// Unwrap a `Result`, prefixing the panic message with `context`.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Unwrap an expected error, panicking if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: expected Err, got Ok({v:?})"),
        Err(e) => e,
    }
}
