//! Common imports for washout tests.

pub use crate::must::{must, must_err, must_parse, must_some, must_with};
pub use crate::{assert_all_finite, assert_approx_eq, assert_axes_approx_eq};

#[cfg(feature = "tracking")]
pub use crate::assert_rt_safe;
#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, TrackingAllocator, track};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    CLASSICAL_INI, MOTION_CSV, MOTION_CSV_WITH_GARBAGE, UNKNOWN_ACTIVE_INI, write_temp_file,
};

/// Result alias for tests that propagate errors with `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
