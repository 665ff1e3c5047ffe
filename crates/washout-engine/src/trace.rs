//! Scope trace lines
//!
//! One line per tick pairing the raw and washed vectors, in the text form the
//! live plotting tool listens for:
//!
//! ```text
//! pre_washed,0.1000,0.0000,0.0000,0.0000,0.0000,0.0000|norm_xform,0.0960,0.0000,0.0000,0.0000,0.0000,0.0000
//! ```

use core::fmt;
use core::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use washout_filters::{AXIS_COUNT, AxisId, AxisVector};

/// Tag of the raw-input segment.
pub const PRE_WASHED_TAG: &str = "pre_washed";

/// Tag of the filtered-output segment.
pub const WASHED_TAG: &str = "norm_xform";

/// UDP port the plotting tool listens on.
pub const SCOPE_PORT: u16 = 10020;

/// Trace line decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceParseError {
    /// A required segment tag was not found.
    #[error("trace line has no '{0}' segment")]
    MissingSegment(&'static str),

    /// A segment did not carry exactly six values.
    #[error("'{segment}' segment has {count} values, expected {AXIS_COUNT}")]
    WrongArity {
        /// Segment tag
        segment: &'static str,
        /// Values found
        count: usize,
    },

    /// A value did not parse as a number.
    #[error("'{segment}' segment has invalid value '{value}'")]
    InvalidNumber {
        /// Segment tag
        segment: &'static str,
        /// Offending text
        value: String,
        /// Underlying parse error
        #[source]
        source: core::num::ParseFloatError,
    },
}

/// Raw and washed vectors of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceLine {
    /// Engine input
    pub pre_washed: AxisVector,
    /// Engine output
    pub washed: AxisVector,
}

impl TraceLine {
    /// Pair an input and output vector.
    #[must_use]
    pub const fn new(pre_washed: AxisVector, washed: AxisVector) -> Self {
        Self { pre_washed, washed }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_segment(f, PRE_WASHED_TAG, &self.pre_washed)?;
        f.write_str("|")?;
        write_segment(f, WASHED_TAG, &self.washed)
    }
}

fn write_segment(f: &mut fmt::Formatter<'_>, tag: &str, values: &AxisVector) -> fmt::Result {
    f.write_str(tag)?;
    for (_, value) in values.iter() {
        write!(f, ",{value:.4}")?;
    }
    Ok(())
}

impl FromStr for TraceLine {
    type Err = TraceParseError;

    /// Segments may appear in any order; segments with other tags are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pre_washed = None;
        let mut washed = None;

        for segment in s.trim().split('|') {
            let mut fields = segment.split(',');
            match fields.next().map(str::trim) {
                Some(PRE_WASHED_TAG) => pre_washed = Some(parse_values(PRE_WASHED_TAG, fields)?),
                Some(WASHED_TAG) => washed = Some(parse_values(WASHED_TAG, fields)?),
                _ => {}
            }
        }

        Ok(Self {
            pre_washed: pre_washed.ok_or(TraceParseError::MissingSegment(PRE_WASHED_TAG))?,
            washed: washed.ok_or(TraceParseError::MissingSegment(WASHED_TAG))?,
        })
    }
}

fn parse_values<'a>(
    segment: &'static str,
    fields: impl Iterator<Item = &'a str>,
) -> Result<AxisVector, TraceParseError> {
    let mut values = AxisVector::splat(0.0);
    let mut count = 0usize;

    for field in fields {
        let text = field.trim();
        let value = text
            .parse::<f64>()
            .map_err(|source| TraceParseError::InvalidNumber {
                segment,
                value: text.to_string(),
                source,
            })?;
        if let Some(axis) = AxisId::from_index(count) {
            values[axis] = value;
        }
        count = count.saturating_add(1);
    }

    if count != AXIS_COUNT {
        return Err(TraceParseError::WrongArity { segment, count });
    }
    Ok(values)
}
