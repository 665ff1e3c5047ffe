//! Recorded motion telemetry in CSV form.
//!
//! ```text
//! # vehicle: test_kart
//! # interval_ms: 50
//! 0.00,0.0,0.0,0.0,0.0,0.0,0.0
//! 0.05,1.0,0.0,0.0,0.0,0.0,0.0
//! ```
//!
//! Each row is `t_seconds,x,y,z,roll,pitch,yaw`.

use serde::Serialize;
use tracing::warn;
use washout_filters::{AXIS_COUNT, AxisVector};

/// Tick interval used when neither timestamps nor the header give one.
pub const DEFAULT_INTERVAL_MS: f64 = 50.0;

/// One recorded row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    pub line: usize,
    pub t: f64,
    pub raw: AxisVector,
}

/// A parsed recording.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TelemetryRecording {
    pub vehicle: Option<String>,
    pub interval_ms: Option<f64>,
    #[serde(skip)]
    pub samples: Vec<TelemetrySample>,
    pub skipped_rows: usize,
}

impl TelemetryRecording {
    /// Interval between ticks when timestamps do not supply one, in seconds.
    pub fn fallback_dt(&self) -> f64 {
        self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS) / 1000.0
    }

    /// Samples paired with the `dt` leading up to each one.
    ///
    /// The first sample, and any sample whose timestamp does not advance,
    /// uses [`fallback_dt`](Self::fallback_dt).
    pub fn ticks(&self) -> impl Iterator<Item = (f64, &TelemetrySample)> + '_ {
        let fallback = self.fallback_dt();
        let mut previous: Option<f64> = None;
        self.samples.iter().map(move |sample| {
            let dt = previous
                .map(|t| sample.t - t)
                .filter(|dt| dt.is_finite() && *dt > 0.0)
                .unwrap_or(fallback);
            previous = Some(sample.t);
            (dt, sample)
        })
    }
}

/// Parse a recording. Malformed rows are skipped with a warning.
pub fn parse_telemetry_csv(text: &str) -> TelemetryRecording {
    let mut recording = TelemetryRecording::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index.saturating_add(1);
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            parse_header(comment, line, &mut recording);
            continue;
        }

        match parse_row(trimmed) {
            Some((t, raw)) => recording.samples.push(TelemetrySample { line, t, raw }),
            None => {
                warn!(line, row = trimmed, "skipping malformed telemetry row");
                recording.skipped_rows = recording.skipped_rows.saturating_add(1);
            }
        }
    }

    recording
}

fn parse_header(comment: &str, line: usize, recording: &mut TelemetryRecording) {
    let Some((key, value)) = comment.split_once(':') else {
        return;
    };
    let value = value.trim();
    match key.trim().to_ascii_lowercase().as_str() {
        "vehicle" => recording.vehicle = Some(value.to_string()),
        "interval_ms" => match value.parse::<f64>() {
            Ok(ms) if ms.is_finite() && ms > 0.0 => recording.interval_ms = Some(ms),
            _ => warn!(line, value, "ignoring invalid interval_ms header"),
        },
        _ => {}
    }
}

fn parse_row(row: &str) -> Option<(f64, AxisVector)> {
    let mut fields = row.split(',').map(|field| field.trim().parse::<f64>().ok());
    let t = fields.next().flatten()?;

    let mut values = [0.0; AXIS_COUNT];
    for slot in &mut values {
        *slot = fields.next().flatten()?;
    }
    if fields.next().is_some() || !t.is_finite() {
        return None;
    }
    Some((t, AxisVector::new(values)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use washout_filters::AxisId;
    use washout_test_helpers::prelude::*;

    #[test]
    fn test_parse_fixture() -> TestResult {
        let recording = parse_telemetry_csv(MOTION_CSV);
        assert_eq!(recording.vehicle.as_deref(), Some("test_kart"));
        assert_eq!(recording.interval_ms, Some(50.0));
        assert_eq!(recording.samples.len(), 6);
        assert_eq!(recording.skipped_rows, 0);

        let second = must_some(recording.samples.get(1), "second sample");
        assert_eq!(second.line, 4);
        assert_approx_eq!(second.raw[AxisId::X], 1.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let recording = parse_telemetry_csv(MOTION_CSV_WITH_GARBAGE);
        assert_eq!(recording.samples.len(), 2);
        assert_eq!(recording.skipped_rows, 2);
        let lines: Vec<usize> = recording.samples.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 7]);
    }

    #[test]
    fn test_extra_columns_rejected() {
        let recording = parse_telemetry_csv("0.0,1,2,3,4,5,6,7\n");
        assert!(recording.samples.is_empty());
        assert_eq!(recording.skipped_rows, 1);
    }

    #[test]
    fn test_dt_from_timestamps() {
        let recording = parse_telemetry_csv(
            "# interval_ms: 20\n0.0,0,0,0,0,0,0\n0.1,0,0,0,0,0,0\n0.1,0,0,0,0,0,0\n0.25,0,0,0,0,0,0\n",
        );
        let dts: Vec<f64> = recording.ticks().map(|(dt, _)| dt).collect();
        let expected = [0.02, 0.1, 0.02, 0.15];
        assert_eq!(dts.len(), expected.len());
        for (dt, want) in dts.iter().zip(expected) {
            assert_approx_eq!(*dt, want, 1e-9);
        }
    }

    #[test]
    fn test_default_interval_without_header() {
        let recording = parse_telemetry_csv("1.0,0,0,0,0,0,0\n");
        assert!(recording.interval_ms.is_none());
        let first = recording.ticks().next().map(|(dt, _)| dt);
        assert_eq!(first.map(f64::to_bits), Some(0.05_f64.to_bits()));
    }

    #[test]
    fn test_invalid_interval_header_ignored() {
        let recording = parse_telemetry_csv("# interval_ms: -5\n# note: anything\n");
        assert!(recording.interval_ms.is_none());
        assert!(recording.samples.is_empty());
    }
}
