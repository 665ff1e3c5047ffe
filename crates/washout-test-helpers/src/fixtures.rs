//! Canonical configuration and telemetry texts shared by loader, engine and
//! CLI tests.

use std::io::Write;

/// A complete configuration with Classical active, every axis configured.
pub const CLASSICAL_INI: &str = "\
# Washout profile
[Active]
type = classical

[no_washout]
name = No Washout
tooltip = Direct pass-through

[exponential]
name = Exponential Decay
tooltip = Fast rise, tunable decay
decay_x = 0.0200 | fraction removed per tick
decay_y = 0.0200
decay_z = 0.0150
decay_roll = 0.0250
decay_pitch = 0.0250
decay_yaw = 0.0200

[classical]
name = Classical Washout
tooltip = First-order high-pass
tau_x = 1.2000 | seconds, ~95% washed out after 3*tau
tau_y = 1.2000
tau_z = 1.0000
tau_roll = 2.2000
tau_pitch = 2.2000
tau_yaw = 1.5000
gain = 1.0000 | shared output gain
clip = -1.0:1.0 | output range
";

/// Names an active kind that does not exist.
pub const UNKNOWN_ACTIVE_INI: &str = "\
[Active]
type = kalman

[classical]
tau = 1.2
";

/// Recorded telemetry at 20 Hz: a surge step on x, then release.
pub const MOTION_CSV: &str = "\
# vehicle: test_kart
# interval_ms: 50
0.00,0.0,0.0,0.0,0.0,0.0,0.0
0.05,1.0,0.0,0.0,0.0,0.0,0.0
0.10,1.0,0.0,0.0,0.0,0.0,0.0
0.15,1.0,0.0,0.0,0.0,0.0,0.0
0.20,0.0,0.0,0.0,0.0,0.0,0.0
0.25,0.0,0.0,0.0,0.0,0.0,0.0
";

/// Same recording with a short row, a non-numeric row and a blank line.
pub const MOTION_CSV_WITH_GARBAGE: &str = "\
# vehicle: test_kart
# interval_ms: 50
0.00,0.0,0.0,0.0,0.0,0.0,0.0
0.05,1.0,0.0,0.0

0.10,1.0,zero,0.0,0.0,0.0,0.0
0.15,1.0,0.0,0.0,0.0,0.0,0.0
";

/// Write `contents` to a named temporary file with the given suffix.
///
/// # Errors
///
/// Returns any I/O error from creating or writing the file.
pub fn write_temp_file(contents: &str, suffix: &str) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("washout-")
        .suffix(suffix)
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
