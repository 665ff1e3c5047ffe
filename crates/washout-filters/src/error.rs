//! Error types for name parsing.

/// Error returned when an axis or filter kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Axis name is not one of x, y, z, roll, pitch, yaw
    #[error("Unknown axis '{0}', expected one of: x, y, z, roll, pitch, yaw")]
    UnknownAxis(String),

    /// Filter kind name is not recognised
    #[error("Unknown washout filter '{0}', expected one of: disabled, exponential, classical")]
    UnknownFilterKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnknownAxis("w".to_string());
        assert!(err.to_string().contains("'w'"));

        let err = ParseError::UnknownFilterKind("lowpass".to_string());
        assert!(err.to_string().contains("lowpass"));
        assert!(err.to_string().contains("classical"));
    }
}
