//! Error types for G-code generation.

use thiserror::Error;

/// Errors that can occur while generating G-code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// A print parameter is out of range.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Offending value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A segment is missing its start point, end point or length.
    #[error("segment {index} is missing its {field}")]
    MissingGeometryData {
        /// Position of the segment in the input sequence.
        index: usize,
        /// The absent field.
        field: GeometryField,
    },

    /// Input could not be read as an ordered sequence of segments.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// The parts of a segment a geometry provider must supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryField {
    /// Start point.
    Start,
    /// End point.
    End,
    /// Length.
    Length,
}

impl std::fmt::Display for GeometryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryField::Start => write!(f, "start point"),
            GeometryField::End => write!(f, "end point"),
            GeometryField::Length => write!(f, "length"),
        }
    }
}

impl GcodeError {
    /// Shorthand for an [`GcodeError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, value: f64, reason: &'static str) -> Self {
        GcodeError::InvalidParameter {
            name: name.into(),
            value,
            reason,
        }
    }
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GcodeError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(GcodeError::invalid(name, value, "must be positive"));
    }
    Ok(())
}

/// Result type for G-code operations.
pub type Result<T> = std::result::Result<T, GcodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        let err = GcodeError::invalid("filament_diameter", 0.0, "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'filament_diameter' = 0: must be positive"
        );

        let err = GcodeError::MissingGeometryData {
            index: 3,
            field: GeometryField::Length,
        };
        assert_eq!(err.to_string(), "segment 3 is missing its length");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -2.0).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
    }
}
