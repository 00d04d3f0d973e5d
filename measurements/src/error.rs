//! Error types for measurement operations.

/// Result type for measurement operations
pub type MeasurementResult<T> = Result<T, MeasurementError>;

/// Error type for measurement operations.
///
/// Every variant is a usage error reported at the point of violation, except
/// [`MeasurementError::MissingStandardUnit`], which signals a malformed unit
/// table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Invalid units: {0}")]
    InvalidUnits(String),

    #[error("Invalid unit '{unit}': the unit must be any of the following: {}", .valid.join(", "))]
    InvalidUnit {
        unit: String,
        valid: Vec<&'static str>,
    },

    #[error("Heterogeneous list: {0}")]
    HeterogeneousList(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Unit table '{0}' has no standard unit (ratio 1)")]
    MissingStandardUnit(&'static str),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_unit_message_lists_valid_abbreviations() {
        let err = MeasurementError::InvalidUnit {
            unit: "xx".to_string(),
            valid: vec!["mm", "cm", "m"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid unit 'xx': the unit must be any of the following: mm, cm, m"
        );
    }

    #[test]
    fn missing_standard_unit_names_the_table() {
        let err = MeasurementError::MissingStandardUnit("length");
        assert!(err.to_string().contains("'length'"));
    }
}
