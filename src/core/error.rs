use thiserror::Error;

/// Errors that can occur while validating fuel entries or producing an export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaxasError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A single raw input value could not be parsed (date, volume, sector).
    #[error("invalid {field}: {message}")]
    Input {
        /// Name of the offending input field.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// The export could not be assembled from the given inputs.
    #[error("export error: {0}")]
    Export(String),
}

impl TaxasError {
    pub(crate) fn input(field: &'static str, message: impl Into<String>) -> Self {
        Self::Input {
            field,
            message: message.into(),
        }
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the invalid field (e.g. "volume_liters", "taxpayer.uid").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapse a list of validation errors into a single [`TaxasError::Validation`].
///
/// Returns `Ok(())` when the list is empty.
pub(crate) fn collect_errors(errors: Vec<ValidationError>) -> Result<(), TaxasError> {
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(TaxasError::Validation(msg))
}
