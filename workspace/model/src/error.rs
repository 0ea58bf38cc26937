use thiserror::Error;

/// A client-side precondition that failed before anything was sent.
///
/// The backend remains the final arbiter; these checks only stop requests
/// that are certain to be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The operator has not picked one of the required options yet
    #[error("Please choose {0}")]
    MissingChoice(&'static str),

    /// A field rule failed; the message is operator-facing
    #[error("{0}")]
    Field(String),

    /// A textual value did not name any known variant
    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, list)| list.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        tracing::debug!("Validation failed: {}", message);
        ValidationError::Field(message)
    }
}
