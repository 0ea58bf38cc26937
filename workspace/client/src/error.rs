use model::ValidationError;
use serde::Deserialize;
use thiserror::Error;

/// The transport could not produce a response at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Every way a call against the admin API can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response arrived (connection refused, DNS, timeout, CORS)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered 401
    #[error("Unauthenticated{}", detail(.body))]
    Unauthenticated { body: String },

    /// Any other non-2xx answer; the body is kept verbatim
    #[error("HTTP error {status}{}", detail(.body))]
    Http { status: u16, body: String },

    /// A client-side scan of a list did not find the record
    #[error("{resource} {id} not found")]
    NotFoundLocal { resource: &'static str, id: String },

    /// A precondition failed before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// A 2xx body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// `": <message>"` when a failure body carries one.
fn detail(body: &str) -> String {
    message_in(body)
        .map(|message| format!(": {}", message))
        .unwrap_or_default()
}

fn message_in(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::Network(error.0)
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The record does not exist, whether the server or a local scan said so.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFoundLocal { .. } | ApiError::Http { status: 404, .. })
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated { .. })
    }

    /// `message` (or `error`) carried by a JSON failure body.
    pub fn server_message(&self) -> Option<String> {
        let body = match self {
            ApiError::Http { body, .. } | ApiError::Unauthenticated { body } => body,
            _ => return None,
        };
        message_in(body)
    }

    /// Text shown to the operator for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Unauthenticated { .. } => self
                .server_message()
                .unwrap_or_else(|| "Your session has expired. Please sign in again.".to_string()),
            ApiError::Http { status, .. } => self
                .server_message()
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
            ApiError::NotFoundLocal { resource, .. } => {
                let mut chars = resource.chars();
                match chars.next() {
                    Some(first) => format!("{}{} not found.", first.to_uppercase(), chars.as_str()),
                    None => "Not found.".to_string(),
                }
            }
            ApiError::Validation(error) => error.to_string(),
            ApiError::Encode(_) | ApiError::Decode(_) => {
                "The server sent an unexpected response.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let error = ApiError::Http {
            status: 422,
            body: r#"{"status":"error","message":"Payout already processed"}"#.to_string(),
        };
        assert_eq!(error.user_message(), "Payout already processed");
    }

    #[test]
    fn test_display_carries_server_message() {
        let error = ApiError::Http {
            status: 422,
            body: r#"{"message":"Payout already processed"}"#.to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error 422: Payout already processed");

        let bare = ApiError::Http { status: 502, body: "<html>Bad gateway</html>".to_string() };
        assert_eq!(bare.to_string(), "HTTP error 502");

        let expired = ApiError::Unauthenticated { body: r#"{"error":"Token expired"}"#.to_string() };
        assert_eq!(expired.to_string(), "Unauthenticated: Token expired");
    }

    #[test]
    fn test_user_message_falls_back_to_status() {
        let error = ApiError::Http { status: 502, body: "<html>Bad gateway</html>".to_string() };
        assert_eq!(error.user_message(), "Request failed with status 502");
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_not_found_kinds() {
        assert!(ApiError::Http { status: 404, body: String::new() }.is_not_found());
        let local = ApiError::NotFoundLocal { resource: "dispute", id: "d9".into() };
        assert!(local.is_not_found());
        assert_eq!(local.user_message(), "Dispute not found.");
        assert!(!ApiError::Network("down".into()).is_not_found());
    }

    #[test]
    fn test_validation_message_passes_through() {
        let error = ApiError::from(ValidationError::MissingChoice("a resolution"));
        assert_eq!(error.user_message(), "Please choose a resolution");
    }
}
