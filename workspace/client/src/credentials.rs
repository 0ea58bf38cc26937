//! Where the bearer token comes from.
//!
//! The sign-in flow that writes the token lives outside this crate; the
//! client only reads it, once per request.

/// Supplies the bearer token and hears about rejected credentials.
pub trait CredentialProvider {
    /// Current token, if the operator is signed in.
    fn token(&self) -> Option<String>;

    /// Called when the server answered 401. The client itself never clears
    /// credentials or navigates; an implementation may.
    fn on_unauthorized(&self) {}
}

/// Anonymous access; no `Authorization` header is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn token(&self) -> Option<String> {
        None
    }
}

/// A token fixed at construction time (CLI flags, tests).
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }

    fn on_unauthorized(&self) {
        tracing::warn!("Server rejected the configured token (401)");
    }
}
