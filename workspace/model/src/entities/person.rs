use serde::{Deserialize, Serialize};

/// A user projection embedded in disputes (the initiator) and payouts (the
/// wallet owner).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Person {
    /// Name when known, otherwise the email address.
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref().filter(|email| !email.is_empty()))
    }
}
