use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::error::ValidationError;
use crate::timestamp::{self, Timestamp};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landlord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Property as listed by `GET /admin/properties`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub images: Option<Vec<String>>,
    pub is_verified: Option<bool>,
    pub status: Option<String>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub submitted_at: Option<Timestamp>,
    pub landlord: Option<Landlord>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<Timestamp>,
}

impl Property {
    /// Status as the backend reports it, falling back to the verification
    /// flag when no explicit status is sent.
    pub fn display_status(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ if self.is_verified == Some(true) => PropertyStatus::Verified.as_str(),
            _ => PropertyStatus::Pending.as_str(),
        }
    }

    pub fn landlord_label(&self) -> Option<&str> {
        let landlord = self.landlord.as_ref()?;
        landlord.name.as_deref().or(landlord.email.as_deref())
    }
}

impl Record for Property {
    const KIND: &'static str = "property";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Verification filter accepted by the properties list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Pending,
    Verified,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 2] = [PropertyStatus::Pending, PropertyStatus::Verified];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Pending => "PENDING",
            PropertyStatus::Verified => "VERIFIED",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "property status",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_status_prefers_explicit_status() {
        let property = Property {
            id: "p1".into(),
            status: Some("REJECTED".into()),
            is_verified: Some(true),
            ..Default::default()
        };
        assert_eq!(property.display_status(), "REJECTED");
    }

    #[test]
    fn test_display_status_falls_back_to_flag() {
        let verified = Property { id: "p1".into(), is_verified: Some(true), ..Default::default() };
        let unknown = Property { id: "p2".into(), ..Default::default() };
        assert_eq!(verified.display_status(), "VERIFIED");
        assert_eq!(unknown.display_status(), "PENDING");
    }

    #[test]
    fn test_property_type_uses_wire_name() {
        let property: Property =
            serde_json::from_str(r#"{"id":"p1","type":"VILLA","price":750000}"#).unwrap();
        assert_eq!(property.property_type.as_deref(), Some("VILLA"));
        assert_eq!(property.price, Some(Decimal::from(750000)));
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("verified".parse::<PropertyStatus>().unwrap(), PropertyStatus::Verified);
        assert!("ALL".parse::<PropertyStatus>().is_err());
    }
}
