use serde::{Deserialize, Serialize};

use super::{Person, PropertySnippet, Record};
use crate::timestamp::{self, Timestamp};

/// Booking projection the disputes endpoint embeds in each dispute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeBooking {
    pub id: Option<String>,
    pub status: Option<String>,
    pub property: Option<PropertySnippet>,
}

/// Dispute as listed by `GET /disputes`. There is no single-item endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    pub booking_id: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    pub admin_notes: Option<String>,
    pub initiator: Option<Person>,
    pub booking: Option<DisputeBooking>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub resolved_at: Option<Timestamp>,
    pub resolved_by: Option<String>,
}

impl Dispute {
    pub fn is_resolved(&self) -> bool {
        self.status.as_deref() == Some("RESOLVED")
    }

    pub fn property_title(&self) -> Option<&str> {
        self.booking
            .as_ref()
            .and_then(|b| b.property.as_ref())
            .and_then(|p| p.title.as_deref())
    }

    pub fn initiator_label(&self) -> Option<&str> {
        self.initiator.as_ref().and_then(Person::label)
    }
}

impl Record for Dispute {
    const KIND: &'static str = "dispute";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispute_projections() {
        let dispute: Dispute = serde_json::from_str(
            r#"{
                "id": "d1",
                "bookingId": "b1",
                "reason": "Dirty room",
                "status": "OPEN",
                "initiator": {"name": null, "email": "tenant@example.com"},
                "booking": {"id": "b1", "property": {"title": "Loft"}}
            }"#,
        )
        .unwrap();

        assert!(!dispute.is_resolved());
        assert_eq!(dispute.property_title(), Some("Loft"));
        assert_eq!(dispute.initiator_label(), Some("tenant@example.com"));
        assert_eq!(dispute.booking_id.as_deref(), Some("b1"));
    }
}
