use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::timestamp::{self, Timestamp};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySnippet {
    pub id: Option<String>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSnippet {
    pub invoice_id: Option<String>,
    pub status: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// Booking as listed by `GET /bookings` and returned by `GET /bookings/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub end_date: Option<Timestamp>,
    pub property: Option<PropertySnippet>,
    pub payment: Option<PaymentSnippet>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<Timestamp>,
}

impl Booking {
    pub fn property_title(&self) -> Option<&str> {
        self.property.as_ref().and_then(|p| p.title.as_deref())
    }

    pub fn payment_status(&self) -> Option<&str> {
        self.payment.as_ref().and_then(|p| p.status.as_deref())
    }
}

impl Record for Booking {
    const KIND: &'static str = "booking";

    fn id(&self) -> &str {
        &self.id
    }
}
