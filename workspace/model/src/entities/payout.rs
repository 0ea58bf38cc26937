use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Person, Record};
use crate::error::ValidationError;
use crate::timestamp::{self, Timestamp};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutWallet {
    pub user: Option<Person>,
}

/// Withdrawal request as listed by `GET /finance/admin/payouts`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    #[serde(default)]
    pub wallet_id: String,
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub status: String,
    pub bank_name: Option<String>,
    pub account_no: Option<String>,
    pub account_name: Option<String>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub processed_at: Option<Timestamp>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub updated_at: Option<Timestamp>,
    pub wallet: Option<PayoutWallet>,
}

impl Payout {
    pub fn is_pending(&self) -> bool {
        self.status == PayoutStatus::Pending.as_str()
    }

    pub fn requester_label(&self) -> Option<&str> {
        self.wallet
            .as_ref()
            .and_then(|w| w.user.as_ref())
            .and_then(Person::label)
    }
}

impl Record for Payout {
    const KIND: &'static str = "payout";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    Pending,
    Completed,
    Rejected,
}

impl PayoutStatus {
    pub const ALL: [PayoutStatus; 3] =
        [PayoutStatus::Pending, PayoutStatus::Completed, PayoutStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "PENDING",
            PayoutStatus::Completed => "COMPLETED",
            PayoutStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "payout status",
                value: s.to_string(),
            })
    }
}

/// One ledger entry of the admin wallet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: String,
    #[serde(default)]
    pub wallet_id: String,
    pub amount: Option<Decimal>,
    /// CREDIT or DEBIT
    #[serde(rename = "type", default)]
    pub kind: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub reference_id: Option<String>,
    pub balance_after: Option<Decimal>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<Timestamp>,
}

/// `GET /finance/wallet`; the transaction log is embedded and unpaginated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub transactions: Vec<WalletTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_payout_accepts_numeric_and_string_amounts() {
        let numeric: Payout =
            serde_json::from_str(r#"{"id":"p1","walletId":"w1","amount":250000,"status":"PENDING"}"#)
                .unwrap();
        let textual: Payout =
            serde_json::from_str(r#"{"id":"p2","walletId":"w1","amount":"250000","status":"COMPLETED"}"#)
                .unwrap();

        assert_eq!(numeric.amount, textual.amount);
        assert!(numeric.is_pending());
        assert!(!textual.is_pending());
    }

    #[test]
    fn test_null_amount_does_not_fail_the_page() {
        let payouts: Vec<Payout> = serde_json::from_str(
            r#"[{"id":"p1","amount":null,"status":"PENDING"},{"id":"p2","amount":"10","status":"PENDING"}]"#,
        )
        .unwrap();
        assert_eq!(payouts[0].amount, None);
        assert_eq!(payouts[1].amount, Some(Decimal::from(10)));

        let wallet: Wallet = serde_json::from_str(r#"{"id":"w1","transactions":[{"id":"t1"}]}"#).unwrap();
        assert_eq!(wallet.balance, None);
        assert_eq!(wallet.transactions[0].amount, None);
    }

    #[test]
    fn test_payout_requester_label() {
        let payout: Payout = serde_json::from_str(
            r#"{"id":"p1","amount":"10","status":"PENDING","wallet":{"user":{"name":"Sari","email":"sari@example.com"}}}"#,
        )
        .unwrap();
        assert_eq!(payout.requester_label(), Some("Sari"));
    }

    #[test]
    fn test_wallet_without_transactions() {
        let wallet: Wallet =
            serde_json::from_str(r#"{"id":"w1","userId":"u1","balance":"99.50","currency":"IDR"}"#).unwrap();
        assert_eq!(wallet.balance, Some(Decimal::from_str("99.50").unwrap()));
        assert!(wallet.transactions.is_empty());
    }

    #[test]
    fn test_payout_status_round_trip_through_str() {
        for status in PayoutStatus::ALL {
            assert_eq!(status.as_str().parse::<PayoutStatus>().unwrap(), status);
        }
        assert!("PAID".parse::<PayoutStatus>().is_err());
    }
}
