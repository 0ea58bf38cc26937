//! State-changing requests staff submit from an action modal.
//!
//! Each request type can only be built through a validating constructor, so
//! a value of `ResolveDisputeRequest` is known to satisfy the client-side
//! rules. Drafts hold the raw form input until it is submitted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::Property;
use crate::error::ValidationError;

const REJECTION_REASON_MESSAGE: &str = "Rejection reason is required (min 5 chars)";
const ADMIN_NOTES_MESSAGE: &str = "Admin notes must be at least 5 characters";

/// Outcome the operator picks when resolving a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    RefundTenant,
    PayoutLandlord,
    RejectDispute,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [
        Resolution::RefundTenant,
        Resolution::PayoutLandlord,
        Resolution::RejectDispute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::RefundTenant => "REFUND_TENANT",
            Resolution::PayoutLandlord => "PAYOUT_LANDLORD",
            Resolution::RejectDispute => "REJECT_DISPUTE",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "resolution",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutAction {
    Approve,
    Reject,
}

impl PayoutAction {
    pub const ALL: [PayoutAction; 2] = [PayoutAction::Approve, PayoutAction::Reject];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutAction::Approve => "APPROVE",
            PayoutAction::Reject => "REJECT",
        }
    }
}

impl fmt::Display for PayoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "payout action",
                value: s.to_string(),
            })
    }
}

/// Body of `POST /admin/properties/{id}/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "rejection_reason_present"))]
pub struct VerifyPropertyRequest {
    is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5, message = "Rejection reason is required (min 5 chars)"))]
    rejection_reason: Option<String>,
}

fn rejection_reason_present(
    request: &VerifyPropertyRequest,
) -> Result<(), validator::ValidationError> {
    if !request.is_verified && request.rejection_reason.is_none() {
        let mut error = validator::ValidationError::new("rejection_reason_required");
        error.message = Some(REJECTION_REASON_MESSAGE.into());
        return Err(error);
    }
    Ok(())
}

impl VerifyPropertyRequest {
    /// Approval never needs a reason, so any reason text is dropped.
    pub fn approve() -> Self {
        Self { is_verified: true, rejection_reason: None }
    }

    /// Rejection requires a trimmed reason of at least five characters.
    pub fn reject(reason: &str) -> Result<Self, ValidationError> {
        let reason = reason.trim();
        let request = Self {
            is_verified: false,
            rejection_reason: (!reason.is_empty()).then(|| reason.to_string()),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn new(is_verified: bool, rejection_reason: &str) -> Result<Self, ValidationError> {
        if is_verified {
            Ok(Self::approve())
        } else {
            Self::reject(rejection_reason)
        }
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }
}

/// Body of `POST /disputes/{id}/resolve`.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDisputeRequest {
    resolution: Resolution,
    #[validate(length(min = 5, message = "Admin notes must be at least 5 characters"))]
    admin_notes: String,
}

impl ResolveDisputeRequest {
    pub fn new(resolution: Resolution, admin_notes: &str) -> Result<Self, ValidationError> {
        let request = Self {
            resolution,
            admin_notes: admin_notes.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn admin_notes(&self) -> &str {
        &self.admin_notes
    }
}

/// Body of `POST /finance/admin/payouts/{id}/process`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayoutRequest {
    action: PayoutAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl ProcessPayoutRequest {
    /// Notes are optional; blank notes are left out of the payload.
    pub fn new(action: PayoutAction, notes: &str) -> Self {
        let notes = notes.trim();
        Self {
            action,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }

    pub fn action(&self) -> PayoutAction {
        self.action
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Form input of an action modal that turns into a request on submit.
pub trait ActionDraft: Clone + Default {
    type Request;

    fn build(&self) -> Result<Self::Request, ValidationError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyDraft {
    /// `Some(true)` approve, `Some(false)` reject, `None` not chosen yet
    pub decision: Option<bool>,
    pub rejection_reason: String,
}

impl VerifyDraft {
    /// Starts from the property's current verification flag.
    pub fn for_property(property: &Property) -> Self {
        Self {
            decision: property.is_verified,
            rejection_reason: String::new(),
        }
    }
}

impl ActionDraft for VerifyDraft {
    type Request = VerifyPropertyRequest;

    fn build(&self) -> Result<VerifyPropertyRequest, ValidationError> {
        let decision = self.decision.ok_or(ValidationError::MissingChoice("approve or reject"))?;
        VerifyPropertyRequest::new(decision, &self.rejection_reason)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveDraft {
    pub resolution: Option<Resolution>,
    pub admin_notes: String,
}

impl ActionDraft for ResolveDraft {
    type Request = ResolveDisputeRequest;

    fn build(&self) -> Result<ResolveDisputeRequest, ValidationError> {
        let resolution = self.resolution.ok_or(ValidationError::MissingChoice("a resolution"))?;
        ResolveDisputeRequest::new(resolution, &self.admin_notes)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessDraft {
    pub action: Option<PayoutAction>,
    pub notes: String,
}

impl ActionDraft for ProcessDraft {
    type Request = ProcessPayoutRequest;

    fn build(&self) -> Result<ProcessPayoutRequest, ValidationError> {
        let action = self.action.ok_or(ValidationError::MissingChoice("APPROVE or REJECT"))?;
        Ok(ProcessPayoutRequest::new(action, &self.notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_notes_boundary() {
        let err = ResolveDisputeRequest::new(Resolution::RefundTenant, "abcd").unwrap_err();
        assert_eq!(err, ValidationError::Field(ADMIN_NOTES_MESSAGE.to_string()));

        let ok = ResolveDisputeRequest::new(Resolution::RefundTenant, "abcde").unwrap();
        assert_eq!(ok.admin_notes(), "abcde");
    }

    #[test]
    fn test_resolve_notes_are_trimmed_before_counting() {
        assert!(ResolveDisputeRequest::new(Resolution::PayoutLandlord, "  abcd   ").is_err());
    }

    #[test]
    fn test_reject_requires_reason() {
        let err = VerifyPropertyRequest::new(false, "").unwrap_err();
        assert_eq!(err, ValidationError::Field(REJECTION_REASON_MESSAGE.to_string()));
        assert!(VerifyPropertyRequest::new(false, "nope").is_err());
        assert!(VerifyPropertyRequest::new(false, "Blurry photos").is_ok());
    }

    #[test]
    fn test_approve_ignores_reason_content() {
        for reason in ["", "x", "a perfectly fine reason"] {
            let request = VerifyPropertyRequest::new(true, reason).unwrap();
            assert!(request.is_verified());
            assert_eq!(request.rejection_reason(), None);
        }
    }

    #[test]
    fn test_wire_shapes() {
        let verify = serde_json::to_value(VerifyPropertyRequest::reject("Missing deed").unwrap()).unwrap();
        assert_eq!(verify, json!({"isVerified": false, "rejectionReason": "Missing deed"}));

        let approve = serde_json::to_value(VerifyPropertyRequest::approve()).unwrap();
        assert_eq!(approve, json!({"isVerified": true}));

        let resolve = serde_json::to_value(
            ResolveDisputeRequest::new(Resolution::RejectDispute, "No evidence given").unwrap(),
        )
        .unwrap();
        assert_eq!(resolve, json!({"resolution": "REJECT_DISPUTE", "adminNotes": "No evidence given"}));

        let process = serde_json::to_value(ProcessPayoutRequest::new(PayoutAction::Approve, "   ")).unwrap();
        assert_eq!(process, json!({"action": "APPROVE"}));
    }

    #[test]
    fn test_drafts_require_a_choice() {
        assert_eq!(
            VerifyDraft::default().build().unwrap_err(),
            ValidationError::MissingChoice("approve or reject")
        );
        assert_eq!(
            ResolveDraft { resolution: None, admin_notes: "long enough".into() }.build().unwrap_err(),
            ValidationError::MissingChoice("a resolution")
        );
        assert!(ProcessDraft::default().build().is_err());

        let draft = ProcessDraft { action: Some(PayoutAction::Reject), notes: "bank closed".into() };
        assert_eq!(draft.build().unwrap().notes(), Some("bank closed"));
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("refund_tenant".parse::<Resolution>().unwrap(), Resolution::RefundTenant);
        assert_eq!("approve".parse::<PayoutAction>().unwrap(), PayoutAction::Approve);
        assert!("maybe".parse::<PayoutAction>().is_err());
    }
}
