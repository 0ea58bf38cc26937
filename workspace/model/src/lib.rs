//! Transport-level data model for the rental admin client.
//!
//! Everything here mirrors what the backend sends and accepts: the response
//! envelope, list pagination, the resource records, and the action payloads
//! staff submit. Records carry no business logic; the backend owns them and
//! this crate only gives them types.

pub mod action;
pub mod entities;
pub mod envelope;
pub mod error;
pub mod query;
pub mod timestamp;

pub use action::{
    ActionDraft, PayoutAction, ProcessDraft, ProcessPayoutRequest, Resolution, ResolveDisputeRequest,
    ResolveDraft, VerifyDraft, VerifyPropertyRequest,
};
pub use entities::{
    Booking, Dispute, Payout, PayoutStatus, Person, Property, PropertyStatus, Record, Wallet,
    WalletTransaction,
};
pub use envelope::{Ack, Envelope, ListResult, PageInfo, WireMeta};
pub use error::ValidationError;
pub use query::{DEFAULT_LIMIT, ListQuery, PageRequest};
