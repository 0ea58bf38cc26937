//! Resource records as the backend returns them.
//!
//! Nested snippets (a booking's property, a payout's wallet owner) are
//! read-only projections owned by the backend. They are cached in view state
//! for one screen at most and never written back.

pub mod booking;
pub mod dispute;
pub mod payout;
pub mod person;
pub mod property;

pub use booking::{Booking, PaymentSnippet, PropertySnippet};
pub use dispute::{Dispute, DisputeBooking};
pub use payout::{Payout, PayoutStatus, PayoutWallet, Wallet, WalletTransaction};
pub use person::Person;
pub use property::{Landlord, Property, PropertyStatus};

/// A record addressable by its backend identifier.
pub trait Record {
    /// Human-readable resource name used in messages ("booking", "dispute").
    const KIND: &'static str;

    fn id(&self) -> &str;
}
