//! View-state machines shared by the web console and the CLI.
//!
//! Each controller is a plain state machine split into a `begin_*` half that
//! decides what to fetch or send and a `complete_*` half that applies the
//! answer. Callers keep a controller in a `RefCell`, release the borrow while
//! the request is in flight, and hand the answer back with the ticket they
//! were given. Answers to superseded requests are dropped.

pub mod detail;
pub mod list;
pub mod modal;
pub mod source;
pub mod tracker;

pub use detail::{
    DetailController, DetailState, ENRICHMENT_BOOKING_LIMIT, EnrichedDispute,
    PREVIEW_BOOKING_LIMIT, enrich_dispute, find_dispute, load_booking_preview,
    load_enriched_dispute,
};
pub use list::{ListController, ListState, LoadRequest};
pub use modal::{ActionModal, ModalState, SubmitOutcome, Submission};
pub use source::{ListSource, Mutation};
pub use tracker::{RequestTracker, Ticket};
