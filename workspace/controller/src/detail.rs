//! Single-record screens: booking detail, dispute detail, wallet.

use client::{ApiError, BookingRepository, DisputeRepository};
use model::{Booking, Dispute, ListQuery, Record};
use serde::Serialize;
use tracing::{debug, warn};

use crate::tracker::{RequestTracker, Ticket};

/// How many bookings are scanned to find the one a dispute refers to.
pub const ENRICHMENT_BOOKING_LIMIT: u32 = 100;

/// How many bookings the dispute list's inline preview scans.
pub const PREVIEW_BOOKING_LIMIT: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Loaded(T),
    Errored { message: String, not_found: bool },
}

/// Fetch-once state of a detail screen.
#[derive(Debug)]
pub struct DetailController<T> {
    state: DetailState<T>,
    tracker: RequestTracker,
}

impl<T> Default for DetailController<T> {
    fn default() -> Self {
        Self {
            state: DetailState::Loading,
            tracker: RequestTracker::new(),
        }
    }
}

impl<T> DetailController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            DetailState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = DetailState::Loading;
        self.tracker.issue()
    }

    /// Applies an answer unless the screen moved on. Returns whether it was
    /// applied.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Discarding detail response for a stale view");
            return false;
        }
        self.state = match result {
            Ok(value) => DetailState::Loaded(value),
            Err(e) => DetailState::Errored {
                message: e.user_message(),
                not_found: e.is_not_found(),
            },
        };
        true
    }

    /// The screen went away; late answers are dropped.
    pub fn detach(&self) {
        self.tracker.invalidate();
    }
}

/// A dispute together with the booking its `bookingId` points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDispute {
    pub dispute: Dispute,
    pub booking: Option<Booking>,
}

impl EnrichedDispute {
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            warn!("Failed to render dispute {} as JSON: {}", self.dispute.id, e);
            String::new()
        })
    }
}

/// Linear scan of a dispute list.
pub fn find_dispute(disputes: Vec<Dispute>, id: &str) -> Result<Dispute, ApiError> {
    disputes
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| ApiError::NotFoundLocal {
            resource: Dispute::KIND,
            id: id.to_string(),
        })
}

/// Pairs a dispute with the booking it refers to, if any is listed.
pub fn enrich_dispute(dispute: Dispute, bookings: &[Booking]) -> EnrichedDispute {
    let booking = dispute
        .booking_id
        .as_deref()
        .and_then(|booking_id| bookings.iter().find(|b| b.id == booking_id))
        .cloned();
    if booking.is_none() {
        debug!("No booking match for dispute {}", dispute.id);
    }
    EnrichedDispute { dispute, booking }
}

/// Fetches the dispute list, picks `id`, then looks up its booking.
///
/// Only the dispute lookup can fail. A failed or empty booking lookup leaves
/// `booking` empty.
pub async fn load_enriched_dispute(
    disputes: &DisputeRepository,
    bookings: &BookingRepository,
    id: &str,
) -> Result<EnrichedDispute, ApiError> {
    let dispute = find_dispute(disputes.list_all().await?, id)?;

    let query = ListQuery::cursor(None, ENRICHMENT_BOOKING_LIMIT);
    let candidates = match bookings.list(&query).await {
        Ok(page) => page.items,
        Err(e) => {
            warn!("Booking lookup for dispute {} failed: {}", id, e);
            Vec::new()
        }
    };

    Ok(enrich_dispute(dispute, &candidates))
}

/// The booking `booking_id` names, if it is on the first bookings page.
pub async fn load_booking_preview(
    bookings: &BookingRepository,
    booking_id: &str,
) -> Result<Option<Booking>, ApiError> {
    let page = bookings
        .list(&ListQuery::cursor(None, PREVIEW_BOOKING_LIMIT))
        .await?;
    let found = page.items.into_iter().find(|b| b.id == booking_id);
    if found.is_none() {
        debug!("Booking {} not among the first {} bookings", booking_id, PREVIEW_BOOKING_LIMIT);
    }
    Ok(found)
}
