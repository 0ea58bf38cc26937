//! Typed operations per resource family, all over one [`ResourceClient`].

pub mod bookings;
pub mod disputes;
pub mod payouts;
pub mod properties;

pub use bookings::BookingRepository;
pub use disputes::DisputeRepository;
pub use payouts::PayoutRepository;
pub use properties::PropertyRepository;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::http::ResourceClient;

/// Unreserved characters stay as they are.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// `{base}/{id}{suffix}` with `id` encoded as one path segment.
pub(crate) fn record_path(base: &str, id: &str, suffix: &str) -> String {
    format!("{}/{}{}", base, utf8_percent_encode(id, SEGMENT), suffix)
}

/// The four adapters sharing one client.
#[derive(Debug, Clone, PartialEq)]
pub struct Repositories {
    pub bookings: BookingRepository,
    pub properties: PropertyRepository,
    pub disputes: DisputeRepository,
    pub payouts: PayoutRepository,
}

impl Repositories {
    pub fn new(client: ResourceClient) -> Self {
        Self {
            bookings: BookingRepository::new(client.clone()),
            properties: PropertyRepository::new(client.clone()),
            disputes: DisputeRepository::new(client.clone()),
            payouts: PayoutRepository::new(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_encodes_id_as_one_segment() {
        assert_eq!(record_path("/bookings", "b-1_x.y~z", ""), "/bookings/b-1_x.y~z");
        assert_eq!(record_path("/disputes", "a/b c", "/resolve"), "/disputes/a%2Fb%20c/resolve");
        assert_eq!(record_path("/bookings", "?x#", ""), "/bookings/%3Fx%23");
    }
}
