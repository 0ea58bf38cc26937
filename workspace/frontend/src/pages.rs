pub mod bookings;
pub mod disputes;
pub mod payouts;
pub mod properties;
