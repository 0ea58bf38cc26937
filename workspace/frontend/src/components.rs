pub mod bookings;
pub mod common;
pub mod disputes;
pub mod layout;
pub mod payouts;
pub mod properties;
pub mod settings;
