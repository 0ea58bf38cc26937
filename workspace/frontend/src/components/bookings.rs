mod detail;
mod list;

pub use detail::BookingDetail;
pub use list::Bookings;
