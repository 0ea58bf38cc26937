mod booking_preview;
mod detail;
mod list;
mod resolve_modal;

pub use detail::DisputeDetail;
pub use list::Disputes;
pub use resolve_modal::ResolveModal;
