mod list;
mod verify_modal;

pub use list::Properties;
pub use verify_modal::VerifyModal;
