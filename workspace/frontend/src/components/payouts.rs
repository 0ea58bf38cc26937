mod list;
mod process_modal;
mod wallet;

pub use list::Payouts;
pub use process_modal::ProcessModal;
pub use wallet::WalletView;
