pub mod dialog;
pub mod pagination;
pub mod search_box;
pub mod status_badge;
pub mod status_filter;
