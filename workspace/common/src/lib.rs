//! Presentation helpers shared by the web console and the CLI, so both
//! render amounts, dates and statuses the same way.

mod format;
mod labels;

pub use format::{
    format_amount, format_date, format_datetime, format_optional_amount, or_dash, truncate,
};
pub use labels::{humanize, status_badge_class};
