//! Rendering of command results as text lines or pretty JSON.

use anyhow::Result;
use model::{ListResult, PageInfo};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json { Format::Json } else { Format::Text }
    }
}

pub fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per item plus a pagination footer, or the page as JSON.
pub fn list<T: Serialize>(
    format: Format,
    page: &ListResult<T>,
    line: impl Fn(&T) -> String,
) -> Result<String> {
    match format {
        Format::Json => json(page),
        Format::Text => {
            let mut lines: Vec<String> = page.items.iter().map(line).collect();
            if lines.is_empty() {
                lines.push("No records found.".to_string());
            }
            lines.push(footer(page));
            Ok(lines.join("\n"))
        }
    }
}

pub fn footer<T>(page: &ListResult<T>) -> String {
    let count = page.items.len();
    match &page.page_info {
        PageInfo::Cursor { next_cursor, total, .. } => {
            let shown = match total {
                Some(total) => format!("{} of {} shown", count, total),
                None => format!("{} shown", count),
            };
            match next_cursor {
                Some(cursor) if page.can_go_next() => format!("-- {}; more with --cursor {}", shown, cursor),
                _ => format!("-- {}; end of list", shown),
            }
        }
        PageInfo::Paged { page: number, total_pages, total, .. } => {
            let mut text = match total_pages {
                Some(pages) => format!("-- page {} of {}", number, pages),
                None => format!("-- page {}", number),
            };
            if let Some(total) = total {
                text.push_str(&format!(" ({} total)", total));
            }
            if page.can_go_next() {
                text.push_str(&format!("; next with --page {}", number + 1));
            }
            text
        }
    }
}
