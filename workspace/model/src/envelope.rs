use serde::{Deserialize, Serialize};

use crate::query::{ListQuery, PageRequest};

/// The `{status, message, data, meta}` wrapper every response uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: T,
    #[serde(default)]
    pub meta: Option<WireMeta>,
}

/// Acknowledgement of a mutation; the payload is not interpreted.
pub type Ack = Envelope<Option<serde_json::Value>>;

/// List metadata as sent by either pagination style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMeta {
    // cursor style
    pub total: Option<u64>,
    pub limit: Option<u32>,
    pub next_cursor: Option<String>,
    pub has_more: Option<bool>,
    // page style
    pub page: Option<u32>,
    pub total_data: Option<u64>,
    pub total_pages: Option<u32>,
    pub has_next_page: Option<bool>,
    pub has_prev_page: Option<bool>,
}

/// Normalized position information of one fetched page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "mode")]
pub enum PageInfo {
    Cursor {
        next_cursor: Option<String>,
        has_more: bool,
        total: Option<u64>,
    },
    Paged {
        page: u32,
        total_pages: Option<u32>,
        total: Option<u64>,
        has_next_page: bool,
        has_prev_page: bool,
    },
}

/// Exactly one page of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> ListResult<T> {
    /// Builds a page from a list envelope fetched with `query`.
    ///
    /// At most `limit` items are kept, and a short page is always the last
    /// one whatever the meta claims.
    pub fn from_envelope(envelope: Envelope<Vec<T>>, query: &ListQuery) -> Self {
        let limit = query.limit() as usize;
        let mut items = envelope.data;
        if items.len() > limit {
            tracing::warn!(
                "Server returned {} items for limit {}, truncating",
                items.len(),
                limit
            );
            items.truncate(limit);
        }
        let full_page = items.len() >= limit;
        let meta = envelope.meta.unwrap_or_default();

        let page_info = match query.page() {
            PageRequest::Page(requested) => {
                let page = meta.page.unwrap_or(*requested).max(1);
                PageInfo::Paged {
                    page,
                    total_pages: meta.total_pages,
                    total: meta.total_data.or(meta.total),
                    has_next_page: full_page && meta.has_next_page.unwrap_or(false),
                    has_prev_page: meta.has_prev_page.unwrap_or(page > 1),
                }
            }
            PageRequest::Cursor(_) => PageInfo::Cursor {
                next_cursor: meta.next_cursor.filter(|c| !c.is_empty()),
                has_more: full_page && meta.has_more.unwrap_or(false),
                total: meta.total,
            },
        };

        Self { items, page_info }
    }

    /// A further page can be requested.
    pub fn can_go_next(&self) -> bool {
        match &self.page_info {
            PageInfo::Cursor { next_cursor, has_more, .. } => *has_more && next_cursor.is_some(),
            PageInfo::Paged { has_next_page, .. } => *has_next_page,
        }
    }

    /// A previous page exists (page mode only; cursors only move forward).
    pub fn can_go_prev(&self) -> bool {
        match &self.page_info {
            PageInfo::Cursor { .. } => false,
            PageInfo::Paged { page, has_prev_page, .. } => *has_prev_page || *page > 1,
        }
    }

    pub fn next_cursor(&self) -> Option<&str> {
        match &self.page_info {
            PageInfo::Cursor { next_cursor, .. } => next_cursor.as_deref(),
            PageInfo::Paged { .. } => None,
        }
    }

    pub fn page(&self) -> Option<u32> {
        match &self.page_info {
            PageInfo::Paged { page, .. } => Some(*page),
            PageInfo::Cursor { .. } => None,
        }
    }

    pub fn total(&self) -> Option<u64> {
        match &self.page_info {
            PageInfo::Cursor { total, .. } | PageInfo::Paged { total, .. } => *total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(items: Vec<u32>, meta: WireMeta) -> Envelope<Vec<u32>> {
        Envelope {
            status: "success".into(),
            message: String::new(),
            data: items,
            meta: Some(meta),
        }
    }

    #[test]
    fn test_short_cursor_page_is_last() {
        let meta = WireMeta {
            next_cursor: Some("c2".into()),
            has_more: Some(true),
            ..Default::default()
        };
        let page = ListResult::from_envelope(envelope(vec![1, 2, 3], meta), &ListQuery::cursor(None, 10));

        assert_eq!(page.items.len(), 3);
        assert!(!page.can_go_next());
    }

    #[test]
    fn test_full_cursor_page_follows_meta() {
        let meta = WireMeta {
            next_cursor: Some("c2".into()),
            has_more: Some(true),
            total: Some(30),
            ..Default::default()
        };
        let page = ListResult::from_envelope(envelope(vec![1, 2], meta), &ListQuery::cursor(None, 2));

        assert!(page.can_go_next());
        assert_eq!(page.next_cursor(), Some("c2"));
        assert_eq!(page.total(), Some(30));
    }

    #[test]
    fn test_has_more_without_cursor_cannot_advance() {
        let meta = WireMeta { has_more: Some(true), ..Default::default() };
        let page = ListResult::from_envelope(envelope(vec![1, 2], meta), &ListQuery::cursor(None, 2));
        assert!(!page.can_go_next());
    }

    #[test]
    fn test_oversized_page_is_truncated() {
        let page = ListResult::from_envelope(
            envelope(vec![1, 2, 3, 4], WireMeta::default()),
            &ListQuery::paged(1, 2),
        );
        assert_eq!(page.items, vec![1, 2]);
    }

    #[test]
    fn test_paged_meta() {
        let meta = WireMeta {
            page: Some(2),
            total_pages: Some(3),
            total_data: Some(25),
            has_next_page: Some(true),
            has_prev_page: Some(true),
            ..Default::default()
        };
        let page = ListResult::from_envelope(
            envelope((0..10).collect(), meta),
            &ListQuery::paged(2, 10),
        );

        assert_eq!(page.page(), Some(2));
        assert_eq!(page.total(), Some(25));
        assert!(page.can_go_next());
        assert!(page.can_go_prev());
    }

    #[test]
    fn test_missing_meta_on_first_page() {
        let page = ListResult::from_envelope(
            Envelope { status: String::new(), message: String::new(), data: vec![1], meta: None },
            &ListQuery::paged(1, 10),
        );
        assert!(!page.can_go_next());
        assert!(!page.can_go_prev());
    }

    #[test]
    fn test_envelope_decodes_camel_case_meta() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"status":"success","message":"ok","data":[1],"meta":{"nextCursor":"x","hasMore":false,"total":1}}"#,
        )
        .unwrap();
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.next_cursor.as_deref(), Some("x"));
        assert_eq!(meta.has_more, Some(false));
    }

    #[test]
    fn test_ack_tolerates_missing_data() {
        let ack: Ack = serde_json::from_str(r#"{"status":"success","message":"done"}"#).unwrap();
        assert_eq!(ack.message, "done");
        assert!(ack.data.is_none());
    }
}
