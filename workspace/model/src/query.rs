use std::collections::BTreeMap;

/// Page size used when a screen does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Position within a list. Each resource family uses exactly one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// One-based page number (properties)
    Page(u32),
    /// Opaque server-issued cursor; `None` asks for the first page
    Cursor(Option<String>),
}

impl PageRequest {
    pub fn is_first(&self) -> bool {
        matches!(self, PageRequest::Page(1) | PageRequest::Cursor(None))
    }
}

/// Parameters of one list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: PageRequest,
    limit: u32,
    filters: BTreeMap<String, String>,
    search: Option<String>,
}

impl ListQuery {
    /// Page-number pagination starting at `page` (clamped to 1).
    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page: PageRequest::Page(page.max(1)),
            limit: limit.max(1),
            filters: BTreeMap::new(),
            search: None,
        }
    }

    /// Cursor pagination; `None` starts from the beginning.
    pub fn cursor(cursor: Option<String>, limit: u32) -> Self {
        Self {
            page: PageRequest::Cursor(cursor.filter(|c| !c.is_empty())),
            limit: limit.max(1),
            filters: BTreeMap::new(),
            search: None,
        }
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, Some(value.into()));
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(Some(search.into()));
        self
    }

    /// Sets or clears a filter. Blank values clear it.
    pub fn set_filter(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(value) => {
                self.filters.insert(key, value);
            }
            None => {
                self.filters.remove(&key);
            }
        }
    }

    /// Sets or clears the search text. Blank text clears it.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    }

    /// Moves back to the first page (or no cursor) keeping limit and filters.
    pub fn reset_position(&mut self) {
        self.page = match self.page {
            PageRequest::Page(_) => PageRequest::Page(1),
            PageRequest::Cursor(_) => PageRequest::Cursor(None),
        };
    }

    /// Same query at another position. The position must use this query's
    /// pagination mode; a mismatched request is ignored.
    pub fn at(&self, page: PageRequest) -> Self {
        let mut next = self.clone();
        match (&self.page, page) {
            (PageRequest::Page(_), PageRequest::Page(n)) => next.page = PageRequest::Page(n.max(1)),
            (PageRequest::Cursor(_), PageRequest::Cursor(c)) => {
                next.page = PageRequest::Cursor(c.filter(|c| !c.is_empty()))
            }
            (current, requested) => {
                tracing::warn!(
                    "Ignoring {:?}: query paginates with {:?}",
                    requested,
                    current
                );
            }
        }
        next
    }

    pub fn page(&self) -> &PageRequest {
        &self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Query-string parameters: `limit`, `page` or `cursor`, filters, `search`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("limit".to_string(), self.limit.to_string())];
        match &self.page {
            PageRequest::Page(page) => params.push(("page".to_string(), page.to_string())),
            PageRequest::Cursor(Some(cursor)) => params.push(("cursor".to_string(), cursor.clone())),
            PageRequest::Cursor(None) => {}
        }
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        params
    }
}
