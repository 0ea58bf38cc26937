use std::cell::RefCell;

use client::ApiError;
use model::{ListQuery, ListResult, PageRequest};
use tracing::{debug, trace, warn};

use crate::source::ListSource;
use crate::tracker::{RequestTracker, Ticket};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    /// A fetch is in flight; the previous page stays visible meanwhile.
    Loading { stale: Option<ListResult<T>> },
    Loaded(ListResult<T>),
    Errored { message: String },
}

/// What to fetch for one load, tagged with its ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub query: ListQuery,
}

/// Paging, filtering and loading state of one list screen.
///
/// Every trigger moves to [`ListState::Loading`] and returns the
/// [`LoadRequest`] to run. A new page replaces the visible items, including
/// cursor "load more".
#[derive(Debug)]
pub struct ListController<T> {
    query: ListQuery,
    state: ListState<T>,
    tracker: RequestTracker,
}

impl<T: Clone> ListController<T> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            state: ListState::Idle,
            tracker: RequestTracker::new(),
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// The page on screen: the loaded one, or the stale one while loading.
    pub fn result(&self) -> Option<&ListResult<T>> {
        match &self.state {
            ListState::Loaded(result) => Some(result),
            ListState::Loading { stale } => stale.as_ref(),
            ListState::Idle | ListState::Errored { .. } => None,
        }
    }

    pub fn items(&self) -> &[T] {
        self.result().map(|r| r.items.as_slice()).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListState::Errored { message } => Some(message),
            _ => None,
        }
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.result().is_some_and(ListResult::can_go_next)
    }

    pub fn can_go_prev(&self) -> bool {
        !self.is_loading() && self.result().is_some_and(ListResult::can_go_prev)
    }

    /// Fetches the current query as is.
    pub fn load(&mut self) -> LoadRequest {
        self.begin(self.query.clone())
    }

    /// Re-fetches from the first page or cursor with the current filters.
    pub fn refresh(&mut self) -> LoadRequest {
        self.query.reset_position();
        self.load()
    }

    pub fn set_filter(&mut self, key: &str, value: Option<String>) -> LoadRequest {
        self.query.set_filter(key, value);
        self.refresh()
    }

    pub fn set_search(&mut self, search: Option<String>) -> LoadRequest {
        self.query.set_search(search);
        self.refresh()
    }

    /// Jumps to a page number (page-mode lists only).
    pub fn go_to_page(&mut self, page: u32) -> Option<LoadRequest> {
        if !matches!(self.query.page(), PageRequest::Page(_)) {
            warn!("go_to_page({}) on a cursor-paginated list", page);
            return None;
        }
        self.query = self.query.at(PageRequest::Page(page));
        Some(self.load())
    }

    /// Next page number, or the next cursor. `None` when there is none.
    pub fn next_page(&mut self) -> Option<LoadRequest> {
        if !self.can_go_next() {
            return None;
        }
        let next = match self.query.page() {
            PageRequest::Page(page) => PageRequest::Page(page + 1),
            PageRequest::Cursor(_) => {
                PageRequest::Cursor(self.result().and_then(|r| r.next_cursor()).map(str::to_string))
            }
        };
        self.query = self.query.at(next);
        Some(self.load())
    }

    pub fn prev_page(&mut self) -> Option<LoadRequest> {
        match self.query.page().clone() {
            PageRequest::Page(page) if self.can_go_prev() => {
                let prev = PageRequest::Page(page.saturating_sub(1));
                self.query = self.query.at(prev);
                Some(self.load())
            }
            _ => None,
        }
    }

    /// Cursor "load more"; the next page replaces the current one.
    pub fn load_more(&mut self) -> Option<LoadRequest> {
        if matches!(self.query.page(), PageRequest::Cursor(_)) {
            self.next_page()
        } else {
            None
        }
    }

    /// Applies an answer. Returns `false` when the ticket was superseded and
    /// the answer was dropped.
    pub fn complete(&mut self, ticket: Ticket, result: Result<ListResult<T>, ApiError>) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Discarding superseded list response {:?}", ticket);
            return false;
        }

        self.state = match result {
            Ok(page) => {
                trace!("List loaded with {} items", page.items.len());
                ListState::Loaded(page)
            }
            Err(e) => {
                warn!("List load failed: {}", e);
                ListState::Errored { message: e.user_message() }
            }
        };
        true
    }

    /// Drops every outstanding answer; used when the screen goes away.
    pub fn detach(&self) {
        self.tracker.invalidate();
    }

    fn begin(&mut self, query: ListQuery) -> LoadRequest {
        let stale = self.result().cloned();
        self.state = ListState::Loading { stale };
        let ticket = self.tracker.issue();
        debug!("List load {:?} with {:?}", ticket, query.to_params());
        LoadRequest { ticket, query }
    }
}

/// Runs `request` against `source` and applies the answer.
///
/// No borrow of `controller` is held while the fetch is pending.
pub async fn run<S: ListSource>(
    controller: &RefCell<ListController<S::Item>>,
    source: &S,
    request: LoadRequest,
) -> bool {
    let result = source.fetch(&request.query).await;
    controller.borrow_mut().complete(request.ticket, result)
}

pub async fn refresh<S: ListSource>(
    controller: &RefCell<ListController<S::Item>>,
    source: &S,
) -> bool {
    let request = controller.borrow_mut().refresh();
    run(controller, source, request).await
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use client::testing::MockTransport;
    use client::{Method, PropertyRepository};
    use futures::channel::oneshot;
    use model::{Envelope, PageInfo, WireMeta};
    use serde_json::json;

    use super::*;

    fn page(items: Vec<u32>, next_cursor: Option<&str>, has_more: bool) -> ListResult<u32> {
        ListResult {
            items,
            page_info: PageInfo::Cursor {
                next_cursor: next_cursor.map(str::to_string),
                has_more,
                total: None,
            },
        }
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut list = ListController::<u32>::new(ListQuery::cursor(None, 2));
        let first = list.set_filter("status", Some("PENDING".into()));
        let second = list.set_filter("status", Some("COMPLETED".into()));

        assert!(list.complete(second.ticket, Ok(page(vec![2], None, false))));
        assert!(!list.complete(first.ticket, Ok(page(vec![1], None, false))));
        assert_eq!(list.items(), &[2]);
    }

    #[test]
    fn test_stale_view_while_loading() {
        let mut list = ListController::<u32>::new(ListQuery::cursor(None, 2));
        let request = list.load();
        list.complete(request.ticket, Ok(page(vec![1, 2], Some("c2"), true)));

        let _ = list.refresh();
        assert!(list.is_loading());
        assert_eq!(list.items(), &[1, 2]);
        assert!(!list.can_go_next());
    }

    #[test]
    fn test_load_more_replaces_items() {
        let mut list = ListController::<u32>::new(ListQuery::cursor(None, 2));
        let request = list.load();
        list.complete(request.ticket, Ok(page(vec![1, 2], Some("c2"), true)));

        let more = list.load_more().unwrap();
        assert_eq!(more.query.page(), &PageRequest::Cursor(Some("c2".into())));
        list.complete(more.ticket, Ok(page(vec![3], None, false)));

        assert_eq!(list.items(), &[3]);
        assert!(list.load_more().is_none());
    }

    #[test]
    fn test_filter_change_resets_position() {
        let mut list = ListController::<u32>::new(ListQuery::paged(3, 10));
        let request = list.set_search(Some("villa".into()));
        assert_eq!(request.query.page(), &PageRequest::Page(1));
        assert_eq!(request.query.search(), Some("villa"));

        let mut list = ListController::<u32>::new(ListQuery::cursor(Some("c9".into()), 10));
        let request = list.set_filter("status", Some("PENDING".into()));
        assert!(request.query.page().is_first());
    }

    #[test]
    fn test_error_carries_user_message() {
        let mut list = ListController::<u32>::new(ListQuery::paged(1, 10));
        let request = list.load();
        list.complete(
            request.ticket,
            Err(ApiError::Http {
                status: 500,
                body: r#"{"message":"Database unavailable"}"#.into(),
            }),
        );

        assert_eq!(list.error(), Some("Database unavailable"));
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_detach_drops_outstanding_answer() {
        let mut list = ListController::<u32>::new(ListQuery::paged(1, 10));
        let request = list.load();
        list.detach();
        assert!(!list.complete(request.ticket, Ok(page(vec![1], None, false))));
    }

    #[tokio::test]
    async fn test_properties_pending_page_disables_next() {
        let mock = MockTransport::new();
        mock.on_page(
            Method::Get,
            "/admin/properties",
            json!([{"id": "p1"}, {"id": "p2"}, {"id": "p3"}]),
            json!({"page": 1, "totalPages": 1, "hasNextPage": false, "hasPrevPage": false}),
        );
        let repo = PropertyRepository::new(mock.client());
        let list = RefCell::new(ListController::new(ListQuery::paged(1, 10)));

        let request = list.borrow_mut().set_filter("status", Some("PENDING".into()));
        assert!(run(&list, &repo, request).await);

        let mut list = list.borrow_mut();
        assert_eq!(list.items().len(), 3);
        assert!(!list.can_go_next());
        assert!(list.next_page().is_none());
        assert_eq!(mock.count(Method::Get, "/admin/properties"), 1);
    }

    /// Answers each fetch with whatever the test later sends on its channel.
    struct DeferredSource {
        pending: RefCell<VecDeque<oneshot::Receiver<ListResult<u32>>>>,
    }

    #[async_trait(?Send)]
    impl ListSource for DeferredSource {
        type Item = u32;

        async fn fetch(&self, _query: &ListQuery) -> Result<ListResult<u32>, ApiError> {
            let receiver = self.pending.borrow_mut().pop_front();
            match receiver {
                Some(receiver) => receiver.await.map_err(|e| ApiError::Network(e.to_string())),
                None => Err(ApiError::Network("no answer queued".into())),
            }
        }
    }

    #[tokio::test]
    async fn test_slow_first_response_cannot_overwrite_second() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let (second_done_tx, second_done_rx) = oneshot::channel::<()>();
        let source = DeferredSource {
            pending: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let list = RefCell::new(ListController::<u32>::new(ListQuery::cursor(None, 10)));

        let r1 = list.borrow_mut().set_filter("status", Some("PENDING".into()));
        let r2 = list.borrow_mut().set_filter("status", Some("COMPLETED".into()));

        let (applied_first, applied_second, ()) = futures::join!(
            run(&list, &source, r1),
            async {
                let applied = run(&list, &source, r2).await;
                let _ = second_done_tx.send(());
                applied
            },
            async {
                let _ = second_tx.send(page(vec![2], None, false));
                let _ = second_done_rx.await;
                let _ = first_tx.send(page(vec![1], None, false));
            }
        );

        assert!(applied_second);
        assert!(!applied_first);
        assert_eq!(list.borrow().items(), &[2]);
        assert_eq!(list.borrow().query().filter("status"), Some("COMPLETED"));
    }

    #[test]
    fn test_envelope_page_through_controller() {
        let query = ListQuery::cursor(None, 2);
        let envelope = Envelope {
            status: "success".into(),
            message: String::new(),
            data: vec![1, 2, 3],
            meta: Some(WireMeta { has_more: Some(true), next_cursor: Some("c".into()), ..Default::default() }),
        };
        let mut list = ListController::<u32>::new(query.clone());
        let request = list.load();
        list.complete(request.ticket, Ok(ListResult::from_envelope(envelope, &query)));

        assert_eq!(list.items().len(), 2);
        assert!(list.can_go_next());
    }
}
