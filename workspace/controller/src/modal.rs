use std::cell::RefCell;

use client::ApiError;
use model::{Ack, ActionDraft, Record};
use tracing::{debug, info, warn};

use crate::list::{self, ListController};
use crate::source::{ListSource, Mutation};

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<R, D> {
    Closed,
    Open {
        selected: R,
        draft: D,
        error: Option<String>,
    },
    Submitting {
        selected: R,
        draft: D,
    },
}

/// A validated request ready to send for the selected record.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<Q> {
    pub id: String,
    pub request: Q,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing open, or a submission is already in flight
    Refused,
    /// The draft failed validation; the modal shows the message
    Invalid,
    /// The server refused; the modal stays open with the draft intact
    Failed(String),
    /// The mutation went through and the modal closed
    Completed(Ack),
}

/// Open/submit/close cycle of a modal acting on one record.
#[derive(Debug)]
pub struct ActionModal<R, D> {
    state: ModalState<R, D>,
}

impl<R, D> Default for ActionModal<R, D> {
    fn default() -> Self {
        Self { state: ModalState::Closed }
    }
}

impl<R: Record + Clone, D: ActionDraft> ActionModal<R, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState<R, D> {
        &self.state
    }

    /// Opens for `record` with an empty draft.
    pub fn open(&mut self, record: R) {
        self.open_with(record, D::default());
    }

    /// Opens for `record` with a preset draft.
    pub fn open_with(&mut self, record: R, draft: D) {
        if self.is_submitting() {
            warn!("Ignoring open while a submission is in flight");
            return;
        }
        debug!("Opening action modal for {} {}", R::KIND, record.id());
        self.state = ModalState::Open { selected: record, draft, error: None };
    }

    /// Closes unless a submission is in flight. Returns whether it closed.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.state = ModalState::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ModalState::Submitting { .. })
    }

    pub fn selected(&self) -> Option<&R> {
        match &self.state {
            ModalState::Open { selected, .. } | ModalState::Submitting { selected, .. } => Some(selected),
            ModalState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match &self.state {
            ModalState::Open { draft, .. } | ModalState::Submitting { draft, .. } => Some(draft),
            ModalState::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ModalState::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Edits the draft of an open modal. Ignored while submitting.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut D)) {
        if let ModalState::Open { draft, .. } = &mut self.state {
            edit(draft);
        }
    }

    /// Validates the draft and moves to `Submitting`.
    ///
    /// Returns `None` without any side effect on the network when nothing is
    /// open, a submission is already running, or validation fails (the
    /// message is then shown inline).
    pub fn begin_submit(&mut self) -> Option<Submission<D::Request>> {
        let state = std::mem::replace(&mut self.state, ModalState::Closed);
        let (selected, draft) = match state {
            ModalState::Open { selected, draft, .. } => (selected, draft),
            other => {
                debug!("Submit refused: modal is not open for editing");
                self.state = other;
                return None;
            }
        };

        match draft.build() {
            Ok(request) => {
                let id = selected.id().to_string();
                self.state = ModalState::Submitting { selected, draft };
                Some(Submission { id, request })
            }
            Err(e) => {
                debug!("Draft rejected: {}", e);
                self.state = ModalState::Open {
                    selected,
                    draft,
                    error: Some(ApiError::from(e).user_message()),
                };
                None
            }
        }
    }

    /// Applies the mutation's answer. Returns `true` when the modal closed.
    pub fn complete_submit(&mut self, result: &Result<Ack, ApiError>) -> bool {
        let state = std::mem::replace(&mut self.state, ModalState::Closed);
        let (selected, draft) = match state {
            ModalState::Submitting { selected, draft } => (selected, draft),
            other => {
                warn!("Submission finished but no submission was running");
                self.state = other;
                return false;
            }
        };

        match result {
            Ok(_) => {
                info!("{} {} updated", R::KIND, selected.id());
                true
            }
            Err(e) => {
                warn!("Updating {} {} failed: {}", R::KIND, selected.id(), e);
                self.state = ModalState::Open {
                    selected,
                    draft,
                    error: Some(e.user_message()),
                };
                false
            }
        }
    }
}

/// Submits the modal's draft through `mutation`; on success the owning list
/// refreshes from its first page.
pub async fn submit<R, M, S>(
    modal: &RefCell<ActionModal<R, M::Draft>>,
    mutation: &M,
    list: &RefCell<ListController<S::Item>>,
    source: &S,
) -> SubmitOutcome
where
    R: Record + Clone,
    M: Mutation,
    S: ListSource,
{
    let submission = {
        let mut modal = modal.borrow_mut();
        if !modal.is_open() || modal.is_submitting() {
            return SubmitOutcome::Refused;
        }
        match modal.begin_submit() {
            Some(submission) => submission,
            None => return SubmitOutcome::Invalid,
        }
    };

    let result = mutation.apply(&submission.id, &submission.request).await;
    let closed = modal.borrow_mut().complete_submit(&result);

    match result {
        Ok(ack) if closed => {
            list::refresh(list, source).await;
            SubmitOutcome::Completed(ack)
        }
        Ok(ack) => SubmitOutcome::Completed(ack),
        Err(e) => SubmitOutcome::Failed(e.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use client::testing::MockTransport;
    use client::{DisputeRepository, Method, PayoutRepository, PropertyRepository};
    use model::{
        Dispute, ListQuery, Payout, PayoutAction, ProcessDraft, Property, Resolution, ResolveDraft,
        VerifyDraft,
    };
    use serde_json::json;

    use super::*;

    fn dispute(id: &str) -> Dispute {
        Dispute { id: id.into(), status: Some("OPEN".into()), ..Default::default() }
    }

    #[test]
    fn test_validation_failure_stays_open() {
        let mut modal = ActionModal::<Dispute, ResolveDraft>::new();
        modal.open(dispute("d1"));
        modal.update_draft(|d| {
            d.resolution = Some(Resolution::RefundTenant);
            d.admin_notes = "abcd".into();
        });

        assert!(modal.begin_submit().is_none());
        assert_eq!(modal.error(), Some("Admin notes must be at least 5 characters"));
        assert!(!modal.is_submitting());

        modal.update_draft(|d| d.admin_notes = "abcde".into());
        let submission = modal.begin_submit().unwrap();
        assert_eq!(submission.id, "d1");
        assert_eq!(submission.request.admin_notes(), "abcde");
    }

    #[test]
    fn test_second_submit_and_close_refused_while_submitting() {
        let mut modal = ActionModal::<Dispute, ResolveDraft>::new();
        modal.open_with(
            dispute("d1"),
            ResolveDraft { resolution: Some(Resolution::RejectDispute), admin_notes: "No proof".into() },
        );

        assert!(modal.begin_submit().is_some());
        assert!(modal.begin_submit().is_none());
        assert!(!modal.close());
        assert!(modal.is_submitting());
    }

    #[test]
    fn test_failure_preserves_draft() {
        let mut modal = ActionModal::<Dispute, ResolveDraft>::new();
        let draft = ResolveDraft { resolution: Some(Resolution::PayoutLandlord), admin_notes: "Tenant no-show".into() };
        modal.open_with(dispute("d1"), draft.clone());
        modal.begin_submit().unwrap();

        let closed = modal.complete_submit(&Err(ApiError::Http {
            status: 409,
            body: r#"{"message":"Dispute already resolved"}"#.into(),
        }));

        assert!(!closed);
        assert_eq!(modal.draft(), Some(&draft));
        assert_eq!(modal.error(), Some("Dispute already resolved"));
    }

    #[tokio::test]
    async fn test_short_notes_send_nothing() {
        let mock = MockTransport::new();
        let repo = DisputeRepository::new(mock.client());
        let modal = RefCell::new(ActionModal::<Dispute, ResolveDraft>::new());
        let list = RefCell::new(ListController::<Dispute>::new(DisputeRepository::default_query()));

        modal.borrow_mut().open_with(
            dispute("d1"),
            ResolveDraft { resolution: Some(Resolution::RefundTenant), admin_notes: "abcd".into() },
        );
        let outcome = submit(&modal, &repo, &list, &repo).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_verify_opens_with_current_flag() {
        let mut modal = ActionModal::<Property, VerifyDraft>::new();
        let verified = Property { id: "p1".into(), is_verified: Some(true), ..Default::default() };
        modal.open_with(verified.clone(), VerifyDraft::for_property(&verified));

        match modal.state() {
            ModalState::Open { selected, draft, error } => {
                assert_eq!(selected.id, "p1");
                assert_eq!(draft.decision, Some(true));
                assert!(error.is_none());
            }
            other => panic!("expected an open modal, got {:?}", other),
        }

        modal.close();
        let pending = Property { id: "p2".into(), ..Default::default() };
        modal.open_with(pending.clone(), VerifyDraft::for_property(&pending));
        assert_eq!(modal.draft().map(|d| d.decision), Some(None));
    }

    #[tokio::test]
    async fn test_verify_reject_needs_reason_approve_does_not() {
        let mock = MockTransport::new();
        mock.on_json(Method::Post, "/admin/properties/p1/verify", 200, json!({"status": "success"}));
        mock.on_page(Method::Get, "/admin/properties", json!([]), json!({"page": 1}));
        let repo = PropertyRepository::new(mock.client());
        let modal = RefCell::new(ActionModal::<Property, VerifyDraft>::new());
        let list = RefCell::new(ListController::<Property>::new(ListQuery::paged(2, 10)));
        let property = Property { id: "p1".into(), ..Default::default() };

        modal.borrow_mut().open_with(
            property.clone(),
            VerifyDraft { decision: Some(false), rejection_reason: String::new() },
        );
        assert_eq!(submit(&modal, &repo, &list, &repo).await, SubmitOutcome::Invalid);
        assert_eq!(
            modal.borrow().error(),
            Some("Rejection reason is required (min 5 chars)")
        );
        assert_eq!(mock.request_count(), 0);

        modal.borrow_mut().update_draft(|d| d.decision = Some(true));
        let outcome = submit(&modal, &repo, &list, &repo).await;

        assert!(matches!(outcome, SubmitOutcome::Completed(_)));
        assert!(!modal.borrow().is_open());
        let post = &mock.requests()[0];
        assert_eq!(post.json_body(), Some(json!({"isVerified": true})));
        // refresh starts over from page 1
        assert_eq!(mock.last_request().unwrap().param("page"), Some("1"));
    }

    #[tokio::test]
    async fn test_approved_payout_leaves_pending_list() {
        let mock = MockTransport::new();
        mock.on_page(
            Method::Get,
            "/finance/admin/payouts",
            json!([
                {"id": "p1", "amount": "500000", "status": "PENDING"},
                {"id": "p2", "amount": "120000", "status": "PENDING"}
            ]),
            json!({"hasMore": false}),
        );
        let processed = mock.clone();
        mock.on(Method::Post, "/finance/admin/payouts/p1/process", move |_| {
            processed.on_page(
                Method::Get,
                "/finance/admin/payouts",
                json!([{"id": "p2", "amount": "120000", "status": "PENDING"}]),
                json!({"hasMore": false}),
            );
            client::HttpResponse::new(200, r#"{"status":"success","message":"Payout approved"}"#)
        });

        let repo = PayoutRepository::new(mock.client());
        let list = RefCell::new(ListController::<Payout>::new(
            PayoutRepository::default_query().with_filter("status", "PENDING"),
        ));
        let request = list.borrow_mut().load();
        list::run(&list, &repo, request).await;
        let first = list.borrow().items()[0].clone();
        assert_eq!(first.id, "p1");

        let modal = RefCell::new(ActionModal::<Payout, ProcessDraft>::new());
        modal.borrow_mut().open_with(
            first,
            ProcessDraft { action: Some(PayoutAction::Approve), notes: String::new() },
        );
        let outcome = submit(&modal, &repo, &list, &repo).await;

        assert!(matches!(outcome, SubmitOutcome::Completed(ref ack) if ack.message == "Payout approved"));
        let list = list.borrow();
        assert!(list.items().iter().all(|p| p.id != "p1"));
        assert_eq!(list.query().filter("status"), Some("PENDING"));
    }

    #[tokio::test]
    async fn test_server_failure_keeps_modal_open() {
        let mock = MockTransport::new();
        mock.on_json(
            Method::Post,
            "/finance/admin/payouts/p1/process",
            400,
            json!({"status": "error", "message": "Insufficient balance"}),
        );
        let repo = PayoutRepository::new(mock.client());
        let modal = RefCell::new(ActionModal::<Payout, ProcessDraft>::new());
        let list = RefCell::new(ListController::<Payout>::new(PayoutRepository::default_query()));
        let payout = Payout { id: "p1".into(), status: "PENDING".into(), ..Default::default() };

        modal.borrow_mut().open_with(
            payout,
            ProcessDraft { action: Some(PayoutAction::Reject), notes: "Wrong account".into() },
        );
        let outcome = submit(&modal, &repo, &list, &repo).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Insufficient balance".into()));
        let modal = modal.borrow();
        assert_eq!(modal.error(), Some("Insufficient balance"));
        assert_eq!(modal.draft().map(|d| d.notes.as_str()), Some("Wrong account"));
        // no list refresh after a failure
        assert_eq!(mock.count(Method::Get, "/finance/admin/payouts"), 0);
    }
}
