//! Glue between the controller state machines and Yew components.
//!
//! Controllers live in a `use_mut_ref` cell; every transition forces a
//! re-render. Fetches run on `spawn_local` and only re-render when the
//! controller accepted the answer.

use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

use client::{ApiError, Repositories};
use controller::list::{self, ListController, LoadRequest};
use controller::modal::{self, ActionModal, SubmitOutcome};
use controller::{DetailController, DetailState, ListSource, Mutation};
use model::{ListQuery, Record};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client;
use crate::common::toast::ToastContext;

/// Repositories provided by the app root, or a fresh bundle from the
/// current settings when rendered outside it.
#[hook]
pub fn use_repositories() -> Repositories {
    use_context::<Repositories>().unwrap_or_else(api_client::repositories)
}

/// A list screen's controller plus the source it pages through.
pub struct ListHandle<S: ListSource> {
    controller: Rc<RefCell<ListController<S::Item>>>,
    source: Rc<S>,
    update: UseForceUpdateHandle,
}

impl<S: ListSource> Clone for ListHandle<S> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            source: self.source.clone(),
            update: self.update.clone(),
        }
    }
}

impl<S: ListSource + 'static> ListHandle<S> {
    pub fn view(&self) -> Ref<'_, ListController<S::Item>> {
        self.controller.borrow()
    }

    fn dispatch(
        &self,
        trigger: impl FnOnce(&mut ListController<S::Item>) -> Option<LoadRequest>,
    ) {
        let request = trigger(&mut self.controller.borrow_mut());
        self.update.force_update();

        let Some(request) = request else {
            log::trace!("List trigger ignored");
            return;
        };
        let controller = self.controller.clone();
        let source = self.source.clone();
        let update = self.update.clone();
        spawn_local(async move {
            if list::run(&*controller, source.as_ref(), request).await {
                update.force_update();
            }
        });
    }

    pub fn refresh(&self) {
        self.dispatch(|c| Some(c.refresh()));
    }

    pub fn set_filter(&self, key: &'static str, value: Option<String>) {
        self.dispatch(move |c| Some(c.set_filter(key, value)));
    }

    pub fn set_search(&self, search: Option<String>) {
        self.dispatch(move |c| Some(c.set_search(search)));
    }

    pub fn next_page(&self) {
        self.dispatch(|c| c.next_page());
    }

    pub fn prev_page(&self) {
        self.dispatch(|c| c.prev_page());
    }

    pub fn load_more(&self) {
        self.dispatch(|c| c.load_more());
    }
}

#[hook]
pub fn use_list<S>(source: S, initial: ListQuery) -> ListHandle<S>
where
    S: ListSource + 'static,
    S::Item: 'static,
{
    let controller = use_mut_ref(move || ListController::new(initial));
    let source = use_memo((), move |_| source);
    let update = use_force_update();

    let handle = ListHandle { controller, source, update };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            log::debug!("List view mounted, loading first page");
            handle.dispatch(|c| Some(c.load()));
            let controller = handle.controller.clone();
            move || {
                log::trace!("List view unmounted");
                controller.borrow().detach();
            }
        });
    }

    handle
}

/// An action modal bound to the mutation it submits.
pub struct ModalHandle<R, M: Mutation> {
    modal: Rc<RefCell<ActionModal<R, M::Draft>>>,
    mutation: Rc<M>,
    update: UseForceUpdateHandle,
}

impl<R, M: Mutation> Clone for ModalHandle<R, M> {
    fn clone(&self) -> Self {
        Self {
            modal: self.modal.clone(),
            mutation: self.mutation.clone(),
            update: self.update.clone(),
        }
    }
}

impl<R, M> ModalHandle<R, M>
where
    R: Record + Clone + 'static,
    M: Mutation + 'static,
    M::Draft: 'static,
{
    pub fn view(&self) -> Ref<'_, ActionModal<R, M::Draft>> {
        self.modal.borrow()
    }

    pub fn open(&self, record: R) {
        log::debug!("Opening {} modal for {}", R::KIND, record.id());
        self.modal.borrow_mut().open(record);
        self.update.force_update();
    }

    pub fn open_with(&self, record: R, draft: M::Draft) {
        log::debug!("Opening {} modal for {} with a preset choice", R::KIND, record.id());
        self.modal.borrow_mut().open_with(record, draft);
        self.update.force_update();
    }

    pub fn close(&self) {
        if self.modal.borrow_mut().close() {
            self.update.force_update();
        }
    }

    /// Submits `draft`. On success the modal closes, `list` refreshes from
    /// its first page and `success` is shown as a toast; failures stay
    /// inline in the modal.
    pub fn submit<S>(
        &self,
        draft: M::Draft,
        list: &ListHandle<S>,
        toasts: Option<ToastContext>,
        success: &'static str,
    ) where
        S: ListSource + 'static,
    {
        self.modal.borrow_mut().update_draft(|current| *current = draft);

        let modal_cell = self.modal.clone();
        let mutation = self.mutation.clone();
        let list = list.clone();
        let update = self.update.clone();
        spawn_local(async move {
            let outcome = modal::submit(
                &*modal_cell,
                mutation.as_ref(),
                &*list.controller,
                list.source.as_ref(),
            )
            .await;
            update.force_update();
            list.update.force_update();

            match outcome {
                SubmitOutcome::Completed(ack) => {
                    log::info!("{}: {}", success, ack.message);
                    if let Some(toasts) = &toasts {
                        toasts.show_success(success.to_string());
                    }
                }
                SubmitOutcome::Failed(message) => {
                    log::warn!("{} submission failed: {}", R::KIND, message);
                }
                SubmitOutcome::Invalid => log::debug!("{} draft failed validation", R::KIND),
                SubmitOutcome::Refused => log::debug!("{} submission refused", R::KIND),
            }
        });
        self.update.force_update();
    }
}

#[hook]
pub fn use_action_modal<R, M>(mutation: M) -> ModalHandle<R, M>
where
    R: Record + Clone + 'static,
    M: Mutation + 'static,
    M::Draft: 'static,
{
    let modal = use_mut_ref(ActionModal::<R, M::Draft>::new);
    let mutation = use_memo((), move |_| mutation);
    let update = use_force_update();
    ModalHandle { modal, mutation, update }
}

/// Loads one record whenever `key` changes. Returns the state and a reload
/// callback.
#[hook]
pub fn use_detail<T, K, F, Fut>(key: K, fetch: F) -> (DetailState<T>, Callback<()>)
where
    T: Clone + 'static,
    K: PartialEq + Clone + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let detail = use_mut_ref(DetailController::<T>::new);
    let update = use_force_update();
    let reloads = use_state(|| 0u32);

    {
        let detail = detail.clone();
        let update = update.clone();
        use_effect_with((key, *reloads), move |(key, _)| {
            let ticket = detail.borrow_mut().begin_load();
            update.force_update();

            let pending = fetch(key.clone());
            let cell = detail.clone();
            spawn_local(async move {
                let result = pending.await;
                if cell.borrow_mut().complete(ticket, result) {
                    update.force_update();
                }
            });

            move || detail.borrow().detach()
        });
    }

    let reload = {
        let reloads = reloads.clone();
        Callback::from(move |_| {
            log::debug!("Reloading detail view");
            reloads.set(*reloads + 1);
        })
    };

    let state = detail.borrow().state().clone();
    (state, reload)
}
