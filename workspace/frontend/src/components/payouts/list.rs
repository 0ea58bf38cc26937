use ::common::{format_date, format_optional_amount, or_dash};
use client::PayoutRepository;
use controller::ModalState;
use model::{Payout, PayoutAction, PayoutStatus, ProcessDraft};
use yew::prelude::*;

use super::process_modal::ProcessModal;
use crate::common::error::ErrorDisplay;
use crate::common::loading::{Loading, RefreshingBar};
use crate::common::toast::ToastContext;
use crate::components::common::pagination::Pagination;
use crate::components::common::status_badge::StatusBadge;
use crate::components::common::status_filter::StatusFilter;
use crate::hooks::{use_action_modal, use_list, use_repositories, ModalHandle};

const PROCESSED_MESSAGE: &str = "Payout processed";

fn action_buttons(payout: &Payout, modal: &ModalHandle<Payout, PayoutRepository>) -> Html {
    if !payout.is_pending() {
        return html! {};
    }
    let open = |action: PayoutAction| {
        let modal = modal.clone();
        let payout = payout.clone();
        Callback::from(move |_: MouseEvent| {
            let draft = ProcessDraft { action: Some(action), ..Default::default() };
            modal.open_with(payout.clone(), draft)
        })
    };
    html! {
        <div class="flex gap-2">
            <button class="btn btn-success btn-xs" onclick={open(PayoutAction::Approve)}>{"Approve"}</button>
            <button class="btn btn-error btn-xs" onclick={open(PayoutAction::Reject)}>{"Reject"}</button>
        </div>
    }
}

#[function_component(Payouts)]
pub fn payouts() -> Html {
    let repos = use_repositories();
    let toasts = use_context::<ToastContext>();
    let list = use_list(repos.payouts.clone(), PayoutRepository::default_query());
    let modal = use_action_modal::<Payout, PayoutRepository>(repos.payouts);

    let on_status = {
        let list = list.clone();
        Callback::from(move |status: Option<String>| list.set_filter("status", status))
    };
    let on_load_more = {
        let list = list.clone();
        Callback::from(move |_| list.load_more())
    };

    let view = list.view();
    let toolbar = html! {
        <div class="flex justify-end mb-4">
            <StatusFilter
                options={PayoutStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>()}
                selected={view.query().filter("status").map(str::to_string)}
                on_change={on_status}
                disabled={view.is_loading()}
            />
        </div>
    };

    let body = if let Some(message) = view.error() {
        let retry = {
            let list = list.clone();
            Callback::from(move |_| list.refresh())
        };
        html! { <ErrorDisplay message={message.to_string()} on_retry={Some(retry)} /> }
    } else if let Some(result) = view.result() {
        html! {
            <>
                if view.is_loading() {
                    <RefreshingBar />
                }
                if result.items.is_empty() {
                    <p class="text-center text-base-content/60 py-8">{"No payouts found."}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>{"Requested by"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Bank"}</th>
                                    <th>{"Requested"}</th>
                                    <th>{"Status"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for result.items.iter().map(|payout| html! {
                                    <tr key={payout.id.clone()}>
                                        <td>{or_dash(payout.requester_label())}</td>
                                        <td class="font-mono">{format_optional_amount(payout.amount, None)}</td>
                                        <td>
                                            <div class="flex flex-col">
                                                <span>{or_dash(payout.bank_name.as_deref())}</span>
                                                <span class="text-xs text-base-content/60">{or_dash(payout.account_no.as_deref())}</span>
                                            </div>
                                        </td>
                                        <td>{format_date(payout.created_at.as_ref())}</td>
                                        <td><StatusBadge status={Some(AttrValue::from(payout.status.clone()))} /></td>
                                        <td>{action_buttons(payout, &modal)}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                }
                <Pagination
                    page_info={result.page_info.clone()}
                    shown={result.items.len()}
                    loading={view.is_loading()}
                    on_next={on_load_more}
                />
            </>
        }
    } else {
        html! { <Loading text="Loading payouts..." /> }
    };

    let dialog = {
        let on_close = {
            let modal = modal.clone();
            Callback::from(move |_| modal.close())
        };
        let on_submit = {
            let modal = modal.clone();
            let list = list.clone();
            Callback::from(move |draft: ProcessDraft| {
                modal.submit(draft, &list, toasts.clone(), PROCESSED_MESSAGE)
            })
        };
        let open = match modal.view().state() {
            ModalState::Closed => None,
            ModalState::Open { selected, draft, error } => {
                Some((selected.clone(), draft.clone(), error.clone(), false))
            }
            ModalState::Submitting { selected, draft } => {
                Some((selected.clone(), draft.clone(), None, true))
            }
        };
        open.map(|(payout, draft, error, submitting)| {
            let key = payout.id.clone();
            html! {
                <ProcessModal
                    key={key}
                    {payout}
                    {draft}
                    {submitting}
                    {error}
                    {on_submit}
                    {on_close}
                />
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                {toolbar}
                {body}
            </div>
            {dialog}
        </div>
    }
}
