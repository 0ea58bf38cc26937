use ::common::{format_date, or_dash, truncate};
use client::DisputeRepository;
use controller::ModalState;
use model::{Dispute, ResolveDraft};
use yew::prelude::*;
use yew_router::prelude::*;

use super::booking_preview::BookingPreview;
use super::resolve_modal::ResolveModal;
use crate::common::error::ErrorDisplay;
use crate::common::loading::{Loading, RefreshingBar};
use crate::common::toast::ToastContext;
use crate::components::common::pagination::Pagination;
use crate::components::common::status_badge::StatusBadge;
use crate::hooks::{use_action_modal, use_list, use_repositories};
use crate::Route;

const RESOLVED_MESSAGE: &str = "Dispute resolved successfully";

fn reason_cell(dispute: &Dispute) -> Html {
    html! {
        <div class="flex flex-col max-w-xs">
            <span class="font-medium">{or_dash(dispute.reason.as_deref())}</span>
            if let Some(description) = &dispute.description {
                <span class="text-xs text-base-content/60">{truncate(description, 80)}</span>
            }
        </div>
    }
}

#[function_component(Disputes)]
pub fn disputes() -> Html {
    let repos = use_repositories();
    let toasts = use_context::<ToastContext>();
    let list = use_list(repos.disputes.clone(), DisputeRepository::default_query());
    let modal = use_action_modal::<Dispute, DisputeRepository>(repos.disputes);
    let preview = use_state(|| None::<String>);

    let view = list.view();

    if let Some(message) = view.error() {
        let retry = {
            let list = list.clone();
            Callback::from(move |_| list.refresh())
        };
        return html! { <ErrorDisplay message={message.to_string()} on_retry={Some(retry)} /> };
    }

    let Some(result) = view.result() else {
        return html! { <Loading text="Loading disputes..." /> };
    };

    let booking_button = |dispute: &Dispute| -> Html {
        let Some(booking_id) = dispute.booking_id.clone() else {
            return Html::default();
        };
        let onclick = {
            let preview = preview.clone();
            Callback::from(move |_: MouseEvent| preview.set(Some(booking_id.clone())))
        };
        html! { <button class="btn btn-ghost btn-xs" {onclick}>{"Booking"}</button> }
    };

    let action = |dispute: &Dispute| -> Html {
        if dispute.is_resolved() {
            return html! {
                <Link<Route> to={Route::DisputeDetail { id: dispute.id.clone() }} classes="btn btn-ghost btn-xs">
                    {"View"}
                </Link<Route>>
            };
        }
        let onclick = {
            let modal = modal.clone();
            let dispute = dispute.clone();
            Callback::from(move |_: MouseEvent| modal.open(dispute.clone()))
        };
        html! { <button class="btn btn-primary btn-xs" {onclick}>{"Resolve"}</button> }
    };

    let close_preview = {
        let preview = preview.clone();
        Callback::from(move |_: ()| preview.set(None))
    };

    let on_load_more = {
        let list = list.clone();
        Callback::from(move |_| list.load_more())
    };

    let dialog = {
        let on_close = {
            let modal = modal.clone();
            Callback::from(move |_| modal.close())
        };
        let on_submit = {
            let modal = modal.clone();
            let list = list.clone();
            Callback::from(move |draft: ResolveDraft| {
                modal.submit(draft, &list, toasts.clone(), RESOLVED_MESSAGE)
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
        open.map(|(dispute, draft, error, submitting)| {
            let key = dispute.id.clone();
            html! {
                <ResolveModal
                    key={key}
                    {dispute}
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
                if view.is_loading() {
                    <RefreshingBar />
                }
                if let Some(booking_id) = (*preview).clone() {
                    <BookingPreview
                        key={booking_id.clone()}
                        booking_id={booking_id.clone()}
                        on_close={close_preview.clone()}
                    />
                }
                if result.items.is_empty() {
                    <p class="text-center text-base-content/60 py-8">{"No disputes found."}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>{"Reason"}</th>
                                    <th>{"Property"}</th>
                                    <th>{"Raised by"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Created"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for result.items.iter().map(|dispute| html! {
                                    <tr key={dispute.id.clone()}>
                                        <td>{reason_cell(dispute)}</td>
                                        <td>{or_dash(dispute.property_title())}</td>
                                        <td>{or_dash(dispute.initiator_label())}</td>
                                        <td><StatusBadge status={dispute.status.clone().map(AttrValue::from)} /></td>
                                        <td>{format_date(dispute.created_at.as_ref())}</td>
                                        <td class="flex gap-1">{booking_button(dispute)}{action(dispute)}</td>
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
            </div>
            {dialog}
        </div>
    }
}
