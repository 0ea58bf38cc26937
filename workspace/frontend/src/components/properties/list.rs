use ::common::{format_amount, format_date, or_dash};
use client::PropertyRepository;
use controller::ModalState;
use model::{Property, PropertyStatus, VerifyDraft};
use yew::prelude::*;

use super::verify_modal::VerifyModal;
use crate::common::error::ErrorDisplay;
use crate::common::loading::{Loading, RefreshingBar};
use crate::common::toast::ToastContext;
use crate::components::common::pagination::Pagination;
use crate::components::common::search_box::SearchBox;
use crate::components::common::status_badge::StatusBadge;
use crate::components::common::status_filter::StatusFilter;
use crate::hooks::{use_action_modal, use_list, use_repositories};

const VERIFIED_MESSAGE: &str = "Property verification updated";

fn price(property: &Property) -> String {
    let formatted = property
        .price
        .map(|price| format_amount(price, property.currency.as_deref()));
    or_dash(formatted.as_deref())
}

#[function_component(Properties)]
pub fn properties() -> Html {
    let repos = use_repositories();
    let toasts = use_context::<ToastContext>();
    let list = use_list(repos.properties.clone(), PropertyRepository::default_query());
    let modal = use_action_modal::<Property, PropertyRepository>(repos.properties);

    let on_search = {
        let list = list.clone();
        Callback::from(move |search: Option<String>| list.set_search(search))
    };
    let on_status = {
        let list = list.clone();
        Callback::from(move |status: Option<String>| list.set_filter("status", status))
    };
    let on_prev = {
        let list = list.clone();
        Callback::from(move |_| list.prev_page())
    };
    let on_next = {
        let list = list.clone();
        Callback::from(move |_| list.next_page())
    };

    let view = list.view();
    let toolbar = html! {
        <div class="flex flex-wrap gap-4 items-center justify-between mb-4">
            <SearchBox
                value={view.query().search().map(str::to_string)}
                placeholder="Search properties"
                {on_search}
            />
            <StatusFilter
                options={PropertyStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>()}
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
                    <p class="text-center text-base-content/60 py-8">{"No properties found."}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{"City"}</th>
                                    <th>{"Landlord"}</th>
                                    <th>{"Price"}</th>
                                    <th>{"Submitted"}</th>
                                    <th>{"Status"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for result.items.iter().map(|property| {
                                    let on_verify = {
                                        let modal = modal.clone();
                                        let property = property.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            modal.open_with(property.clone(), VerifyDraft::for_property(&property))
                                        })
                                    };
                                    html! {
                                        <tr key={property.id.clone()}>
                                            <td>{or_dash(property.title.as_deref())}</td>
                                            <td>{or_dash(property.city.as_deref())}</td>
                                            <td>{or_dash(property.landlord_label())}</td>
                                            <td>{price(property)}</td>
                                            <td>{format_date(property.submitted_at.or(property.created_at).as_ref())}</td>
                                            <td><StatusBadge status={Some(AttrValue::from(property.display_status().to_string()))} /></td>
                                            <td>
                                                <button class="btn btn-primary btn-xs" onclick={on_verify}>{"Verify"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
                <Pagination
                    page_info={result.page_info.clone()}
                    shown={result.items.len()}
                    loading={view.is_loading()}
                    {on_prev}
                    {on_next}
                />
            </>
        }
    } else {
        html! { <Loading text="Loading properties..." /> }
    };

    let dialog = {
        let on_close = {
            let modal = modal.clone();
            Callback::from(move |_| modal.close())
        };
        let on_submit = {
            let modal = modal.clone();
            let list = list.clone();
            Callback::from(move |draft: VerifyDraft| {
                modal.submit(draft, &list, toasts.clone(), VERIFIED_MESSAGE)
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
        open.map(|(property, draft, error, submitting)| {
            let key = property.id.clone();
            html! {
                <VerifyModal
                    key={key}
                    {property}
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
