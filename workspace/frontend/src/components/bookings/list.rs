use ::common::{format_amount, format_date, or_dash};
use client::BookingRepository;
use model::Booking;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::{Loading, RefreshingBar};
use crate::components::common::pagination::Pagination;
use crate::components::common::status_badge::StatusBadge;
use crate::hooks::{use_list, use_repositories};
use crate::Route;

fn payment_cell(booking: &Booking) -> Html {
    let Some(payment) = &booking.payment else {
        return html! { <span class="text-base-content/50">{"-"}</span> };
    };
    let amount = payment
        .amount
        .map(|amount| format_amount(amount, payment.currency.as_deref()));
    html! {
        <div class="flex flex-col">
            <span>{or_dash(amount.as_deref())}</span>
            <span class="text-xs text-base-content/60">{or_dash(payment.status.as_deref())}</span>
        </div>
    }
}

#[function_component(Bookings)]
pub fn bookings() -> Html {
    let repos = use_repositories();
    let list = use_list(repos.bookings, BookingRepository::default_query());
    let view = list.view();

    if let Some(message) = view.error() {
        let retry = {
            let list = list.clone();
            Callback::from(move |_| list.refresh())
        };
        return html! { <ErrorDisplay message={message.to_string()} on_retry={Some(retry)} /> };
    }

    let Some(result) = view.result() else {
        return html! { <Loading text="Loading bookings..." /> };
    };

    let on_load_more = {
        let list = list.clone();
        Callback::from(move |_| list.load_more())
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                if view.is_loading() {
                    <RefreshingBar />
                }
                if result.items.is_empty() {
                    <p class="text-center text-base-content/60 py-8">{"No bookings found."}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>{"Property"}</th>
                                    <th>{"Dates"}</th>
                                    <th>{"Payment"}</th>
                                    <th>{"Status"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for result.items.iter().map(|booking| html! {
                                    <tr key={booking.id.clone()}>
                                        <td>{or_dash(booking.property_title())}</td>
                                        <td>
                                            {format!(
                                                "{} - {}",
                                                format_date(booking.start_date.as_ref()),
                                                format_date(booking.end_date.as_ref())
                                            )}
                                        </td>
                                        <td>{payment_cell(booking)}</td>
                                        <td><StatusBadge status={booking.status.clone().map(AttrValue::from)} /></td>
                                        <td>
                                            <Link<Route> to={Route::BookingDetail { id: booking.id.clone() }} classes="btn btn-ghost btn-xs">
                                                {"View"}
                                            </Link<Route>>
                                        </td>
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
        </div>
    }
}
