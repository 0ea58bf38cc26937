use ::common::{format_amount, format_date, format_datetime, or_dash};
use controller::DetailState;
use model::Booking;
use yew::prelude::*;

use crate::common::error::{ErrorDisplay, NotFound};
use crate::common::loading::Loading;
use crate::components::common::status_badge::StatusBadge;
use crate::hooks::{use_detail, use_repositories};

#[derive(Properties, PartialEq)]
pub struct BookingDetailProps {
    pub id: String,
}

fn field(label: &str, value: Html) -> Html {
    html! {
        <div class="flex justify-between py-2 border-b border-base-200">
            <span class="text-base-content/70">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}

fn render(booking: &Booking) -> Html {
    let property = booking.property.clone().unwrap_or_default();
    let payment = booking.payment.clone().unwrap_or_default();
    let amount = payment
        .amount
        .map(|amount| format_amount(amount, payment.currency.as_deref()));

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{format!("Booking {}", booking.id)}</h2>
                    {field("Status", html! { <StatusBadge status={booking.status.clone().map(AttrValue::from)} /> })}
                    {field("Check-in", html! { {format_date(booking.start_date.as_ref())} })}
                    {field("Check-out", html! { {format_date(booking.end_date.as_ref())} })}
                    {field("Created", html! { {format_datetime(booking.created_at.as_ref())} })}
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Property"}</h2>
                    {field("Title", html! { {or_dash(property.title.as_deref())} })}
                    {field("City", html! { {or_dash(property.city.as_deref())} })}
                    <h2 class="card-title mt-4">{"Payment"}</h2>
                    {field("Invoice", html! { {or_dash(payment.invoice_id.as_deref())} })}
                    {field("Amount", html! { {or_dash(amount.as_deref())} })}
                    {field("Status", html! { <StatusBadge status={payment.status.clone().map(AttrValue::from)} /> })}
                </div>
            </div>
        </div>
    }
}

#[function_component(BookingDetail)]
pub fn booking_detail(props: &BookingDetailProps) -> Html {
    let repos = use_repositories();
    let bookings = repos.bookings;
    let (state, reload) = use_detail(props.id.clone(), move |id: String| {
        let bookings = bookings.clone();
        async move { bookings.get(&id).await }
    });

    match state {
        DetailState::Loading => html! { <Loading text="Loading booking..." /> },
        DetailState::Loaded(booking) => render(&booking),
        DetailState::Errored { not_found: true, .. } => {
            html! { <NotFound message="Booking not found." /> }
        }
        DetailState::Errored { message, .. } => {
            html! { <ErrorDisplay {message} on_retry={Some(reload)} /> }
        }
    }
}
