use ::common::{format_date, or_dash};
use controller::{load_booking_preview, DetailState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_detail, use_repositories};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BookingPreviewProps {
    pub booking_id: String,
    pub on_close: Callback<()>,
}

/// Quick look at the booking a dispute refers to.
#[function_component(BookingPreview)]
pub fn booking_preview(props: &BookingPreviewProps) -> Html {
    let repos = use_repositories();
    let (state, reload) = use_detail(props.booking_id.clone(), move |id: String| {
        let repos = repos.clone();
        async move { load_booking_preview(&repos.bookings, &id).await }
    });

    let body = match state {
        DetailState::Loading => html! { <span class="loading loading-spinner loading-sm"></span> },
        DetailState::Loaded(None) => html! { <p class="text-base-content/60">{"No booking match found"}</p> },
        DetailState::Loaded(Some(booking)) => html! {
            <div class="flex flex-col gap-1 text-sm">
                <span class="font-medium">{or_dash(booking.property_title())}</span>
                <span>{format!(
                    "{} - {}",
                    format_date(booking.start_date.as_ref()),
                    format_date(booking.end_date.as_ref())
                )}</span>
                <span>{format!(
                    "{} / payment {}",
                    or_dash(booking.status.as_deref()),
                    or_dash(booking.payment_status())
                )}</span>
                <Link<Route> to={Route::BookingDetail { id: booking.id.clone() }} classes="link link-primary">
                    {"Open booking"}
                </Link<Route>>
            </div>
        },
        DetailState::Errored { message, .. } => html! {
            <div class="flex items-center gap-2 text-error text-sm">
                <span>{message}</span>
                <button class="btn btn-ghost btn-xs" onclick={reload.reform(|_: MouseEvent| ())}>{"Retry"}</button>
            </div>
        },
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="alert bg-base-200 items-start">
            <i class="fas fa-receipt mt-1"></i>
            <div class="flex-1">
                <h3 class="font-semibold">{format!("Booking {}", props.booking_id)}</h3>
                {body}
            </div>
            <button class="btn btn-ghost btn-xs btn-circle" onclick={on_close}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
