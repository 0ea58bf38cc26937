use ::common::{format_date, format_datetime, humanize, or_dash};
use controller::{load_enriched_dispute, DetailState, EnrichedDispute};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::error::{ErrorDisplay, NotFound};
use crate::common::loading::Loading;
use crate::components::common::status_badge::StatusBadge;
use crate::hooks::{use_detail, use_repositories};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DisputeDetailProps {
    pub id: String,
}

fn row(label: &str, value: String) -> Html {
    html! {
        <tr>
            <th class="w-40 text-base-content/70">{label}</th>
            <td>{value}</td>
        </tr>
    }
}

fn render(enriched: &EnrichedDispute) -> Html {
    let dispute = &enriched.dispute;

    let booking = match &enriched.booking {
        Some(booking) => html! {
            <table class="table table-sm">
                <tbody>
                    <tr>
                        <th class="w-40 text-base-content/70">{"Booking"}</th>
                        <td>
                            <Link<Route> to={Route::BookingDetail { id: booking.id.clone() }} classes="link link-primary">
                                {&booking.id}
                            </Link<Route>>
                        </td>
                    </tr>
                    {row("Property", or_dash(booking.property_title()))}
                    {row("Dates", format!(
                        "{} - {}",
                        format_date(booking.start_date.as_ref()),
                        format_date(booking.end_date.as_ref())
                    ))}
                    {row("Booking status", or_dash(booking.status.as_deref()))}
                    {row("Payment", or_dash(booking.payment_status()))}
                </tbody>
            </table>
        },
        None => html! {
            <div class="alert">
                <i class="fas fa-unlink"></i>
                <span>{"No booking match found"}</span>
            </div>
        },
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex justify-between items-center">
                        <h2 class="card-title">{format!("Dispute {}", dispute.id)}</h2>
                        <StatusBadge status={dispute.status.clone().map(AttrValue::from)} />
                    </div>
                    <table class="table table-sm">
                        <tbody>
                            {row("Reason", or_dash(dispute.reason.as_deref()))}
                            {row("Description", or_dash(dispute.description.as_deref()))}
                            {row("Raised by", or_dash(dispute.initiator_label()))}
                            {row("Created", format_datetime(dispute.created_at.as_ref()))}
                            {row("Resolution", dispute.resolution.as_deref().map(humanize).unwrap_or_else(|| "-".into()))}
                            {row("Admin notes", or_dash(dispute.admin_notes.as_deref()))}
                            {row("Resolved", format_datetime(dispute.resolved_at.as_ref()))}
                        </tbody>
                    </table>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Linked booking"}</h2>
                    {booking}
                </div>
            </div>
            <div class="card bg-base-100 shadow lg:col-span-2">
                <div class="card-body">
                    <h2 class="card-title">{"Raw data"}</h2>
                    <pre class="bg-base-200 rounded p-4 text-xs overflow-x-auto">{enriched.to_pretty_json()}</pre>
                </div>
            </div>
        </div>
    }
}

#[function_component(DisputeDetail)]
pub fn dispute_detail(props: &DisputeDetailProps) -> Html {
    let repos = use_repositories();
    let (state, reload) = use_detail(props.id.clone(), move |id: String| {
        let repos = repos.clone();
        async move { load_enriched_dispute(&repos.disputes, &repos.bookings, &id).await }
    });

    match state {
        DetailState::Loading => html! { <Loading text="Loading dispute..." /> },
        DetailState::Loaded(enriched) => render(&enriched),
        DetailState::Errored { not_found: true, message } => html! { <NotFound {message} /> },
        DetailState::Errored { message, .. } => {
            html! { <ErrorDisplay {message} on_retry={Some(reload)} /> }
        }
    }
}
