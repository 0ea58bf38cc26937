use anyhow::Result;
use common::{format_date, format_optional_amount, or_dash};
use model::{Booking, ListQuery};
use tracing::{debug, error, info, trace};

use crate::cli::{AppContext, BookingCommand};
use crate::output::{self, Format};

pub async fn run(context: &AppContext, command: BookingCommand) -> Result<String> {
    match command {
        BookingCommand::List { limit, cursor, status, search } => {
            let mut query = ListQuery::cursor(cursor, context.limit(limit));
            query.set_filter("status", status);
            query.set_search(search);
            list(context, &query).await
        }
        BookingCommand::Show { id } => show(context, &id).await,
    }
}

async fn list(context: &AppContext, query: &ListQuery) -> Result<String> {
    trace!("Listing bookings with {:?}", query.to_params());
    let page = match context.repos.bookings.list(query).await {
        Ok(page) => {
            debug!("Fetched {} bookings", page.items.len());
            page
        }
        Err(e) => {
            error!("Failed to list bookings: {}", e);
            return Err(e.into());
        }
    };
    output::list(context.format, &page, line)
}

async fn show(context: &AppContext, id: &str) -> Result<String> {
    let booking = context.repos.bookings.get(id).await?;
    info!("Fetched booking {}", booking.id);
    match context.format {
        Format::Json => output::json(&booking),
        Format::Text => Ok(detail(&booking)),
    }
}

fn line(booking: &Booking) -> String {
    format!(
        "{}  {:<12} {}  {} -> {}  payment: {}",
        booking.id,
        or_dash(booking.status.as_deref()),
        or_dash(booking.property_title()),
        format_date(booking.start_date.as_ref()),
        format_date(booking.end_date.as_ref()),
        or_dash(booking.payment_status()),
    )
}

fn detail(booking: &Booking) -> String {
    let property = booking.property.clone().unwrap_or_default();
    let payment = booking.payment.clone().unwrap_or_default();
    let amount = format_optional_amount(payment.amount, payment.currency.as_deref());

    [
        format!("Booking   {}", booking.id),
        format!("Status    {}", or_dash(booking.status.as_deref())),
        format!("Check-in  {}", format_date(booking.start_date.as_ref())),
        format!("Check-out {}", format_date(booking.end_date.as_ref())),
        format!(
            "Property  {} ({})",
            or_dash(property.title.as_deref()),
            or_dash(property.city.as_deref())
        ),
        format!(
            "Payment   {} {} [{}]",
            or_dash(payment.invoice_id.as_deref()),
            amount,
            or_dash(payment.status.as_deref())
        ),
    ]
    .join("\n")
}
