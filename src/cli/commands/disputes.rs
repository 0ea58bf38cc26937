use anyhow::Result;
use client::DisputeRepository;
use common::{format_date, format_datetime, humanize, or_dash, truncate};
use controller::{EnrichedDispute, load_enriched_dispute};
use model::{Dispute, ResolveDisputeRequest};
use tracing::{debug, error, info};

use crate::cli::{AppContext, DisputeCommand};
use crate::output::{self, Format};

pub async fn run(context: &AppContext, command: DisputeCommand) -> Result<String> {
    match command {
        DisputeCommand::List => list(context).await,
        DisputeCommand::Show { id } => show(context, &id).await,
        DisputeCommand::Resolve { id, resolution, notes } => {
            let request = ResolveDisputeRequest::new(resolution, &notes)?;
            resolve(context, &id, &request).await
        }
    }
}

async fn list(context: &AppContext) -> Result<String> {
    let page = match context.repos.disputes.list(&DisputeRepository::default_query()).await {
        Ok(page) => {
            debug!("Fetched {} disputes", page.items.len());
            page
        }
        Err(e) => {
            error!("Failed to list disputes: {}", e);
            return Err(e.into());
        }
    };
    output::list(context.format, &page, line)
}

async fn show(context: &AppContext, id: &str) -> Result<String> {
    let enriched = load_enriched_dispute(&context.repos.disputes, &context.repos.bookings, id).await?;
    match context.format {
        Format::Json => Ok(enriched.to_pretty_json()),
        Format::Text => Ok(detail(&enriched)),
    }
}

async fn resolve(context: &AppContext, id: &str, request: &ResolveDisputeRequest) -> Result<String> {
    let ack = match context.repos.disputes.resolve(id, request).await {
        Ok(ack) => ack,
        Err(e) => {
            error!("Failed to resolve dispute {}: {}", id, e);
            return Err(e.into());
        }
    };
    info!("Dispute {} resolved as {}", id, request.resolution());

    match context.format {
        Format::Json => output::json(&ack),
        Format::Text => Ok(format!(
            "Dispute resolved successfully: {} ({})",
            id,
            request.resolution()
        )),
    }
}

fn line(dispute: &Dispute) -> String {
    format!(
        "{}  {:<9} {}  {}  by {}  {}",
        dispute.id,
        or_dash(dispute.status.as_deref()),
        truncate(&or_dash(dispute.reason.as_deref().or(dispute.description.as_deref())), 40),
        or_dash(dispute.property_title()),
        or_dash(dispute.initiator_label()),
        format_date(dispute.created_at.as_ref()),
    )
}

fn detail(enriched: &EnrichedDispute) -> String {
    let dispute = &enriched.dispute;
    let mut lines = vec![
        format!("Dispute     {}", dispute.id),
        format!("Status      {}", or_dash(dispute.status.as_deref())),
        format!("Reason      {}", or_dash(dispute.reason.as_deref())),
        format!("Description {}", or_dash(dispute.description.as_deref())),
        format!("Initiator   {}", or_dash(dispute.initiator_label())),
        format!("Created     {}", format_datetime(dispute.created_at.as_ref())),
    ];
    if dispute.is_resolved() {
        let resolution = dispute.resolution.as_deref().map(humanize);
        lines.push(format!("Resolution  {}", or_dash(resolution.as_deref())));
        lines.push(format!("Notes       {}", or_dash(dispute.admin_notes.as_deref())));
        lines.push(format!("Resolved    {}", format_datetime(dispute.resolved_at.as_ref())));
    }
    match &enriched.booking {
        Some(booking) => lines.push(format!(
            "Booking     {} {} ({} -> {})",
            booking.id,
            or_dash(booking.status.as_deref()),
            format_date(booking.start_date.as_ref()),
            format_date(booking.end_date.as_ref()),
        )),
        None => lines.push("Booking     No booking match found".to_string()),
    }
    lines.join("\n")
}
