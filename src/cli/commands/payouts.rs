use anyhow::Result;
use common::{format_date, format_optional_amount, or_dash};
use model::{ListQuery, Payout, ProcessPayoutRequest};
use tracing::{debug, error, info, trace};

use crate::cli::{AppContext, PayoutCommand};
use crate::output::{self, Format};

pub async fn run(context: &AppContext, command: PayoutCommand) -> Result<String> {
    match command {
        PayoutCommand::List { limit, cursor, status } => {
            let mut query = ListQuery::cursor(cursor, context.limit(limit));
            query.set_filter("status", status.map(|s| s.to_string()));
            list(context, &query).await
        }
        PayoutCommand::Process { id, action, notes } => {
            let request = ProcessPayoutRequest::new(action, &notes);
            process(context, &id, &request).await
        }
    }
}

async fn list(context: &AppContext, query: &ListQuery) -> Result<String> {
    trace!("Listing payouts with {:?}", query.to_params());
    let page = match context.repos.payouts.list(query).await {
        Ok(page) => {
            debug!("Fetched {} payouts", page.items.len());
            page
        }
        Err(e) => {
            error!("Failed to list payouts: {}", e);
            return Err(e.into());
        }
    };
    output::list(context.format, &page, line)
}

async fn process(context: &AppContext, id: &str, request: &ProcessPayoutRequest) -> Result<String> {
    let ack = match context.repos.payouts.process(id, request).await {
        Ok(ack) => ack,
        Err(e) => {
            error!("Failed to process payout {}: {}", id, e);
            return Err(e.into());
        }
    };
    info!("Payout {} processed with {}", id, request.action());

    match context.format {
        Format::Json => output::json(&ack),
        Format::Text => Ok(format!("Payout processed: {} {}", id, request.action())),
    }
}

fn line(payout: &Payout) -> String {
    format!(
        "{}  {:<9} {:>16}  {} {} ({})  by {}  {}",
        payout.id,
        or_dash(Some(payout.status.as_str())),
        format_optional_amount(payout.amount, None),
        or_dash(payout.bank_name.as_deref()),
        or_dash(payout.account_no.as_deref()),
        or_dash(payout.account_name.as_deref()),
        or_dash(payout.requester_label()),
        format_date(payout.created_at.as_ref()),
    )
}
