use anyhow::Result;
use common::{or_dash, truncate};
use model::{ListQuery, Property, VerifyPropertyRequest};
use tracing::{debug, error, info, trace};

use crate::cli::{AppContext, PropertyCommand};
use crate::output::{self, Format};

pub async fn run(context: &AppContext, command: PropertyCommand) -> Result<String> {
    match command {
        PropertyCommand::List { page, limit, status, search } => {
            let mut query = ListQuery::paged(page, context.limit(limit));
            query.set_filter("status", status.map(|s| s.to_string()));
            query.set_search(search);
            list(context, &query).await
        }
        PropertyCommand::Verify { id, approve, reason, .. } => {
            // validated before anything is sent
            let request = VerifyPropertyRequest::new(approve, &reason)?;
            verify(context, &id, &request).await
        }
    }
}

async fn list(context: &AppContext, query: &ListQuery) -> Result<String> {
    trace!("Listing properties with {:?}", query.to_params());
    let page = match context.repos.properties.list(query).await {
        Ok(page) => {
            debug!("Fetched {} properties", page.items.len());
            page
        }
        Err(e) => {
            error!("Failed to list properties: {}", e);
            return Err(e.into());
        }
    };
    output::list(context.format, &page, line)
}

async fn verify(context: &AppContext, id: &str, request: &VerifyPropertyRequest) -> Result<String> {
    let ack = match context.repos.properties.verify(id, request).await {
        Ok(ack) => ack,
        Err(e) => {
            error!("Failed to verify property {}: {}", id, e);
            return Err(e.into());
        }
    };
    info!("Property {} verification updated", id);

    match context.format {
        Format::Json => output::json(&ack),
        Format::Text => {
            let outcome = if request.is_verified() { "approved" } else { "rejected" };
            Ok(format!("Property verification updated: {} {}", id, outcome))
        }
    }
}

fn line(property: &Property) -> String {
    format!(
        "{}  {:<9} {}  {}  landlord: {}",
        property.id,
        property.display_status(),
        truncate(&or_dash(property.title.as_deref()), 40),
        or_dash(property.city.as_deref()),
        or_dash(property.landlord_label()),
    )
}
