use anyhow::Result;
use common::{format_datetime, format_optional_amount, or_dash};
use tracing::{debug, error};

use crate::cli::AppContext;
use crate::output::{self, Format};

pub async fn run(context: &AppContext) -> Result<String> {
    let wallet = match context.repos.payouts.wallet().await {
        Ok(wallet) => {
            debug!("Fetched wallet {} with {} transactions", wallet.id, wallet.transactions.len());
            wallet
        }
        Err(e) => {
            error!("Failed to fetch wallet: {}", e);
            return Err(e.into());
        }
    };

    if context.format == Format::Json {
        return output::json(&wallet);
    }

    let currency = wallet.currency.as_deref();
    let mut lines = vec![format!("Balance: {}", format_optional_amount(wallet.balance, currency))];
    if wallet.transactions.is_empty() {
        lines.push("No transactions.".to_string());
    }
    for tx in &wallet.transactions {
        lines.push(format!(
            "{}  {:<6} {:>16}  {}  {}",
            format_datetime(tx.created_at.as_ref()),
            tx.kind,
            format_optional_amount(tx.amount, currency),
            or_dash(tx.category.as_deref()),
            or_dash(tx.description.as_deref()),
        ));
    }
    Ok(lines.join("\n"))
}
