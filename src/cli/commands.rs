pub mod bookings;
pub mod disputes;
pub mod payouts;
pub mod properties;
pub mod wallet;

use anyhow::Result;

use super::{AppContext, Commands};

/// Runs one command and returns what should be printed.
pub async fn execute(context: &AppContext, command: Commands) -> Result<String> {
    match command {
        Commands::Bookings { command } => bookings::run(context, command).await,
        Commands::Properties { command } => properties::run(context, command).await,
        Commands::Disputes { command } => disputes::run(context, command).await,
        Commands::Payouts { command } => payouts::run(context, command).await,
        Commands::Wallet => wallet::run(context).await,
    }
}
