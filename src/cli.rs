use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use client::{CredentialProvider, Repositories, ResourceClient, StaticToken, Transport};
use model::{PayoutAction, PayoutStatus, PropertyStatus, Resolution};
use tracing::{debug, trace};

pub mod commands;

use crate::config::Settings;
use crate::output::Format;
use crate::transport::ReqwestTransport;

#[derive(Parser, Debug)]
#[command(name = "rentadmin")]
#[command(about = "Back-office console for the rental platform's admin API")]
#[command(version)]
pub struct Cli {
    /// Base URL of the admin API, e.g. http://127.0.0.1:3000/api/v1
    #[arg(long, env = "RENTADMIN_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "RENTADMIN_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse bookings
    Bookings {
        #[command(subcommand)]
        command: BookingCommand,
    },
    /// Review and verify property listings
    Properties {
        #[command(subcommand)]
        command: PropertyCommand,
    },
    /// Inspect and resolve disputes
    Disputes {
        #[command(subcommand)]
        command: DisputeCommand,
    },
    /// Review and process payout requests
    Payouts {
        #[command(subcommand)]
        command: PayoutCommand,
    },
    /// Show the wallet balance and its transactions
    Wallet,
}

#[derive(Subcommand, Debug)]
pub enum BookingCommand {
    /// List bookings, newest first
    List {
        #[arg(long)]
        limit: Option<u32>,
        /// Cursor printed in the footer of the previous page
        #[arg(long)]
        cursor: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one booking
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommand {
    /// List properties awaiting or past verification
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        /// PENDING or VERIFIED
        #[arg(long)]
        status: Option<PropertyStatus>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Approve or reject a property listing
    #[command(group(ArgGroup::new("decision").required(true).args(["approve", "reject"])))]
    Verify {
        id: String,
        #[arg(long)]
        approve: bool,
        #[arg(long)]
        reject: bool,
        /// Required when rejecting (at least 5 characters)
        #[arg(long, default_value = "")]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DisputeCommand {
    /// List all disputes
    List,
    /// Show a dispute together with its booking
    Show { id: String },
    /// Resolve an open dispute
    Resolve {
        id: String,
        /// REFUND_TENANT, PAYOUT_LANDLORD or REJECT_DISPUTE
        #[arg(long)]
        resolution: Resolution,
        /// Admin notes (at least 5 characters)
        #[arg(long)]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PayoutCommand {
    /// List payout requests
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
        /// PENDING, COMPLETED or REJECTED
        #[arg(long)]
        status: Option<PayoutStatus>,
    },
    /// Approve or reject a pending payout
    Process {
        id: String,
        /// APPROVE or REJECT
        #[arg(long)]
        action: PayoutAction,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

/// What a command needs to talk to the API and print its result.
pub struct AppContext {
    pub repos: Repositories,
    pub format: Format,
    pub default_limit: u32,
}

impl AppContext {
    pub fn new(
        settings: &Settings,
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialProvider>,
        format: Format,
    ) -> Self {
        let client = ResourceClient::new(settings.api_base_url.clone(), transport, credentials);
        Self {
            repos: Repositories::new(client),
            format,
            default_limit: settings.default_limit,
        }
    }

    pub fn limit(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_limit).max(1)
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        trace!("Loading settings");
        let settings = Settings::load()?.with_overrides(self.api_url, self.token);
        debug!("Using API at {}", settings.api_base_url);

        let transport = ReqwestTransport::new(Duration::from_millis(settings.request_timeout_ms))?;
        let context = AppContext::new(
            &settings,
            Rc::new(transport),
            Rc::new(StaticToken::new(settings.token.clone())),
            Format::from_flag(self.json),
        );

        let rendered = commands::execute(&context, self.command).await?;
        println!("{}", rendered);
        Ok(())
    }
}
