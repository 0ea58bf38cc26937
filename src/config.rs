use anyhow::{Context, Result};
use config::{Config, Environment, File};
use model::DEFAULT_LIMIT;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api/v1";
const DEFAULT_TIMEOUT_MS: i64 = 30_000;

/// Runtime settings of the CLI.
///
/// Layered from defaults, an optional `rentadmin.toml` in the working
/// directory and `RENTADMIN_*` environment variables (a `.env` file is loaded
/// first). Command-line flags override the result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub token: Option<String>,
    pub request_timeout_ms: u64,
    pub default_limit: u32,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::build(Some("rentadmin"), Environment::with_prefix("RENTADMIN"))
    }

    pub fn build(file: Option<&str>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_ms", DEFAULT_TIMEOUT_MS)?
            .set_default("default_limit", i64::from(DEFAULT_LIMIT))?;

        if let Some(name) = file {
            builder = builder.add_source(File::with_name(name).required(false));
        }

        let settings: Settings = builder
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(settings.normalized())
    }

    /// Applies `--api-url` and `--token`.
    pub fn with_overrides(mut self, api_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(token) = token {
            self.token = Some(token);
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.token = self.token.filter(|t| !t.trim().is_empty());
        self.default_limit = self.default_limit.max(1);
        self
    }
}
