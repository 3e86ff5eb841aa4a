use clap::{Parser, Subcommand};

use crate::render;
use wardrobe_core::config::Config;
use wardrobe_core::model::{ForecastRequest, ForecastResult};
use wardrobe_core::provider::{ProviderId, default_provider_from_config, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wardrobe", version, about = "Weather & wardrobe CLI")]
pub struct Cli {
    /// Provider override, e.g. "weatherapi" or "openweather".
    #[arg(long, global = true)]
    pub provider: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "weatherapi" or "openweather".
        provider: String,
    },

    /// Show current conditions, upcoming hours and a clothing suggestion.
    Now {
        /// City or location name.
        city: String,
    },

    /// Show the multi-day outlook with per-day clothing suggestions.
    Forecast {
        /// City or location name.
        city: String,

        /// Number of forecast days to request.
        #[arg(long, default_value_t = 7)]
        days: u8,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Now { city } => {
                let result = fetch(&city, 1, self.provider.as_deref()).await?;
                render::now_screen(&result, chrono::Local::now().naive_local());
                Ok(())
            }
            Command::Forecast { city, days } => {
                let result = fetch(&city, days, self.provider.as_deref()).await?;
                render::forecast_screen(&result);
                Ok(())
            }
        }
    }
}

async fn fetch(
    city: &str,
    days: u8,
    provider_override: Option<&str>,
) -> anyhow::Result<ForecastResult> {
    let config = Config::load()?;

    let provider = match provider_override {
        Some(name) => provider_from_config(ProviderId::try_from(name)?, &config)?,
        None => default_provider_from_config(&config)?,
    };

    tracing::debug!(%city, days, "fetching forecast");
    provider.fetch(&ForecastRequest::new(city, days)).await
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;

    let api_key = inquire::Password::new("API key:")
        .without_confirmation()
        .prompt()?;

    let mut config = Config::load()?;
    config.upsert_provider_api_key(id, api_key);
    config.save()?;

    println!(
        "Saved credentials for provider '{id}' to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
