use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::model::{ForecastRequest, ForecastResult};
use crate::provider::truncate_body;
use crate::shape;

use super::ForecastProvider;

/// OpenWeather current-conditions source. Reports metric units, which the
/// shaping adapter normalizes, and carries no forecast days.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch(&self, request: &ForecastRequest) -> Result<ForecastResult> {
        let url = "https://api.openweathermap.org/data/2.5/weather";

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", request.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        shape::openweather::shape_current(&body).context("Failed to shape OpenWeather current JSON")
    }
}
