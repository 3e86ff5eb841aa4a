use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::model::{ForecastRequest, ForecastResult};
use crate::provider::truncate_body;
use crate::shape;

use super::ForecastProvider;

/// WeatherAPI.com `forecast.json` source: current conditions plus a
/// multi-day hourly forecast, already in Fahrenheit.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn fetch(&self, request: &ForecastRequest) -> Result<ForecastResult> {
        let url = "https://api.weatherapi.com/v1/forecast.json";
        let days = request.days.to_string();

        let res = self
            .http
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.city.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (forecast)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "WeatherAPI forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        shape::weatherapi::shape_forecast(&body)
            .context("Failed to shape WeatherAPI forecast JSON")
    }
}
