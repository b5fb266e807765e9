//! Beds24 JSON API client.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;

use super::models::StayRequest;

/// Beds24 lookup failure. Never reaches the booking widget; the service
/// swaps it for a fallback quote.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Beds24 request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected Beds24 response: {0}")]
    UnexpectedResponse(String),
}

/// Body of `POST /getAvailabilities`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetAvailabilitiesRequest<'a> {
    check_in: String,
    last_night: String,
    prop_id: &'a str,
    num_adult: u32,
}

#[derive(Clone)]
pub struct Beds24Client {
    client: Client,
    base_url: String,
    prop_id: String,
}

impl Beds24Client {
    pub fn new(
        base_url: impl Into<String>,
        prop_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AvailabilityError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            prop_id: prop_id.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AvailabilityError> {
        Self::new(
            config.beds24_api_url.clone(),
            config.beds24_prop_id.clone(),
            config.beds24_timeout,
        )
    }

    /// Public booking page for the property starting at `check_in` (YYYYMMDD)
    pub fn booking_url(&self, check_in: &str) -> String {
        format!(
            "https://beds24.com/booking2.php?propid={}&checkin={}",
            self.prop_id, check_in
        )
    }

    /// Fetch raw room availability for a stay.
    ///
    /// Returns the response object as-is: a few echoed request keys plus
    /// one entry per room id.
    pub async fn get_availabilities(&self, stay: &StayRequest) -> Result<Value, AvailabilityError> {
        let url = format!("{}/getAvailabilities", self.base_url);
        let body = GetAvailabilitiesRequest {
            check_in: stay.check_in.format("%Y%m%d").to_string(),
            last_night: stay.check_out.format("%Y%m%d").to_string(),
            prop_id: &self.prop_id,
            num_adult: stay.guests,
        };

        tracing::debug!("Beds24 getAvailabilities for {}..{}", body.check_in, body.last_night);

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AvailabilityError::UnexpectedResponse(format!("HTTP {}", status)));
        }

        let data: Value = response.json().await?;
        if !data.is_object() {
            return Err(AvailabilityError::UnexpectedResponse(
                "expected a JSON object".to_string(),
            ));
        }

        Ok(data)
    }
}
