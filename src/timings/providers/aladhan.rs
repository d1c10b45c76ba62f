//! Aladhan API provider.
//!
//! One GET per (location, date):
//! `GET {base}/v1/timings/{YYYY-MM-DD}?latitude=..&longitude=..&method=N`
//!
//! The endpoint is keyless and returns JSON with the times under
//! `data.timings`. The astronomy is entirely the API's job; this module
//! only moves strings.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::schedule::PrayerSchedule;
use crate::timings::provider::{ProviderError, TimingsProvider, TimingsQuery};
use crate::timings::types::TimingsResponse;

pub const DEFAULT_ALADHAN_BASE_URL: &str = "http://api.aladhan.com";

/// Seconds before an in-flight request is abandoned. A stuck request
/// must not wedge the refresh loop.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Prayer-times provider backed by api.aladhan.com.
pub struct AladhanProvider {
    base_url: String,
    client: reqwest::Client,
}

impl AladhanProvider {
    /// Creates a new Aladhan provider.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public API;
    ///   tests point this at a mock server)
    pub fn new(base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {e}");
                reqwest::Client::new()
            });
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_ALADHAN_BASE_URL.to_string()),
            client,
        }
    }
}

#[async_trait]
impl TimingsProvider for AladhanProvider {
    fn name(&self) -> &str {
        "aladhan"
    }

    async fn fetch(&self, query: &TimingsQuery) -> Result<PrayerSchedule, ProviderError> {
        let url = format!(
            "{}/v1/timings/{}",
            self.base_url,
            query.date.format("%Y-%m-%d")
        );
        info!(
            "Aladhan request: {} lat={} lng={} method={}",
            url,
            query.latitude,
            query.longitude,
            query.method.id()
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", query.latitude.to_string()),
                ("longitude", query.longitude.to_string()),
                ("method", query.method.id().to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Aladhan response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Aladhan API error: {} - {}", status, message);
            return Err(ProviderError::Api { status, message });
        }

        let body: TimingsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(body.data.timings.into_schedule())
    }
}
