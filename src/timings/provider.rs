use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::warn;

use super::types::CalculationMethod;
use crate::core::schedule::PrayerSchedule;

/// Errors that can occur while fetching a day's timings.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response. Not retryable.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Everything a provider needs to compute one day's schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingsQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub method: CalculationMethod,
}

#[async_trait]
pub trait TimingsProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the prayer schedule for the given location and date.
    async fn fetch(&self, query: &TimingsQuery) -> Result<PrayerSchedule, ProviderError>;
}

/// Fetches a schedule, collapsing every failure to the all-unknown
/// schedule. This is the only way the rest of the app calls a provider:
/// the selection core and the UI never see a provider error, they see
/// a schedule full of sentinels and render `--:--` accordingly.
pub async fn fetch_or_unknown(
    provider: &dyn TimingsProvider,
    query: &TimingsQuery,
) -> PrayerSchedule {
    match provider.fetch(query).await {
        Ok(schedule) => schedule,
        Err(e) => {
            warn!(
                "{} fetch failed for {} ({}, {}): {e}",
                provider.name(),
                query.date,
                query.latitude,
                query.longitude
            );
            PrayerSchedule::unknown()
        }
    }
}
