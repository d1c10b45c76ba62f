//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::config::ResolvedConfig;
use crate::core::schedule::{PrayerSchedule, PrayerTime};
use crate::core::state::App;
use crate::timings::{CalculationMethod, ProviderError, TimingsProvider, TimingsQuery};

/// A provider that returns a canned schedule, for tests with no network.
pub struct StaticProvider(pub PrayerSchedule);

#[async_trait]
impl TimingsProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _query: &TimingsQuery) -> Result<PrayerSchedule, ProviderError> {
        Ok(self.0)
    }
}

/// A provider that always fails, for exercising the unknown-schedule path.
pub struct FailingProvider;

#[async_trait]
impl TimingsProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _query: &TimingsQuery) -> Result<PrayerSchedule, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// The worked example schedule used throughout the core tests.
pub fn test_schedule() -> PrayerSchedule {
    PrayerSchedule {
        fajr: PrayerTime::parse("05:10"),
        sunrise: PrayerTime::parse("06:30"),
        dhuhr: PrayerTime::parse("12:15"),
        asr: PrayerTime::parse("15:45"),
        maghrib: PrayerTime::parse("18:20"),
        isha: PrayerTime::parse("19:50"),
    }
}

/// Creates a test App pinned to the default location and a fixed date.
pub fn test_app() -> App {
    let config = ResolvedConfig {
        province: "Jiangsu (江苏)".to_string(),
        city: "Yangzhou (扬州)".to_string(),
        method: CalculationMethod::Isna,
        base_url: "http://unused.invalid".to_string(),
    };
    App::new(&config, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}
