use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::schedule::{PrayerSchedule, PrayerTime};

/// Aladhan calculation method, selecting the convention (Fajr/Isha sun
/// angles) used to compute the times. The discriminants are the numeric
/// ids the API expects in its `method` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// Shia Ithna-Ashari (Jafari)
    Jafari = 0,
    /// University of Islamic Sciences, Karachi
    Karachi = 1,
    /// Islamic Society of North America
    #[default]
    Isna = 2,
    /// Muslim World League
    Mwl = 3,
    /// Umm Al-Qura University, Makkah
    Makkah = 4,
    /// Egyptian General Authority of Survey
    Egypt = 5,
}

impl CalculationMethod {
    /// Numeric id for the API's `method` parameter.
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

// ============================================================================
// Aladhan Response Types
// ============================================================================

/// Top-level timings response: `{ "data": { "timings": { ... } } }`.
/// The API also returns `code`, `status`, date metadata and more, all
/// of which we ignore.
#[derive(Deserialize, Debug)]
pub(crate) struct TimingsResponse {
    pub data: TimingsData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TimingsData {
    pub timings: Timings,
}

/// The `data.timings` object. Keys beyond the six we display (Sunset,
/// Imsak, Midnight, ...) are ignored; missing keys become sentinels.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct Timings {
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
}

impl Timings {
    /// Converts raw timing strings into a schedule. Values sometimes
    /// carry a timezone suffix (`"05:02 (CST)"`); only the leading token
    /// is parsed. Anything unparseable becomes `Unknown`.
    pub fn into_schedule(self) -> PrayerSchedule {
        PrayerSchedule {
            fajr: parse_timing(self.fajr.as_deref()),
            sunrise: parse_timing(self.sunrise.as_deref()),
            dhuhr: parse_timing(self.dhuhr.as_deref()),
            asr: parse_timing(self.asr.as_deref()),
            maghrib: parse_timing(self.maghrib.as_deref()),
            isha: parse_timing(self.isha.as_deref()),
        }
    }
}

fn parse_timing(raw: Option<&str>) -> PrayerTime {
    match raw.and_then(|s| s.split_whitespace().next()) {
        Some(token) => PrayerTime::parse(token),
        None => PrayerTime::Unknown,
    }
}
