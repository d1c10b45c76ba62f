//! # Application State
//!
//! Core business state for minaret. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── province_idx: usize            // cursor into geo::PROVINCES
//! ├── city_idx: usize                // cursor into the province's cities
//! ├── date: NaiveDate                // the date being displayed
//! ├── today: NaiveDate               // for the "back to today" key
//! ├── schedule: Option<PrayerSchedule>  // None until the first fetch lands
//! ├── is_loading: bool               // a fetch is in flight
//! ├── status_message: String         // status bar text
//! └── method: CalculationMethod      // Aladhan calculation convention
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use chrono::NaiveDate;
use log::warn;

use crate::core::config::ResolvedConfig;
use crate::core::schedule::PrayerSchedule;
use crate::geo::{self, City, Province};
use crate::timings::{CalculationMethod, TimingsQuery};

pub struct App {
    pub province_idx: usize,
    pub city_idx: usize,
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub schedule: Option<PrayerSchedule>,
    pub is_loading: bool,
    pub status_message: String,
    pub method: CalculationMethod,
}

impl App {
    /// Builds the initial state from the resolved config. Unknown
    /// province or city names fall back to the first entry with a
    /// logged warning — startup never fails over a typo in the config.
    ///
    /// `today` is passed in rather than read here so the state stays
    /// clock-free and testable.
    pub fn new(config: &ResolvedConfig, today: NaiveDate) -> Self {
        let province_idx = match geo::find_province(&config.province) {
            Some((idx, _)) => idx,
            None => {
                warn!("Unknown province '{}', falling back to first", config.province);
                0
            }
        };
        let province = &geo::PROVINCES[province_idx];
        let city_idx = match province.cities.iter().position(|c| c.name == config.city) {
            Some(idx) => idx,
            None => {
                warn!(
                    "Unknown city '{}' in {}, falling back to first",
                    config.city, province.name
                );
                0
            }
        };

        Self {
            province_idx,
            city_idx,
            date: today,
            today,
            schedule: None,
            is_loading: false,
            status_message: String::from("Welcome to Minaret!"),
            method: config.method,
        }
    }

    pub fn province(&self) -> &'static Province {
        &geo::PROVINCES[self.province_idx]
    }

    pub fn city(&self) -> &'static City {
        &self.province().cities[self.city_idx]
    }

    /// The provider query for the current selection.
    pub fn query(&self) -> TimingsQuery {
        let city = self.city();
        TimingsQuery {
            latitude: city.lat,
            longitude: city.lng,
            date: self.date,
            method: self.method,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Minaret!");
        assert!(!app.is_loading);
        assert!(app.schedule.is_none());
        assert_eq!(app.province().name, "Jiangsu (江苏)");
        assert_eq!(app.city().name, "Yangzhou (扬州)");
    }

    #[test]
    fn test_query_uses_selected_city_coords() {
        let app = test_app();
        let query = app.query();
        assert_eq!(query.latitude, 32.3945);
        assert_eq!(query.longitude, 119.4129);
        assert_eq!(query.date, app.date);
    }

    #[test]
    fn test_unknown_names_fall_back_to_first() {
        use crate::core::config::ResolvedConfig;
        use crate::timings::CalculationMethod;
        use chrono::NaiveDate;

        let config = ResolvedConfig {
            province: "Narnia".to_string(),
            city: "Cair Paravel".to_string(),
            method: CalculationMethod::Isna,
            base_url: "http://unused".to_string(),
        };
        let app = super::App::new(&config, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(app.province_idx, 0);
        assert_eq!(app.city_idx, 0);
    }
}
