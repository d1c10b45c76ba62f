//! # Actions
//!
//! Everything that can happen in minaret becomes an `Action`.
//! User presses →? That's `Action::NextProvince`.
//! The fetch task finishes? That's `Action::ScheduleLoaded`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state and returns an `Effect` describing the I/O the
//! caller must perform (at most a fetch). No side effects here — the
//! actual HTTP happens in the TUI's fetch task.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive the reducer with a scripted
//! action sequence and assert on the state, no terminal or network
//! required.

use chrono::Duration;
use log::debug;

use crate::core::schedule::PrayerSchedule;
use crate::core::state::App;
use crate::geo;
use crate::timings::TimingsQuery;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NextProvince,
    PrevProvince,
    NextCity,
    PrevCity,
    NextDay,
    PrevDay,
    /// Jump back to the date the app started on.
    BackToToday,
    /// Re-fetch the current selection.
    Refresh,
    /// A fetch finished. Failures were already collapsed to the
    /// all-unknown schedule at the provider boundary, so this is the
    /// only way results arrive. Carries the query it answers so stale
    /// results (the user moved on while the request was in flight) can
    /// be dropped.
    ScheduleLoaded {
        query: TimingsQuery,
        schedule: PrayerSchedule,
    },
}

/// I/O the caller must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Fetch(TimingsQuery),
}

/// Applies an action to the state, returning the effect to run.
///
/// Any change of province, city or date invalidates the current
/// schedule and requests a fetch. Changing province resets the city to
/// the first in the new province.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::NextProvince => {
            app.province_idx = (app.province_idx + 1) % geo::PROVINCES.len();
            app.city_idx = 0;
            begin_fetch(app)
        }
        Action::PrevProvince => {
            app.province_idx = (app.province_idx + geo::PROVINCES.len() - 1) % geo::PROVINCES.len();
            app.city_idx = 0;
            begin_fetch(app)
        }
        Action::NextCity => {
            let count = app.province().cities.len();
            app.city_idx = (app.city_idx + 1) % count;
            begin_fetch(app)
        }
        Action::PrevCity => {
            let count = app.province().cities.len();
            app.city_idx = (app.city_idx + count - 1) % count;
            begin_fetch(app)
        }
        Action::NextDay => {
            app.date += Duration::days(1);
            begin_fetch(app)
        }
        Action::PrevDay => {
            app.date -= Duration::days(1);
            begin_fetch(app)
        }
        Action::BackToToday => {
            if app.date == app.today {
                return Effect::None;
            }
            app.date = app.today;
            begin_fetch(app)
        }
        Action::Refresh => begin_fetch(app),
        Action::ScheduleLoaded { query, schedule } => {
            if query != app.query() {
                debug!("Dropping stale schedule for {}", query.date);
                return Effect::None;
            }
            app.is_loading = false;
            app.schedule = Some(schedule);
            app.status_message = if schedule.is_unknown() {
                String::from("Prayer times unavailable — check your connection")
            } else {
                format!("Prayer times for {}", app.city().name)
            };
            Effect::None
        }
    }
}

fn begin_fetch(app: &mut App) -> Effect {
    app.schedule = None;
    app.is_loading = true;
    app.status_message = String::from("Fetching prayer times...");
    Effect::Fetch(app.query())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::{PrayerName, PrayerTime};
    use crate::test_support::{test_app, test_schedule};

    #[test]
    fn test_next_province_resets_city() {
        let mut app = test_app();
        app.city_idx = 1; // Yangzhou
        app.schedule = Some(test_schedule());
        let effect = update(&mut app, Action::NextProvince);
        assert_eq!(app.city_idx, 0);
        assert!(app.schedule.is_none());
        assert!(app.is_loading);
        assert!(matches!(effect, Effect::Fetch(_)));
    }

    #[test]
    fn test_province_navigation_wraps() {
        let mut app = test_app();
        app.province_idx = 0;
        update(&mut app, Action::PrevProvince);
        assert_eq!(app.province_idx, geo::PROVINCES.len() - 1);
        update(&mut app, Action::NextProvince);
        assert_eq!(app.province_idx, 0);
    }

    #[test]
    fn test_city_navigation_wraps_within_province() {
        let mut app = test_app();
        let count = app.province().cities.len();
        app.city_idx = count - 1;
        update(&mut app, Action::NextCity);
        assert_eq!(app.city_idx, 0);
        update(&mut app, Action::PrevCity);
        assert_eq!(app.city_idx, count - 1);
    }

    #[test]
    fn test_date_navigation_fetches() {
        let mut app = test_app();
        let start = app.date;

        let effect = update(&mut app, Action::NextDay);
        assert_eq!(app.date, start + Duration::days(1));
        let Effect::Fetch(query) = effect else {
            panic!("expected a fetch effect");
        };
        assert_eq!(query.date, app.date);

        update(&mut app, Action::PrevDay);
        update(&mut app, Action::PrevDay);
        assert_eq!(app.date, start - Duration::days(1));

        let effect = update(&mut app, Action::BackToToday);
        assert_eq!(app.date, start);
        assert!(matches!(effect, Effect::Fetch(_)));
    }

    #[test]
    fn test_back_to_today_is_a_noop_when_already_today() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::BackToToday), Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_schedule_loaded_clears_loading() {
        let mut app = test_app();
        update(&mut app, Action::Refresh);
        assert!(app.is_loading);

        let query = app.query();
        let effect = update(
            &mut app,
            Action::ScheduleLoaded {
                query,
                schedule: test_schedule(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        let schedule = app.schedule.unwrap();
        assert_eq!(
            schedule.get(PrayerName::Fajr),
            PrayerTime::parse("05:10")
        );
        assert!(app.status_message.contains("Yangzhou"));
    }

    #[test]
    fn test_stale_schedule_is_dropped() {
        let mut app = test_app();
        let stale_query = app.query();
        // User moved to the next day while the fetch was in flight.
        update(&mut app, Action::NextDay);

        update(
            &mut app,
            Action::ScheduleLoaded {
                query: stale_query,
                schedule: test_schedule(),
            },
        );
        assert!(app.schedule.is_none());
        assert!(app.is_loading);
    }

    #[test]
    fn test_unknown_schedule_sets_unavailable_status() {
        let mut app = test_app();
        let query = app.query();
        update(
            &mut app,
            Action::ScheduleLoaded {
                query,
                schedule: PrayerSchedule::unknown(),
            },
        );
        assert!(app.status_message.contains("unavailable"));
        // The refresh loop still has a renderable (all-sentinel) schedule.
        assert!(app.schedule.unwrap().is_unknown());
    }
}
