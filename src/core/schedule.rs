//! # Prayer Schedule Core
//!
//! The one piece of real logic in minaret: given today's six prayer times
//! and a reference instant, which prayer is next and how long until it?
//!
//! Everything here is pure. The reference instant is always a parameter,
//! never read from the system clock, so every function is deterministic
//! and directly testable. Every function is also total: malformed or
//! missing time values become [`PrayerTime::Unknown`] and flow through
//! the "no countdown" path instead of raising.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};

/// Placeholder rendered when a time value is unavailable.
pub const SENTINEL: &str = "--:--";

// ============================================================================
// Prayer Names
// ============================================================================

/// The six daily prayer/time markers, in chronological order.
///
/// The declaration order is significant: [`PrayerName::ALL`] is the
/// canonical within-day order and drives both iteration and the
/// next-prayer tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// Canonical chronological order within a single day.
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// English display label (also the key used by the Aladhan API).
    pub fn label(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Arabic script form, shown alongside the English label.
    pub fn arabic(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "الفجر",
            PrayerName::Sunrise => "الشروق",
            PrayerName::Dhuhr => "الظهر",
            PrayerName::Asr => "العصر",
            PrayerName::Maghrib => "المغرب",
            PrayerName::Isha => "العشاء",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "🌅",
            PrayerName::Sunrise => "☀️",
            PrayerName::Dhuhr => "🌞",
            PrayerName::Asr => "🌤️",
            PrayerName::Maghrib => "🌆",
            PrayerName::Isha => "🌙",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Time of Day
// ============================================================================

/// A wall-clock prayer time (hour:minute, no date, no timezone), or
/// `Unknown` when the provider could not supply a value.
///
/// The timezone is implicitly the local time of the queried location,
/// exactly as the provider returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrayerTime {
    At(chrono::NaiveTime),
    Unknown,
}

impl PrayerTime {
    /// Parses a 24-hour `"HH:MM"` string.
    ///
    /// Anything else — trailing garbage, the `"--:--"` sentinel, an empty
    /// string — yields `Unknown` rather than an error. Callers must treat
    /// `Unknown` as "cannot be compared, cannot be next".
    pub fn parse(s: &str) -> Self {
        match chrono::NaiveTime::parse_from_str(s, "%H:%M") {
            Ok(t) => PrayerTime::At(t),
            Err(_) => PrayerTime::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PrayerTime::Unknown)
    }

    /// True when this time falls strictly after the reference instant's
    /// hour:minute. Seconds are ignored on both sides, and equality is
    /// NOT after: a prayer at the current minute counts as already
    /// passed, so the selector moves on to the next distinct prayer.
    pub fn is_after(&self, reference: NaiveDateTime) -> bool {
        match self {
            PrayerTime::Unknown => false,
            PrayerTime::At(t) => {
                let now = reference.time();
                (t.hour(), t.minute()) > (now.hour(), now.minute())
            }
        }
    }
}

impl fmt::Display for PrayerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrayerTime::At(t) => write!(f, "{}", t.format("%H:%M")),
            PrayerTime::Unknown => f.write_str(SENTINEL),
        }
    }
}

// ============================================================================
// Schedule
// ============================================================================

/// One day's prayer times at one location: exactly six entries, one per
/// [`PrayerName`]. Individual entries may be `Unknown`; the set of names
/// is always complete. Immutable once built — a schedule is created
/// fresh per (location, date) fetch and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSchedule {
    pub fajr: PrayerTime,
    pub sunrise: PrayerTime,
    pub dhuhr: PrayerTime,
    pub asr: PrayerTime,
    pub maghrib: PrayerTime,
    pub isha: PrayerTime,
}

impl PrayerSchedule {
    /// The all-sentinel schedule. Provider failures collapse to this,
    /// so downstream code never needs its own error branch.
    pub fn unknown() -> Self {
        Self {
            fajr: PrayerTime::Unknown,
            sunrise: PrayerTime::Unknown,
            dhuhr: PrayerTime::Unknown,
            asr: PrayerTime::Unknown,
            maghrib: PrayerTime::Unknown,
            isha: PrayerTime::Unknown,
        }
    }

    pub fn get(&self, name: PrayerName) -> PrayerTime {
        match name {
            PrayerName::Fajr => self.fajr,
            PrayerName::Sunrise => self.sunrise,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    /// Iterates entries in canonical chronological order.
    pub fn entries(&self) -> impl Iterator<Item = (PrayerName, PrayerTime)> + '_ {
        PrayerName::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    /// True when every entry is `Unknown` (the provider-failure shape).
    pub fn is_unknown(&self) -> bool {
        self.entries().all(|(_, t)| t.is_unknown())
    }
}

// ============================================================================
// Next-Prayer Selection
// ============================================================================

/// The chosen upcoming prayer and how long until it occurs.
/// `remaining` is `None` when the time itself is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub time: PrayerTime,
    pub remaining: Option<Duration>,
}

/// Picks the next upcoming prayer: the first name in canonical order
/// whose known time is strictly after the reference instant.
///
/// When every remaining prayer has passed (or every entry is `Unknown`),
/// falls back to Fajr with *today's* Fajr value. The countdown then rolls
/// over to tomorrow's date, but the clock time is today's — tomorrow's
/// actual Fajr shifts by a few minutes seasonally and is not re-fetched.
/// A deliberate simplification.
pub fn select_next(schedule: &PrayerSchedule, reference: NaiveDateTime) -> NextPrayer {
    for name in PrayerName::ALL {
        let time = schedule.get(name);
        if time.is_after(reference) {
            return NextPrayer {
                name,
                time,
                remaining: remaining_until(time, reference),
            };
        }
    }

    let time = schedule.get(PrayerName::Fajr);
    NextPrayer {
        name: PrayerName::Fajr,
        time,
        remaining: remaining_until(time, reference),
    }
}

// ============================================================================
// Countdown
// ============================================================================

/// Duration from the reference instant until the next occurrence of the
/// given time-of-day. `None` for `Unknown`.
///
/// The candidate target is the reference's calendar date combined with
/// the time-of-day; if that lies strictly before the reference it is
/// advanced by exactly one day (the after-Isha-to-Fajr case). The result
/// is therefore always non-negative.
pub fn remaining_until(time: PrayerTime, reference: NaiveDateTime) -> Option<Duration> {
    let PrayerTime::At(t) = time else { return None };
    let mut target = reference.date().and_time(t);
    if target < reference {
        target += Duration::days(1);
    }
    Some(target - reference)
}

/// Human-readable countdown: `"2h 5m"`, or `"45m"` when under an hour.
/// `None` means no countdown is available (time was `Unknown`) and the
/// caller should render nothing.
pub fn format_remaining(time: PrayerTime, reference: NaiveDateTime) -> Option<String> {
    remaining_until(time, reference).map(format_duration)
}

/// Truncating division on total seconds: seconds are dropped from the
/// display, never rounded up.
fn format_duration(remaining: Duration) -> String {
    let total = remaining.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(h: u32, m: u32) -> PrayerTime {
        PrayerTime::At(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn reference(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    /// The worked example schedule from the Aladhan docs-style fixtures.
    fn sample_schedule() -> PrayerSchedule {
        PrayerSchedule {
            fajr: at(5, 10),
            sunrise: at(6, 30),
            dhuhr: at(12, 15),
            asr: at(15, 45),
            maghrib: at(18, 20),
            isha: at(19, 50),
        }
    }

    #[test]
    fn test_parse_valid_time() {
        assert_eq!(PrayerTime::parse("05:10"), at(5, 10));
        assert_eq!(PrayerTime::parse("23:59"), at(23, 59));
        assert_eq!(PrayerTime::parse("00:00"), at(0, 0));
    }

    #[test]
    fn test_parse_garbage_is_unknown() {
        assert_eq!(PrayerTime::parse("--:--"), PrayerTime::Unknown);
        assert_eq!(PrayerTime::parse(""), PrayerTime::Unknown);
        assert_eq!(PrayerTime::parse("25:61"), PrayerTime::Unknown);
        assert_eq!(PrayerTime::parse("05:10 (CST)"), PrayerTime::Unknown);
        assert_eq!(PrayerTime::parse("noon"), PrayerTime::Unknown);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(at(5, 10).to_string(), "05:10");
        assert_eq!(PrayerTime::Unknown.to_string(), SENTINEL);
    }

    #[test]
    fn test_is_after_equality_is_not_after() {
        // Boundary: a prayer at the current minute has already passed.
        assert!(!at(14, 0).is_after(reference(14, 0)));
    }

    #[test]
    fn test_is_after_ignores_reference_seconds() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(14, 0, 59)
            .unwrap();
        assert!(!at(14, 0).is_after(now));
        assert!(at(14, 1).is_after(now));
    }

    #[test]
    fn test_unknown_is_never_after() {
        assert!(!PrayerTime::Unknown.is_after(reference(0, 0)));
    }

    #[test]
    fn test_select_before_first_prayer_returns_fajr() {
        let next = select_next(&sample_schedule(), reference(4, 0));
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.time, at(5, 10));
        assert_eq!(next.remaining, Some(Duration::minutes(70)));
    }

    #[test]
    fn test_select_midafternoon_returns_asr() {
        // 14:00 → Asr at 15:45, 1h 45m away.
        let next = select_next(&sample_schedule(), reference(14, 0));
        assert_eq!(next.name, PrayerName::Asr);
        assert_eq!(next.time, at(15, 45));
        assert_eq!(format_remaining(next.time, reference(14, 0)).as_deref(), Some("1h 45m"));
    }

    #[test]
    fn test_select_after_isha_falls_back_to_todays_fajr() {
        // After the last prayer the selector reuses today's Fajr value;
        // the countdown rolls to tomorrow (05:10 < 20:30).
        let next = select_next(&sample_schedule(), reference(20, 30));
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.time, at(5, 10));
        assert_eq!(next.remaining, Some(Duration::hours(8) + Duration::minutes(40)));
        assert_eq!(format_remaining(next.time, reference(20, 30)).as_deref(), Some("8h 40m"));
    }

    #[test]
    fn test_select_skips_unknown_entries() {
        let mut schedule = sample_schedule();
        schedule.asr = PrayerTime::Unknown;
        let next = select_next(&schedule, reference(14, 0));
        assert_eq!(next.name, PrayerName::Maghrib);
        assert_eq!(next.time, at(18, 20));
    }

    #[test]
    fn test_select_all_unknown_degrades_gracefully() {
        let next = select_next(&PrayerSchedule::unknown(), reference(14, 0));
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.time, PrayerTime::Unknown);
        assert_eq!(next.remaining, None);
        assert_eq!(format_remaining(next.time, reference(14, 0)), None);
    }

    #[test]
    fn test_select_exactly_at_prayer_time_moves_on() {
        // Reference exactly at Dhuhr: Dhuhr is not "after", Asr is next.
        let next = select_next(&sample_schedule(), reference(12, 15));
        assert_eq!(next.name, PrayerName::Asr);
    }

    #[test]
    fn test_format_ninety_minutes() {
        assert_eq!(format_remaining(at(15, 30), reference(14, 0)).as_deref(), Some("1h 30m"));
    }

    #[test]
    fn test_format_under_an_hour_omits_hours() {
        assert_eq!(format_remaining(at(14, 45), reference(14, 0)).as_deref(), Some("45m"));
    }

    #[test]
    fn test_format_truncates_seconds() {
        // 1h 29m 30s until the target: displayed as 1h 29m, not 1h 30m.
        let now = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(14, 0, 30)
            .unwrap();
        assert_eq!(format_remaining(at(15, 30), now).as_deref(), Some("1h 29m"));
    }

    #[test]
    fn test_format_target_equal_to_reference_is_zero() {
        assert_eq!(format_remaining(at(14, 0), reference(14, 0)).as_deref(), Some("0m"));
    }

    #[test]
    fn test_remaining_is_never_negative() {
        let d = remaining_until(at(5, 10), reference(20, 30)).unwrap();
        assert!(d >= Duration::zero());
    }

    #[test]
    fn test_schedule_unknown_shape() {
        let schedule = PrayerSchedule::unknown();
        assert!(schedule.is_unknown());
        assert_eq!(schedule.entries().count(), 6);
        assert!(!sample_schedule().is_unknown());
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = PrayerName::ALL.iter().map(|n| n.label()).collect();
        assert_eq!(names, ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }
}
