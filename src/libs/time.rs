//! Calendar windows, day/time parsing and weekday expansion.
//!
//! Everything here works against an explicit [`Zone`] so the same code can be
//! exercised against any IANA zone. The operations depending on the current
//! instant come in pairs: a convenience method using [`Zone::now`] and a
//! `*_at` variant taking `now` explicitly.

use super::error::SloneekError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Weekday};
use chrono_tz::Tz;
use std::env;

/// Zone used when `SLONEEK_TIMEZONE` is not set.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Prague;
pub const TIMEZONE_ENV: &str = "SLONEEK_TIMEZONE";

pub type LocalTime = DateTime<Tz>;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A `[start, end]` instant pair used to filter remote events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub now: LocalTime,
    pub start: LocalTime,
    pub end: LocalTime,
}

impl TimeWindow {
    pub fn iso_start(&self) -> String {
        to_iso(&self.start)
    }

    pub fn iso_end(&self) -> String {
        to_iso(&self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    tz: Tz,
}

impl Default for Zone {
    fn default() -> Self {
        Self { tz: DEFAULT_TIMEZONE }
    }
}

impl Zone {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Reads `SLONEEK_TIMEZONE`, falling back to Prague when unset.
    pub fn from_env() -> Result<Self, SloneekError> {
        match env::var(TIMEZONE_ENV) {
            Ok(name) => name
                .parse::<Tz>()
                .map(Self::new)
                .map_err(|_| SloneekError::invalid_format(format!("unknown time zone {}", name))),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn now(&self) -> LocalTime {
        chrono::Utc::now().with_timezone(&self.tz)
    }

    /// Converts any fixed-offset instant into this zone.
    pub fn localize<T: TimeZone>(&self, t: &DateTime<T>) -> LocalTime {
        t.with_timezone(&self.tz)
    }

    pub fn parse_iso(&self, iso: &str) -> Result<LocalTime, SloneekError> {
        DateTime::parse_from_rfc3339(iso)
            .map(|t| self.localize(&t))
            .map_err(|_| SloneekError::invalid_format(format!("{} is not an ISO-8601 instant", iso)))
    }

    /// Builds the instant for a local wall-clock time. Gaps are rejected,
    /// ambiguous times resolve to the earlier instant.
    pub fn at(&self, date: NaiveDate, time: NaiveTime) -> Result<LocalTime, SloneekError> {
        self.tz
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .ok_or_else(|| SloneekError::invalid_format(format!("{} {} does not exist in {}", date, time, self.tz)))
    }

    /// Local start of `date`. When midnight falls into a DST gap this is the
    /// first instant after the gap.
    pub fn midnight(&self, date: NaiveDate) -> Result<LocalTime, SloneekError> {
        let start = date.and_time(NaiveTime::MIN);
        (0..MINUTES_PER_DAY)
            .find_map(|minute| {
                self.tz
                    .from_local_datetime(&(start + Duration::minutes(minute)))
                    .earliest()
            })
            .ok_or_else(|| SloneekError::invalid_format(format!("{} does not exist in {}", date, self.tz)))
    }

    pub fn current_month(&self) -> Result<TimeWindow, SloneekError> {
        self.current_month_at(self.now())
    }

    /// First instant of the local month up to its last whole second.
    pub fn current_month_at(&self, now: LocalTime) -> Result<TimeWindow, SloneekError> {
        let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).ok_or_else(|| bad_date(&now))?;
        let next = first.checked_add_months(chrono::Months::new(1)).ok_or_else(|| bad_date(&now))?;

        Ok(TimeWindow {
            now,
            start: self.midnight(first)?,
            end: self.midnight(next)? - Duration::seconds(1),
        })
    }

    pub fn current_day(&self) -> Result<TimeWindow, SloneekError> {
        self.current_day_at(self.now())
    }

    /// Local midnight today up to local midnight tomorrow.
    pub fn current_day_at(&self, now: LocalTime) -> Result<TimeWindow, SloneekError> {
        let today = now.date_naive();
        let tomorrow = today.succ_opt().ok_or_else(|| bad_date(&now))?;

        Ok(TimeWindow {
            now,
            start: self.midnight(today)?,
            end: self.midnight(tomorrow)?,
        })
    }

    pub fn today_to_end_of_year(&self) -> Result<TimeWindow, SloneekError> {
        self.today_to_end_of_year_at(self.now())
    }

    /// Local midnight today up to the last whole second of the year.
    pub fn today_to_end_of_year_at(&self, now: LocalTime) -> Result<TimeWindow, SloneekError> {
        let next_year = NaiveDate::from_ymd_opt(now.year() + 1, 1, 1).ok_or_else(|| bad_date(&now))?;

        Ok(TimeWindow {
            now,
            start: self.midnight(now.date_naive())?,
            end: self.midnight(next_year)? - Duration::seconds(1),
        })
    }

    pub fn is_same_local_day<A: TimeZone, B: TimeZone>(&self, a: &DateTime<A>, b: &DateTime<B>) -> bool {
        self.localize(a).date_naive() == self.localize(b).date_naive()
    }

    pub fn is_weekday<T: TimeZone>(&self, t: &DateTime<T>) -> bool {
        is_workday(self.localize(t).weekday())
    }

    pub fn local_day_start<T: TimeZone>(&self, t: &DateTime<T>) -> Result<LocalTime, SloneekError> {
        self.midnight(self.localize(t).date_naive())
    }

    /// Local `[00:00:00, 23:59:59]` spans of every weekday between the days
    /// of `start` and `end`, both inclusive.
    pub fn expand_weekdays<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> Result<Vec<(LocalTime, LocalTime)>, SloneekError> {
        let last = self.localize(end).date_naive();
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        let mut days = Vec::new();
        let mut current = self.localize(start).date_naive();

        while current <= last {
            if is_workday(current.weekday()) {
                days.push((self.midnight(current)?, self.at(current, end_of_day)?));
            }
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(days)
    }

    /// Combines an optional `DD.MM[.]` day (today when `None`) with a clock
    /// time. The day is taken in the year of `now`.
    pub fn combine_day_and_time(&self, day: Option<&str>, time: &str, now: LocalTime) -> Result<LocalTime, SloneekError> {
        let clock = parse_clock(time)?;
        let date = match day {
            Some(day) => parse_explicit_day(day, now.year())?,
            None => now.date_naive(),
        };
        self.at(date, clock)
    }

    /// Local midnight of a fully written `D.M.YYYY` date.
    pub fn full_date_to_local(&self, date: &str) -> Result<LocalTime, SloneekError> {
        self.midnight(parse_full_date(date)?)
    }

    pub fn combine_full_date_and_time(&self, date: &str, time: &str) -> Result<LocalTime, SloneekError> {
        self.at(parse_full_date(date)?, parse_clock(time)?)
    }
}

fn is_workday(weekday: Weekday) -> bool {
    weekday.number_from_monday() <= 5
}

fn bad_date(now: &LocalTime) -> SloneekError {
    SloneekError::invalid_format(format!("no calendar window around {}", now))
}

/// ISO-8601 with offset and without sub-second digits.
pub fn to_iso(t: &LocalTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// ISO-8601 with offset and milliseconds.
pub fn to_iso_millis(t: &LocalTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Parses `HH:MM` (one or two hour digits).
pub fn parse_clock(time: &str) -> Result<NaiveTime, SloneekError> {
    let invalid = || SloneekError::invalid_format(format!("{}. Expected HH:MM format.", time));
    let (hours, minutes) = time.trim().split_once(':').ok_or_else(invalid)?;
    let hours = digits(hours, 1, 2).ok_or_else(invalid)?;
    let minutes = digits(minutes, 2, 2).ok_or_else(invalid)?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Parses `DD.MM` or `DD.MM.` in the given year.
pub fn parse_explicit_day(day: &str, year: i32) -> Result<NaiveDate, SloneekError> {
    let invalid = || SloneekError::invalid_format(format!("{}. Expected DD.MM or DD.MM. format.", day));
    let trimmed = day.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let (d, m) = trimmed.split_once('.').ok_or_else(invalid)?;
    let d = digits(d, 1, 2).ok_or_else(invalid)?;
    let m = digits(m, 1, 2).ok_or_else(invalid)?;

    if !(1..=31).contains(&d) || !(1..=12).contains(&m) {
        return Err(invalid());
    }
    NaiveDate::from_ymd_opt(year, m, d)
        .ok_or_else(|| SloneekError::invalid_format(format!("{}.{}.{} is not a calendar date", d, m, year)))
}

/// Parses `D.M.YYYY`.
pub fn parse_full_date(date: &str) -> Result<NaiveDate, SloneekError> {
    let invalid = || SloneekError::invalid_format(format!("{}. Expected D.M.YYYY format.", date));
    let mut parts = date.trim().split('.').map(str::trim);
    let (Some(d), Some(m), Some(y)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if parts.any(|rest| !rest.is_empty()) {
        return Err(invalid());
    }

    let d = digits(d, 1, 2).ok_or_else(invalid)?;
    let m = digits(m, 1, 2).ok_or_else(invalid)?;
    let y = digits(y, 4, 4).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(y as i32, m, d).ok_or_else(invalid)
}

/// Plain ASCII digits of a bounded length; signs and whitespace are refused.
fn digits(part: &str, min: usize, max: usize) -> Option<u32> {
    if !(min..=max).contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Rounded difference `b - a` in minutes.
pub fn duration_minutes<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> i64 {
    let seconds = b.timestamp() - a.timestamp();
    (seconds as f64 / 60.0).round() as i64
}
