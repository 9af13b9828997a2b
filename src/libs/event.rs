//! Merges worklogs and absences into the sequence shown by `sloneek list`.
//!
//! ## Pipeline
//!
//! 1. Worklogs become [`EventKind::Work`] entries, unnamed client/project
//!    labels default to `N/A`.
//! 2. Absences of type `in_work` are dropped. Single-day absences survive
//!    only on weekdays, multi-day absences are split into one entry per
//!    weekday they touch.
//! 3. Work entries followed by absence entries are stable-sorted by start.
//! 4. [`EventRows`] turns the sequence into table rows where the date label
//!    only appears on the first row of each day.
//!
//! Durations carry a fixed 30 minute deduction for full-day absences. The
//! deduction is not clamped, an absence shorter than half an hour yields a
//! negative duration.

use super::error::SloneekError;
use super::time::{duration_minutes, LocalTime, Zone};
use crate::api::types::{Absence, ScheduledEvent};
use chrono::NaiveDate;

pub const NOT_AVAILABLE: &str = "N/A";
pub const ABSENCE_CLIENT_PLACEHOLDER: &str = "—";
/// Minutes deducted from every full-day absence.
pub const FULL_DAY_DEDUCTION: i64 = 30;
/// Labels longer than this are cut to `LABEL_WIDTH - 3` chars plus `...`.
pub const LABEL_WIDTH: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Work,
    Absence,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EventKind::Work => write!(f, "Work"),
            EventKind::Absence => write!(f, "Absence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEvent {
    pub started_at: LocalTime,
    pub ended_at: LocalTime,
    pub kind: EventKind,
    pub client_label: String,
    pub project_label: String,
    pub duration_minutes: i64,
}

impl DisplayEvent {
    pub fn from_scheduled(event: &ScheduledEvent, zone: &Zone) -> Self {
        let started_at = zone.localize(&event.started_at);
        let ended_at = zone.localize(&event.ended_at);

        Self {
            started_at,
            ended_at,
            kind: EventKind::Work,
            client_label: event
                .client
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            project_label: event
                .client_project
                .as_ref()
                .map(|p| p.project_name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            duration_minutes: duration_minutes(&started_at, &ended_at),
        }
    }

    fn absence_span(absence: &Absence, started_at: LocalTime, ended_at: LocalTime) -> Self {
        let mut duration = duration_minutes(&started_at, &ended_at);
        if absence.is_full_day() {
            duration -= FULL_DAY_DEDUCTION;
        }

        Self {
            started_at,
            ended_at,
            kind: EventKind::Absence,
            client_label: ABSENCE_CLIENT_PLACEHOLDER.to_string(),
            project_label: absence.name().unwrap_or(NOT_AVAILABLE).to_string(),
            duration_minutes: duration,
        }
    }

    /// Projects one absence onto the weekdays it covers. `in_work` absences
    /// and weekend-only absences produce nothing.
    pub fn from_absence(absence: &Absence, zone: &Zone) -> Result<Vec<Self>, SloneekError> {
        if absence.is_in_work() {
            return Ok(Vec::new());
        }

        if zone.is_same_local_day(&absence.started_at, &absence.ended_at) {
            if !zone.is_weekday(&absence.started_at) {
                return Ok(Vec::new());
            }
            return Ok(vec![Self::absence_span(
                absence,
                zone.localize(&absence.started_at),
                zone.localize(&absence.ended_at),
            )]);
        }

        expand_multi_day_absence(absence, zone)
    }

    pub fn is_work(&self) -> bool {
        self.kind == EventKind::Work
    }
}

/// One entry per weekday between the absence's first and last local day,
/// each spanning that day's `00:00:00` to `23:59:59`.
pub fn expand_multi_day_absence(absence: &Absence, zone: &Zone) -> Result<Vec<DisplayEvent>, SloneekError> {
    Ok(zone
        .expand_weekdays(&absence.started_at, &absence.ended_at)?
        .into_iter()
        .map(|(start, end)| DisplayEvent::absence_span(absence, start, end))
        .collect())
}

/// The merged listing for one user and window.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub events: Vec<DisplayEvent>,
    pub work_count: usize,
    pub absence_count: usize,
    pub work_minutes: i64,
    pub absence_minutes: i64,
}

impl EventSummary {
    pub fn aggregate(scheduled: &[ScheduledEvent], absences: &[Absence], zone: &Zone) -> Result<Self, SloneekError> {
        let work: Vec<DisplayEvent> = scheduled.iter().map(|e| DisplayEvent::from_scheduled(e, zone)).collect();

        let mut absent = Vec::new();
        for absence in absences {
            absent.extend(DisplayEvent::from_absence(absence, zone)?);
        }

        let work_count = work.len();
        let absence_count = absent.len();
        let work_minutes = work.iter().map(|e| e.duration_minutes).sum();
        let absence_minutes = absent.iter().map(|e| e.duration_minutes).sum();

        let mut events = work;
        events.extend(absent);
        // stable: ties keep work before absence
        events.sort_by_key(|e| e.started_at);

        Ok(Self {
            events,
            work_count,
            absence_count,
            work_minutes,
            absence_minutes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn rows(&self) -> EventRows {
        EventRows::new(&self.events)
    }
}

/// One line of the `list` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Empty when the previous row is on the same day.
    pub date: String,
    pub time: String,
    pub kind: String,
    pub client: String,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRows(pub Vec<EventRow>);

impl EventRows {
    pub fn new(events: &[DisplayEvent]) -> Self {
        let mut previous: Option<NaiveDate> = None;
        let rows = events
            .iter()
            .map(|event| {
                let day = event.started_at.date_naive();
                let date = match previous {
                    Some(prev) if prev == day => String::new(),
                    _ => event.started_at.format("%d.%m.%Y %a").to_string(),
                };
                previous = Some(day);

                EventRow {
                    date,
                    time: format!("{}-{}", event.started_at.format("%H:%M"), event.ended_at.format("%H:%M")),
                    kind: event.kind.to_string(),
                    client: truncate_label(&event.client_label),
                    project: truncate_label(&event.project_label),
                }
            })
            .collect();
        Self(rows)
    }
}

pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_WIDTH {
        let head: String = label.chars().take(LABEL_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

/// Minutes as hours with one decimal, dropping `.0` (`450` -> `7.5`,
/// `480` -> `8`).
pub fn format_hours(minutes: i64) -> String {
    let hours = (minutes as f64 / 60.0 * 10.0).round() / 10.0;
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{:.1}", hours)
    }
}

/// One line of `list --other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherUserRow {
    pub who: String,
    pub team: String,
    pub time: String,
    pub kind: String,
    /// End date, only when the absence does not end today.
    pub ends: String,
}

/// Absences of other people for `today`, filtered by a case-sensitive team
/// substring and sorted by full name.
pub fn other_users_today(absences: &[Absence], team_prefix: &str, today: NaiveDate, zone: &Zone) -> Vec<OtherUserRow> {
    let mut matching: Vec<&Absence> = absences
        .iter()
        .filter(|absence| {
            team_prefix.is_empty()
                || match absence.user.as_ref().and_then(|u| u.team.as_ref()) {
                    Some(team) => team.name.contains(team_prefix),
                    None => true,
                }
        })
        .collect();
    matching.sort_by(|a, b| full_name(a).cmp(full_name(b)));

    matching
        .into_iter()
        .map(|absence| {
            let start = zone.localize(&absence.started_at);
            let end = zone.localize(&absence.ended_at);
            let user = absence.user.as_ref();

            OtherUserRow {
                who: full_name(absence).to_string(),
                team: user
                    .and_then(|u| u.team.as_ref())
                    .map(|t| t.name.clone())
                    .unwrap_or_default(),
                time: format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
                kind: absence.name().unwrap_or(NOT_AVAILABLE).to_string(),
                ends: if end.date_naive() != today {
                    end.format("%d.%m.%Y").to_string()
                } else {
                    String::new()
                },
            }
        })
        .collect()
}

fn full_name(absence: &Absence) -> &str {
    absence.user.as_ref().map(|u| u.full_name.as_str()).unwrap_or("")
}
