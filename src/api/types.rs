//! Request and response bodies exchanged with the Sloneek API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Most endpoints wrap their payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Calendar endpoints return `{ "data": { "events": [...] } }`, either level
/// may be missing when there is nothing to show.
#[derive(Debug, Deserialize)]
pub struct CalendarEnvelope<T> {
    pub data: Option<CalendarData<T>>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarData<T> {
    pub events: Option<Vec<T>>,
}

impl<T> CalendarEnvelope<T> {
    pub fn into_events(self) -> Vec<T> {
        self.data.and_then(|data| data.events).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInfo {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub uuid: String,
    #[serde(default)]
    pub team: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub uuid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub uuid: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanningEvent {
    pub uuid: String,
    pub display_name: String,
}

/// A planning event the user may log against; `uuid` identifies the user's
/// assignment, `planning_event.uuid` the event definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserPlanningEvent {
    pub uuid: String,
    pub planning_event: PlanningEvent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanningCategory {
    pub uuid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRef {
    pub project_name: String,
}

/// A worklog on the planning calendar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduledEvent {
    #[serde(default)]
    pub uuid: String,
    pub started_at: DateTime<FixedOffset>,
    pub ended_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub client: Option<NamedRef>,
    #[serde(default)]
    pub client_project: Option<ProjectRef>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbsenceUser {
    #[serde(default)]
    pub uuid: String,
    pub full_name: String,
    #[serde(default)]
    pub team: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbsenceEventRef {
    pub absence_event_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    FullDay,
    HalfDay,
}

/// An absence on the absence calendar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Absence {
    #[serde(default)]
    pub uuid: String,
    pub user: Option<AbsenceUser>,
    pub started_at: DateTime<FixedOffset>,
    pub ended_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub user_absence_event: Option<AbsenceEventRef>,
    /// `full_day` or `half_day`.
    #[serde(default)]
    pub event_type: Option<String>,
    /// `vacation`, `in_work`, ... kept as text since the set is open.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Absence {
    pub const IN_WORK: &'static str = "in_work";

    pub fn is_in_work(&self) -> bool {
        self.kind == Self::IN_WORK
    }

    pub fn is_full_day(&self) -> bool {
        self.event_type.as_deref() == Some("full_day")
    }

    pub fn name(&self) -> Option<&str> {
        self.user_absence_event.as_ref().map(|e| e.absence_event_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbsenceDefinition {
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub unit_type: String,
}

/// An absence kind the user may request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbsenceOption {
    pub uuid: String,
    pub absence_event: AbsenceDefinition,
}

/// How an absence kind is measured, which decides the creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceUnit {
    Days,
    DaysAndHalfDays,
    Hours,
}

impl AbsenceOption {
    pub fn unit(&self) -> Option<AbsenceUnit> {
        match self.absence_event.unit_type.as_str() {
            "days" => Some(AbsenceUnit::Days),
            "days_and_half_days" => Some(AbsenceUnit::DaysAndHalfDays),
            "hours" => Some(AbsenceUnit::Hours),
            _ => None,
        }
    }
}

/// Body of the calendar listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalendarQuery {
    pub interval_starting_at: String,
    pub interval_ending_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_uuids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning_events_uuids: Option<Vec<String>>,
    pub quick_filter: Option<String>,
}

/// Body for creating a worklog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    #[serde(rename = "isRepeat")]
    pub is_repeat: bool,
    pub user_planning_event_uuid: String,
    pub planning_categories: Vec<String>,
    pub started_at: String,
    pub ended_at: String,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<String>,
    pub duration_time: String,
    pub duration: i64,
    pub timezone: String,
    pub note: String,
    pub is_automatically_approve: bool,
    pub message: String,
    pub mentions: Vec<String>,
    pub client: String,
    pub client_project: String,
    pub user_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullDayAbsence {
    pub user_absence_event_uuid: String,
    pub day_type: DayType,
    pub automatically_approve: bool,
    pub note: String,
    pub message: String,
    pub mentions: Vec<String>,
    #[serde(rename = "fullDay")]
    pub full_day: bool,
    pub start_date_time: String,
    pub end_date_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalfDayAbsence {
    pub user_absence_event_uuid: String,
    pub day_type: DayType,
    pub automatically_approve: bool,
    pub note: String,
    pub message: String,
    pub mentions: Vec<String>,
    #[serde(rename = "fullDay")]
    pub full_day: bool,
    pub start_date_time: String,
    pub is_first_half_day: bool,
    pub end_date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyAbsence {
    pub user_absence_event_uuid: String,
    pub day_type: DayType,
    pub automatically_approve: bool,
    pub note: String,
    pub message: String,
    pub mentions: Vec<String>,
    pub start_date_time: String,
    pub duration: f64,
    pub end_date_time: Option<String>,
}

/// Body for requesting an absence; the shape depends on the unit chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AbsencePayload {
    FullDay(FullDayAbsence),
    HalfDay(HalfDayAbsence),
    HourlyHalfDay(HourlyAbsence),
}

impl AbsencePayload {
    pub fn full_day(option_uuid: &str, message: &str, start: String, end: String) -> Self {
        Self::FullDay(FullDayAbsence {
            user_absence_event_uuid: option_uuid.to_string(),
            day_type: DayType::FullDay,
            automatically_approve: true,
            note: message.to_string(),
            message: message.to_string(),
            mentions: Vec::new(),
            full_day: true,
            start_date_time: start,
            end_date_time: end,
        })
    }

    pub fn half_day(option_uuid: &str, message: &str, start: String, first_half: bool) -> Self {
        Self::HalfDay(HalfDayAbsence {
            user_absence_event_uuid: option_uuid.to_string(),
            day_type: DayType::HalfDay,
            automatically_approve: true,
            note: message.to_string(),
            message: message.to_string(),
            mentions: Vec::new(),
            full_day: false,
            start_date_time: start,
            is_first_half_day: first_half,
            end_date_time: None,
        })
    }

    /// Hourly absences are not auto-approved.
    pub fn hourly(option_uuid: &str, message: &str, start: String, hours: f64) -> Self {
        Self::HourlyHalfDay(HourlyAbsence {
            user_absence_event_uuid: option_uuid.to_string(),
            day_type: DayType::HalfDay,
            automatically_approve: false,
            note: message.to_string(),
            message: message.to_string(),
            mentions: Vec::new(),
            start_date_time: start,
            duration: hours,
            end_date_time: None,
        })
    }
}
