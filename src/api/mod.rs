//! Client side of the Sloneek REST API.
//!
//! Commands talk to the service only through the [`Api`] trait, which keeps
//! the orchestration logic testable with in-memory fakes. [`Sloneek`] is the
//! reqwest implementation used by the binary.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sloneek::api::{Api, Sloneek};
//! use sloneek::api::types::LoginCredentials;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut api = Sloneek::from_env();
//! let credentials = LoginCredentials { email: "me@example.com".into(), password: "secret".into() };
//! api.login(&credentials).await?;
//! let users = api.users().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::SloneekError;
use types::{
    Absence, AbsenceOption, AbsencePayload, CalendarQuery, Client, EventPayload, LoginCredentials, LoginInfo,
    PlanningCategory, ScheduledEvent, User, UserPlanningEvent,
};

pub mod sloneek;
pub mod types;

pub use sloneek::Sloneek;

pub type ApiResult<T> = Result<T, SloneekError>;

/// Operations the commands need from the remote service.
///
/// Every method except [`Api::login`] requires a successful login first.
/// Failures are never retried: a non-2xx answer becomes
/// [`SloneekError::Http`], a transport failure [`SloneekError::Network`].
#[allow(async_fn_in_trait)]
pub trait Api {
    /// Authenticates and keeps the access token for later calls.
    async fn login(&mut self, credentials: &LoginCredentials) -> ApiResult<LoginInfo>;

    /// Users the logged-in account may plan for.
    async fn users(&self) -> ApiResult<Vec<User>>;

    /// Clients (with their projects) available to a user.
    async fn clients(&self, user_uuid: &str) -> ApiResult<Vec<Client>>;

    async fn planning_events(&self, user_uuid: &str) -> ApiResult<Vec<UserPlanningEvent>>;

    async fn categories(&self) -> ApiResult<Vec<PlanningCategory>>;

    /// Worklogs within the query window.
    async fn scheduled_events(&self, query: &CalendarQuery) -> ApiResult<Vec<ScheduledEvent>>;

    /// Absences within the query window; without `users_uuids` the whole
    /// organization is returned.
    async fn absences(&self, query: &CalendarQuery) -> ApiResult<Vec<Absence>>;

    async fn absence_options(&self) -> ApiResult<Vec<AbsenceOption>>;

    async fn create_event(&self, payload: &EventPayload) -> ApiResult<()>;

    async fn create_absence(&self, payload: &AbsencePayload) -> ApiResult<()>;

    async fn cancel_event(&self, uuid: &str) -> ApiResult<()>;

    async fn cancel_absence(&self, uuid: &str) -> ApiResult<()>;
}
