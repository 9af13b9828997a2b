//! reqwest implementation of [`Api`] against `api2.sloneek.com`.

use super::types::{
    Absence, AbsenceOption, AbsencePayload, CalendarEnvelope, CalendarQuery, Client, Envelope, EventPayload,
    LoginCredentials, LoginInfo, PlanningCategory, ScheduledEvent, User, UserPlanningEvent,
};
use super::{Api, ApiResult};
use crate::libs::error::SloneekError;
use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api2.sloneek.com";
pub const API_URL_ENV: &str = "SLONEEK_API_URL";

const LOGIN_URL: &str = "auth/login";
const USERS_URL: &str = "v2/module-planning/scheduled-events/options/users";
const CLIENTS_URL: &str = "v2/module-planning/scheduled-events/options/clients";
const PLANNING_EVENTS_URL: &str = "v2/module-planning/scheduled-events/options/user-planning-events";
const CATEGORIES_URL: &str = "v2/module-planning/scheduled-events/options/planning-categories";
const SCHEDULED_CALENDAR_URL: &str = "v1/module-planning/scheduled-events-calendar";
const ABSENCE_CALENDAR_URL: &str = "v1/module-absence/absences-calendar";
const ABSENCE_OPTIONS_URL: &str = "v2/module-absence/absence/absence-options?action=create&data_type=user_absence_events";
const SCHEDULED_EVENTS_URL: &str = "v2/module-planning/scheduled-events";
const ABSENCE_URL: &str = "v2/module-absence/absence/absence";

#[derive(Debug, Clone)]
pub struct Sloneek {
    client: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
}

impl Sloneek {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Uses `SLONEEK_API_URL` when set, the public API otherwise.
    pub fn from_env() -> Self {
        Self::new(&env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Sends one JSON request and decodes the answer.
    ///
    /// An empty 2xx body decodes as JSON `null`, so callers that do not care
    /// about the answer can ask for `serde_json::Value`.
    async fn call<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sloneek request");

        let mut request = self
            .client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%status, bytes = text.len(), "sloneek response");

        if !status.is_success() {
            let body = serde_json::from_str::<serde_json::Value>(&text)
                .and_then(|value| serde_json::to_string_pretty(&value))
                .unwrap_or(text);
            return Err(SloneekError::Http { status, body });
        }

        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| SloneekError::Decode(format!("{}: {}", url, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.call::<(), T>(Method::GET, path, None).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.call(Method::POST, path, Some(body)).await
    }
}

impl Api for Sloneek {
    async fn login(&mut self, credentials: &LoginCredentials) -> ApiResult<LoginInfo> {
        let response: Envelope<LoginInfo> = self.post(LOGIN_URL, credentials).await?;
        self.access_token = Some(response.data.access_token.clone());
        Ok(response.data)
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        let response: Envelope<Vec<User>> = self.get(USERS_URL).await?;
        Ok(response.data)
    }

    async fn clients(&self, user_uuid: &str) -> ApiResult<Vec<Client>> {
        let response: Envelope<Vec<Client>> = self.get(&format!("{}?user_uuid={}", CLIENTS_URL, user_uuid)).await?;
        Ok(response.data)
    }

    async fn planning_events(&self, user_uuid: &str) -> ApiResult<Vec<UserPlanningEvent>> {
        let response: Envelope<Vec<UserPlanningEvent>> =
            self.get(&format!("{}?user_uuid={}", PLANNING_EVENTS_URL, user_uuid)).await?;
        Ok(response.data)
    }

    async fn categories(&self) -> ApiResult<Vec<PlanningCategory>> {
        let response: Envelope<Vec<PlanningCategory>> = self.get(CATEGORIES_URL).await?;
        Ok(response.data)
    }

    async fn scheduled_events(&self, query: &CalendarQuery) -> ApiResult<Vec<ScheduledEvent>> {
        let response: CalendarEnvelope<ScheduledEvent> = self.post(SCHEDULED_CALENDAR_URL, query).await?;
        Ok(response.into_events())
    }

    async fn absences(&self, query: &CalendarQuery) -> ApiResult<Vec<Absence>> {
        let response: CalendarEnvelope<Absence> = self.post(ABSENCE_CALENDAR_URL, query).await?;
        Ok(response.into_events())
    }

    async fn absence_options(&self) -> ApiResult<Vec<AbsenceOption>> {
        let response: Envelope<Vec<AbsenceOption>> = self.get(ABSENCE_OPTIONS_URL).await?;
        Ok(response.data)
    }

    async fn create_event(&self, payload: &EventPayload) -> ApiResult<()> {
        let _: serde_json::Value = self.post(SCHEDULED_EVENTS_URL, payload).await?;
        Ok(())
    }

    async fn create_absence(&self, payload: &AbsencePayload) -> ApiResult<()> {
        let _: serde_json::Value = self.post(ABSENCE_URL, payload).await?;
        Ok(())
    }

    async fn cancel_event(&self, uuid: &str) -> ApiResult<()> {
        let _: serde_json::Value = self
            .call::<(), _>(Method::DELETE, &format!("{}/{}", SCHEDULED_EVENTS_URL, uuid), None)
            .await?;
        Ok(())
    }

    async fn cancel_absence(&self, uuid: &str) -> ApiResult<()> {
        let _: serde_json::Value = self
            .call::<(), _>(Method::POST, &format!("{}/{}/cancel", ABSENCE_URL, uuid), None)
            .await?;
        Ok(())
    }
}
