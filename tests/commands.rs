#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sloneek::api::types::{
        Absence, AbsenceDefinition, AbsenceEventRef, AbsenceOption, AbsencePayload, CalendarQuery, Client,
        EventPayload, LoginCredentials, LoginInfo, NamedRef, PlanningCategory, PlanningEvent, Project, ProjectRef,
        ScheduledEvent, User, UserPlanningEvent,
    };
    use sloneek::api::{Api, ApiResult};
    use sloneek::commands::log::{unescape_message, LogArgs};
    use sloneek::commands::{absence, absence_cancel, init, list, log, log_cancel, profile};
    use sloneek::libs::config::{ConfigStore, Credentials, Named, PlanningEventRef, Profile, WorkHours, DEFAULT_PROFILE};
    use sloneek::libs::error::SloneekError;
    use sloneek::libs::prompt::Prompt;
    use sloneek::libs::time::{LocalTime, Zone};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// In-memory service recording everything the commands send.
    #[derive(Default)]
    struct FakeApi {
        users: Vec<User>,
        clients: Vec<Client>,
        planning_events: Vec<UserPlanningEvent>,
        categories: Vec<PlanningCategory>,
        scheduled: Vec<ScheduledEvent>,
        absences: Vec<Absence>,
        options: Vec<AbsenceOption>,
        logins: Vec<String>,
        queries: RefCell<Vec<CalendarQuery>>,
        created_events: RefCell<Vec<EventPayload>>,
        created_absences: RefCell<Vec<AbsencePayload>>,
        cancelled: RefCell<Vec<String>>,
    }

    impl Api for FakeApi {
        async fn login(&mut self, credentials: &LoginCredentials) -> ApiResult<LoginInfo> {
            self.logins.push(credentials.email.clone());
            Ok(LoginInfo {
                access_token: "token".to_string(),
                user: None,
            })
        }

        async fn users(&self) -> ApiResult<Vec<User>> {
            Ok(self.users.clone())
        }

        async fn clients(&self, _user_uuid: &str) -> ApiResult<Vec<Client>> {
            Ok(self.clients.clone())
        }

        async fn planning_events(&self, _user_uuid: &str) -> ApiResult<Vec<UserPlanningEvent>> {
            Ok(self.planning_events.clone())
        }

        async fn categories(&self) -> ApiResult<Vec<PlanningCategory>> {
            Ok(self.categories.clone())
        }

        async fn scheduled_events(&self, query: &CalendarQuery) -> ApiResult<Vec<ScheduledEvent>> {
            self.queries.borrow_mut().push(query.clone());
            Ok(self.scheduled.clone())
        }

        async fn absences(&self, query: &CalendarQuery) -> ApiResult<Vec<Absence>> {
            self.queries.borrow_mut().push(query.clone());
            Ok(self.absences.clone())
        }

        async fn absence_options(&self) -> ApiResult<Vec<AbsenceOption>> {
            Ok(self.options.clone())
        }

        async fn create_event(&self, payload: &EventPayload) -> ApiResult<()> {
            self.created_events.borrow_mut().push(payload.clone());
            Ok(())
        }

        async fn create_absence(&self, payload: &AbsencePayload) -> ApiResult<()> {
            self.created_absences.borrow_mut().push(payload.clone());
            Ok(())
        }

        async fn cancel_event(&self, uuid: &str) -> ApiResult<()> {
            self.cancelled.borrow_mut().push(uuid.to_string());
            Ok(())
        }

        async fn cancel_absence(&self, uuid: &str) -> ApiResult<()> {
            self.cancelled.borrow_mut().push(uuid.to_string());
            Ok(())
        }
    }

    /// Answers prompts from fixed scripts; running out of answers aborts.
    #[derive(Default)]
    struct ScriptedPrompt {
        selections: VecDeque<usize>,
        inputs: VecDeque<String>,
        passwords: VecDeque<String>,
        confirms: VecDeque<bool>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(selections: &[usize], inputs: &[&str], confirms: &[bool]) -> Self {
            Self {
                selections: selections.iter().copied().collect(),
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                passwords: VecDeque::new(),
                confirms: confirms.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn select(&mut self, prompt: &str, _items: &[String]) -> Result<usize, SloneekError> {
            self.asked.push(prompt.to_string());
            self.selections.pop_front().ok_or(SloneekError::Aborted)
        }

        fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String, SloneekError> {
            self.asked.push(prompt.to_string());
            let answer = self.inputs.pop_front().ok_or(SloneekError::Aborted)?;
            match (answer.is_empty(), default) {
                (true, Some(default)) => Ok(default.to_string()),
                _ => Ok(answer),
            }
        }

        fn password(&mut self, prompt: &str) -> Result<String, SloneekError> {
            self.asked.push(prompt.to_string());
            self.passwords.pop_front().ok_or(SloneekError::Aborted)
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, SloneekError> {
            self.asked.push(prompt.to_string());
            self.confirms.pop_front().ok_or(SloneekError::Aborted)
        }
    }

    fn prague(y: i32, m: u32, d: u32, h: u32, min: u32) -> LocalTime {
        Zone::default()
            .at(
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                NaiveTime::from_hms_opt(h, min, 0).unwrap(),
            )
            .unwrap()
    }

    fn named(uuid: &str, name: &str) -> Named {
        Named {
            uuid: uuid.to_string(),
            name: name.to_string(),
        }
    }

    fn test_profile() -> Profile {
        Profile {
            credentials: Credentials {
                email: "jana@example.com".to_string(),
                password: "secret".to_string(),
            },
            user: named("user-1", "Jana Novakova"),
            client: named("client-1", "Acme"),
            project: named("project-1", "Website"),
            planning_event: PlanningEventRef {
                uuid: "upe-1".to_string(),
                detail_uuid: "pe-1".to_string(),
                name: "Work".to_string(),
            },
            categories: Some(vec![named("cat-1", "Development")]),
            work_hours: WorkHours::default(),
            timestamp: "2025-05-01T08:00:00.000Z".to_string(),
        }
    }

    fn client(uuid: &str, name: &str, projects: &[(&str, &str)]) -> Client {
        Client {
            uuid: uuid.to_string(),
            name: name.to_string(),
            projects: projects
                .iter()
                .map(|(uuid, name)| Project {
                    uuid: uuid.to_string(),
                    project_name: name.to_string(),
                })
                .collect(),
        }
    }

    fn option(uuid: &str, name: &str, unit_type: &str) -> AbsenceOption {
        AbsenceOption {
            uuid: uuid.to_string(),
            absence_event: AbsenceDefinition {
                display_name: name.to_string(),
                kind: "vacation".to_string(),
                unit_type: unit_type.to_string(),
            },
        }
    }

    fn absence(uuid: &str, start: &str, end: &str) -> Absence {
        Absence {
            uuid: uuid.to_string(),
            user: None,
            started_at: chrono::DateTime::parse_from_rfc3339(start).unwrap(),
            ended_at: chrono::DateTime::parse_from_rfc3339(end).unwrap(),
            user_absence_event: Some(AbsenceEventRef {
                absence_event_name: "Vacation".to_string(),
            }),
            event_type: Some("full_day".to_string()),
            kind: "vacation".to_string(),
        }
    }

    fn worklog(uuid: &str, start: &str, end: &str) -> ScheduledEvent {
        ScheduledEvent {
            uuid: uuid.to_string(),
            started_at: chrono::DateTime::parse_from_rfc3339(start).unwrap(),
            ended_at: chrono::DateTime::parse_from_rfc3339(end).unwrap(),
            client: Some(NamedRef {
                name: "Acme".to_string(),
            }),
            client_project: Some(ProjectRef {
                project_name: "Website".to_string(),
            }),
            message: Some("standup".to_string()),
        }
    }

    fn log_args(message: &str) -> LogArgs {
        LogArgs {
            message: message.to_string(),
            from: None,
            to: None,
            day: None,
            yesterday: false,
            client: false,
            project: false,
        }
    }

    // === log ===

    #[tokio::test]
    async fn test_log_with_profile_defaults() {
        let mut api = FakeApi::default();
        let mut prompt = ScriptedPrompt::default();
        let now = prague(2025, 5, 15, 10, 0);

        let payload = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &log_args("Code review\\nand fixes"),
            &Zone::default(),
            now,
        )
        .await
        .unwrap();

        assert_eq!(api.logins, vec!["jana@example.com".to_string()]);
        assert_eq!(payload.started_at, "2025-05-15T08:00:00+02:00");
        assert_eq!(payload.ended_at, "2025-05-15T16:00:00+02:00");
        assert_eq!(payload.start_time, "08:00:00+02:00");
        assert_eq!(payload.end_time, "16:00:00+02:00");
        assert_eq!(payload.duration, 480);
        assert_eq!(payload.duration_time, "2025-05-14T08:00:00.000+02:00");
        assert_eq!(payload.timezone, "2025-05-15T08:00:00.000+02:00");
        assert_eq!(payload.message, "Code review\nand fixes");
        assert_eq!(payload.note, payload.message);
        assert_eq!(payload.client, "client-1");
        assert_eq!(payload.client_project, "project-1");
        assert_eq!(payload.user_uuid, "user-1");
        assert_eq!(payload.user_planning_event_uuid, "upe-1");
        assert_eq!(payload.planning_categories, vec!["cat-1".to_string()]);
        assert!(!payload.is_repeat);
        assert!(!payload.is_automatically_approve);
        assert!(prompt.asked.is_empty());
        assert_eq!(api.created_events.borrow().as_slice(), &[payload]);
    }

    #[tokio::test]
    async fn test_log_on_explicit_day() {
        let mut api = FakeApi::default();
        let mut prompt = ScriptedPrompt::default();
        let args = LogArgs {
            from: Some("9:00".to_string()),
            to: Some("9:45".to_string()),
            day: Some("3.1.".to_string()),
            ..log_args("planning")
        };

        let payload = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(payload.started_at, "2025-01-03T09:00:00+01:00");
        assert_eq!(payload.duration, 45);
        assert_eq!(payload.duration_time, "2025-01-02T00:45:00.000+01:00");
    }

    #[tokio::test]
    async fn test_log_for_yesterday() {
        let mut api = FakeApi::default();
        let mut prompt = ScriptedPrompt::default();
        let args = LogArgs {
            yesterday: true,
            ..log_args("support")
        };

        let payload = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 1, 0, 30),
        )
        .await
        .unwrap();

        assert_eq!(payload.started_at, "2025-04-30T08:00:00+02:00");
    }

    #[tokio::test]
    async fn test_log_rejects_end_before_start() {
        let mut api = FakeApi::default();
        let mut prompt = ScriptedPrompt::default();
        let args = LogArgs {
            from: Some("16:00".to_string()),
            to: Some("16:00".to_string()),
            ..log_args("nothing")
        };

        let err = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("End time must be after start time"));
        assert!(api.created_events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_log_project_only_uses_profile_client() {
        let mut api = FakeApi {
            clients: vec![
                client("client-2", "Globex", &[("project-9", "Intranet")]),
                client("client-1", "Acme", &[("project-1", "Website"), ("project-2", "Mobile")]),
            ],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[1], &[], &[]);
        let args = LogArgs {
            project: true,
            ..log_args("app release")
        };

        let payload = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(payload.client, "client-1");
        assert_eq!(payload.client_project, "project-2");
        assert_eq!(prompt.asked, vec!["Choose project".to_string()]);
    }

    #[tokio::test]
    async fn test_log_project_only_fails_when_profile_client_missing() {
        let mut api = FakeApi {
            clients: vec![client("client-2", "Globex", &[("project-9", "Intranet")])],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0], &[], &[]);
        let args = LogArgs {
            project: true,
            ..log_args("app release")
        };

        let err = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("not found in available clients"));
        assert!(api.created_events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_log_client_and_project_menus() {
        let mut api = FakeApi {
            clients: vec![
                client("client-2", "Globex", &[("project-9", "Intranet")]),
                client("client-1", "Acme", &[("project-1", "Website")]),
            ],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0, 0], &[], &[]);
        let args = LogArgs {
            client: true,
            project: true,
            ..log_args("intranet")
        };

        let payload = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(payload.client, "client-2");
        assert_eq!(payload.client_project, "project-9");
        assert_eq!(prompt.asked, vec!["Choose client".to_string(), "Choose project".to_string()]);
    }

    #[tokio::test]
    async fn test_log_client_only_keeps_profile_project() {
        let mut api = FakeApi {
            clients: vec![client("client-2", "Globex", &[("project-9", "Intranet")])],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0], &[], &[]);
        let args = LogArgs {
            client: true,
            ..log_args("call")
        };

        let payload = log::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &args,
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(payload.client, "client-2");
        assert_eq!(payload.client_project, "project-1");
    }

    #[test]
    fn test_unescape_message() {
        assert_eq!(unescape_message("a\\nb\\tc\\rd"), "a\nb\tc\rd");
        assert_eq!(unescape_message("back\\\\slash"), "back\\slash");
        assert_eq!(unescape_message("plain"), "plain");
    }

    // === absence ===

    #[tokio::test]
    async fn test_absence_single_full_day() {
        let mut api = FakeApi {
            options: vec![option("opt-1", "Vacation", "days")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0], &["summer", "16.5.2025"], &[]);

        let payload = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap();

        let expected = AbsencePayload::full_day(
            "opt-1",
            "summer",
            "2025-05-16T00:00:00+02:00".to_string(),
            "2025-05-16T00:00:00+02:00".to_string(),
        );
        assert_eq!(payload, expected);
        assert_eq!(api.created_absences.borrow().as_slice(), &[expected]);
        assert!(!prompt.asked.contains(&"Select absence".to_string()));
    }

    #[tokio::test]
    async fn test_absence_multiple_days_from_menu() {
        let mut api = FakeApi {
            options: vec![
                option("opt-1", "Sick day", "days"),
                option("opt-2", "Vacation", "days"),
            ],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[1, 1], &["", "19.5.2025", "23.5.2025"], &[]);

        let payload = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap();

        match payload {
            AbsencePayload::FullDay(body) => {
                assert_eq!(body.user_absence_event_uuid, "opt-2");
                assert_eq!(body.start_date_time, "2025-05-19T00:00:00+02:00");
                assert_eq!(body.end_date_time, "2025-05-23T00:00:00+02:00");
                assert!(body.full_day);
                assert!(body.automatically_approve);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_absence_second_half_day() {
        let mut api = FakeApi {
            options: vec![option("opt-3", "Home office", "days_and_half_days")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0, 1], &["dentist", "16.5.2025"], &[]);

        let payload = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap();

        assert_eq!(
            payload,
            AbsencePayload::half_day("opt-3", "dentist", "2025-05-16T00:00:00+02:00".to_string(), false)
        );
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["fullDay"], false);
        assert_eq!(body["day_type"], "half_day");
        assert!(body["end_date_time"].is_null());
    }

    #[tokio::test]
    async fn test_absence_half_day_option_as_full_day() {
        let mut api = FakeApi {
            options: vec![option("opt-3", "Home office", "days_and_half_days")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[1, 0], &["", "16.5.2025"], &[]);

        let payload = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap();

        assert!(matches!(payload, AbsencePayload::FullDay(_)));
    }

    #[tokio::test]
    async fn test_absence_in_hours() {
        let mut api = FakeApi {
            options: vec![option("opt-4", "Doctor", "hours")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[], &["checkup", "16.5.2025", "12:30", "2.5"], &[]);

        let payload = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap();

        match payload {
            AbsencePayload::HourlyHalfDay(body) => {
                assert_eq!(body.start_date_time, "2025-05-16T12:30:00+02:00");
                assert_eq!(body.duration, 2.5);
                assert!(!body.automatically_approve);
                assert_eq!(body.end_date_time, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_absence_rejects_bad_duration() {
        let mut api = FakeApi {
            options: vec![option("opt-4", "Doctor", "hours")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[], &["checkup", "16.5.2025", "12:30", "two"], &[]);

        let err = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SloneekError>(),
            Some(SloneekError::InvalidFormat(_))
        ));
        assert!(api.created_absences.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_absence_unknown_unit() {
        let mut api = FakeApi {
            options: vec![option("opt-5", "Sabbatical", "weeks")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[], &["long break"], &[]);

        let err = absence::run(&mut api, &mut prompt, &test_profile(), &Zone::default())
            .await
            .unwrap_err();

        match err.downcast_ref::<SloneekError>() {
            Some(SloneekError::UnknownAbsenceUnit(unit)) => assert_eq!(unit, "weeks"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(api.created_absences.borrow().is_empty());
    }

    // === cancel ===

    #[tokio::test]
    async fn test_absence_cancel_sorted_and_confirmed() {
        let mut api = FakeApi {
            absences: vec![
                absence("later", "2025-06-02T00:00:00+02:00", "2025-06-06T23:59:59+02:00"),
                absence("sooner", "2025-05-20T08:00:00+02:00", "2025-05-20T16:00:00+02:00"),
            ],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0], &[], &[true]);

        let cancelled = absence_cancel::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(cancelled.as_deref(), Some("sooner"));
        assert_eq!(api.cancelled.borrow().as_slice(), &["sooner".to_string()]);

        let queries = api.queries.borrow();
        assert_eq!(queries[0].interval_starting_at, "2025-05-15T00:00:00+02:00");
        assert_eq!(queries[0].interval_ending_at, "2025-12-31T23:59:59+01:00");
        assert_eq!(queries[0].users_uuids, Some(vec!["user-1".to_string()]));
    }

    #[tokio::test]
    async fn test_absence_cancel_declined() {
        let mut api = FakeApi {
            absences: vec![absence("a1", "2025-05-20T08:00:00+02:00", "2025-05-20T16:00:00+02:00")],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[0], &[], &[false]);

        let cancelled = absence_cancel::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(cancelled, None);
        assert!(api.cancelled.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_absence_cancel_with_nothing_to_cancel() {
        let mut api = FakeApi::default();
        let mut prompt = ScriptedPrompt::default();

        let cancelled = absence_cancel::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(cancelled, None);
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_absence_labels() {
        let zone = Zone::default();
        let single = absence("a1", "2025-05-20T08:00:00+02:00", "2025-05-20T16:00:00+02:00");
        let multi = absence("a2", "2025-06-02T00:00:00+02:00", "2025-06-06T23:59:59+02:00");

        assert_eq!(absence_cancel::absence_label(&single, &zone), "20.05.2025 | Vacation");
        assert_eq!(absence_cancel::absence_label(&multi, &zone), "02.06.2025 - 06.06.2025 | Vacation");
    }

    #[tokio::test]
    async fn test_log_cancel_picks_from_sorted_month() {
        let mut api = FakeApi {
            scheduled: vec![
                worklog("w2", "2025-05-14T08:00:00+02:00", "2025-05-14T16:00:00+02:00"),
                worklog("w1", "2025-05-02T08:00:00+02:00", "2025-05-02T12:00:00+02:00"),
            ],
            ..Default::default()
        };
        let mut prompt = ScriptedPrompt::new(&[1], &[], &[true]);

        let cancelled = log_cancel::run(
            &mut api,
            &mut prompt,
            &test_profile(),
            &Zone::default(),
            prague(2025, 5, 15, 10, 0),
        )
        .await
        .unwrap();

        assert_eq!(cancelled.as_deref(), Some("w2"));
        let queries = api.queries.borrow();
        assert_eq!(queries[0].interval_starting_at, "2025-05-01T00:00:00+02:00");
        assert_eq!(queries[0].interval_ending_at, "2025-05-31T23:59:59+02:00");
    }

    #[test]
    fn test_worklog_labels() {
        let zone = Zone::default();
        let full = worklog("w1", "2025-05-14T08:00:00+02:00", "2025-05-14T16:00:00+02:00");
        let bare = ScheduledEvent {
            client: None,
            client_project: None,
            message: None,
            ..full.clone()
        };

        assert_eq!(
            log_cancel::worklog_label(&full, &zone),
            "14.05.2025 08:00 - 16:00 | Acme | Website | standup"
        );
        assert_eq!(
            log_cancel::worklog_label(&bare, &zone),
            "14.05.2025 08:00 - 16:00 | No client | No project | "
        );
    }

    // === list ===

    #[tokio::test]
    async fn test_list_fetches_both_calendars_for_month() {
        let api = FakeApi {
            scheduled: vec![worklog("w1", "2025-05-14T08:00:00+02:00", "2025-05-14T16:00:00+02:00")],
            absences: vec![absence("a1", "2025-05-13T08:00:00+02:00", "2025-05-13T16:00:00+02:00")],
            ..Default::default()
        };

        let summary = list::fetch_summary(&api, &test_profile(), &Zone::default(), prague(2025, 5, 15, 10, 0))
            .await
            .unwrap();

        assert_eq!(summary.work_count, 1);
        assert_eq!(summary.absence_count, 1);
        assert_eq!(summary.work_minutes, 480);
        assert_eq!(summary.absence_minutes, 450);

        let queries = api.queries.borrow();
        assert_eq!(queries.len(), 2);
        for query in queries.iter() {
            assert_eq!(query.interval_starting_at, "2025-05-01T00:00:00+02:00");
            assert_eq!(query.interval_ending_at, "2025-05-31T23:59:59+02:00");
            assert_eq!(query.users_uuids, Some(vec!["user-1".to_string()]));
            assert_eq!(query.quick_filter, None);
        }
        assert!(queries.iter().any(|q| q.planning_events_uuids == Some(vec!["pe-1".to_string()])));
        assert!(queries.iter().any(|q| q.planning_events_uuids.is_none()));
    }

    // === profile ===

    fn two_profiles() -> ConfigStore {
        let mut store = ConfigStore::default();
        store.upsert(None, test_profile());
        store.upsert(Some("work"), test_profile());
        store
    }

    #[test]
    fn test_profile_remove_named() {
        let mut store = two_profiles();
        let mut prompt = ScriptedPrompt::default();

        let removal = profile::remove(&mut prompt, &mut store, Some("work")).unwrap().unwrap();
        assert_eq!(removal.name, "work");
        assert_eq!(removal.renamed, None);
        assert_eq!(store.names(), vec![DEFAULT_PROFILE.to_string()]);
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_profile_remove_unknown_name() {
        let mut store = two_profiles();
        let mut prompt = ScriptedPrompt::default();

        let err = profile::remove(&mut prompt, &mut store, Some("home")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SloneekError>(),
            Some(SloneekError::ProfileNotFound(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_profile_remove_from_menu_renames_survivor() {
        let mut store = two_profiles();
        let mut prompt = ScriptedPrompt::new(&[0], &[], &[true]);

        let removal = profile::remove(&mut prompt, &mut store, None).unwrap().unwrap();
        assert_eq!(removal.name, DEFAULT_PROFILE);
        assert_eq!(removal.renamed.as_deref(), Some("work"));
        assert_eq!(store.names(), vec![DEFAULT_PROFILE.to_string()]);
    }

    #[test]
    fn test_profile_remove_cancelled() {
        let mut store = two_profiles();
        let mut prompt = ScriptedPrompt::new(&[1], &[], &[false]);

        assert!(profile::remove(&mut prompt, &mut store, None).unwrap().is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_profile_remove_from_empty_store() {
        let mut store = ConfigStore::default();
        let mut prompt = ScriptedPrompt::default();

        assert!(profile::remove(&mut prompt, &mut store, None).unwrap().is_none());
        assert!(prompt.asked.is_empty());
    }

    // === init ===

    fn setup_api() -> FakeApi {
        FakeApi {
            users: vec![User {
                uuid: "user-7".to_string(),
                name: "Petr Svoboda".to_string(),
            }],
            clients: vec![
                client("client-1", "Acme", &[("project-1", "Website")]),
                client("client-2", "Globex", &[("project-8", "CRM"), ("project-9", "Intranet")]),
            ],
            planning_events: vec![UserPlanningEvent {
                uuid: "upe-7".to_string(),
                planning_event: PlanningEvent {
                    uuid: "pe-7".to_string(),
                    display_name: "Project work".to_string(),
                },
            }],
            categories: vec![
                PlanningCategory {
                    uuid: "cat-1".to_string(),
                    name: "Development".to_string(),
                },
                PlanningCategory {
                    uuid: "cat-2".to_string(),
                    name: "Meetings".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_init_first_profile_becomes_default() {
        let mut api = setup_api();
        let mut prompt = ScriptedPrompt::new(&[1, 1], &["petr@example.com", "", ""], &[true, false]);
        prompt.passwords.push_back("hunter2".to_string());

        let setup = init::run(&mut api, &mut prompt, None, Some("work"), "2025-05-15T08:00:00.000Z".to_string())
            .await
            .unwrap();

        assert_eq!(setup.name, DEFAULT_PROFILE);
        assert_eq!(setup.store.names(), vec![DEFAULT_PROFILE.to_string()]);
        assert_eq!(api.logins, vec!["petr@example.com".to_string()]);

        let profile = setup.store.resolve(None).unwrap();
        assert_eq!(profile, &setup.profile);
        assert_eq!(profile.credentials.password, "hunter2");
        assert_eq!(profile.user, named("user-7", "Petr Svoboda"));
        assert_eq!(profile.client, named("client-2", "Globex"));
        assert_eq!(profile.project, named("project-9", "Intranet"));
        assert_eq!(profile.planning_event.uuid, "upe-7");
        assert_eq!(profile.planning_event.detail_uuid, "pe-7");
        assert_eq!(profile.categories, Some(vec![named("cat-1", "Development")]));
        assert_eq!(profile.work_hours, WorkHours::default());
        assert_eq!(profile.timestamp, "2025-05-15T08:00:00.000Z");
    }

    #[tokio::test]
    async fn test_init_adds_named_profile_to_existing_store() {
        let mut api = setup_api();
        let mut prompt = ScriptedPrompt::new(
            &[1, 0, 0],
            &["home", "petr@example.com", "9:00", "17:30"],
            &[false, false],
        );
        prompt.passwords.push_back("hunter2".to_string());
        let mut existing = ConfigStore::default();
        existing.upsert(None, test_profile());

        let setup = init::run(&mut api, &mut prompt, Some(existing), None, "now".to_string())
            .await
            .unwrap();

        assert_eq!(setup.name, "home");
        assert_eq!(setup.store.names(), vec![DEFAULT_PROFILE.to_string(), "home".to_string()]);
        assert_eq!(setup.store.resolve(None).unwrap(), &test_profile());

        let home = setup.store.resolve(Some("home")).unwrap();
        assert_eq!(home.categories, None);
        assert_eq!(home.work_hours.start, "9:00");
        assert_eq!(home.work_hours.end, "17:30");
    }

    #[tokio::test]
    async fn test_init_overwrites_default_by_name() {
        let mut api = setup_api();
        let mut prompt = ScriptedPrompt::new(&[0, 0], &["petr@example.com", "", ""], &[true, true]);
        prompt.passwords.push_back("hunter2".to_string());
        let mut existing = ConfigStore::default();
        existing.upsert(None, test_profile());

        let setup = init::run(&mut api, &mut prompt, Some(existing), Some(DEFAULT_PROFILE), "now".to_string())
            .await
            .unwrap();

        assert_eq!(setup.store.len(), 1);
        let profile = setup.store.resolve(None).unwrap();
        assert_eq!(profile.credentials.email, "petr@example.com");
        assert_eq!(profile.categories.as_ref().map(Vec::len), Some(2));
        assert!(!prompt.asked.iter().any(|p| p.contains("already exists")));
    }

    #[tokio::test]
    async fn test_init_rejects_invalid_work_hours() {
        let mut api = setup_api();
        let mut prompt = ScriptedPrompt::new(&[0, 0], &["petr@example.com", "25:00"], &[false, false]);
        prompt.passwords.push_back("hunter2".to_string());

        let err = init::run(&mut api, &mut prompt, None, None, "now".to_string())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SloneekError>(),
            Some(SloneekError::InvalidFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_prompt_abort_propagates() {
        let mut api = setup_api();
        let mut prompt = ScriptedPrompt::default();

        let err = init::run(&mut api, &mut prompt, None, None, "now".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<SloneekError>(), Some(SloneekError::Aborted)));
        assert!(api.logins.is_empty());
    }
}
