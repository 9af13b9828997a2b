use super::{choose, load_profile, login};
use crate::{
    api::{
        types::{Client, EventPayload, Project},
        Api, Sloneek,
    },
    libs::{
        config::Profile,
        messages::Message,
        prompt::{Prompt, Terminal},
        time::{duration_minutes, parse_clock, parse_explicit_day, to_iso, to_iso_millis, LocalTime, Zone},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Worklog message, `\n` `\t` `\r` and `\\` escapes are expanded
    #[arg(short, long)]
    pub message: String,
    /// Start time (HH:MM), defaults to the profile's work start
    #[arg(short, long, value_parser = clock_arg)]
    pub from: Option<String>,
    /// End time (HH:MM), defaults to the profile's work end
    #[arg(short, long, value_parser = clock_arg)]
    pub to: Option<String>,
    /// Day in the current year (DD.MM or DD.MM.), defaults to today
    #[arg(short, long, value_parser = day_arg, conflicts_with = "yesterday")]
    pub day: Option<String>,
    /// Log the worklog for yesterday
    #[arg(short, long)]
    pub yesterday: bool,
    /// Pick the client interactively
    #[arg(short, long)]
    pub client: bool,
    /// Pick the project interactively
    #[arg(short, long)]
    pub project: bool,
}

fn clock_arg(value: &str) -> Result<String, String> {
    parse_clock(value).map(|_| value.to_string()).map_err(|e| e.to_string())
}

fn day_arg(value: &str) -> Result<String, String> {
    // leap year so that 29.02 passes here and is checked against the real year later
    parse_explicit_day(value, 2024)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

pub async fn cmd(args: LogArgs, profile_name: Option<&str>) -> Result<()> {
    let profile = load_profile(profile_name)?;
    let zone = Zone::from_env()?;
    let mut api = Sloneek::from_env();
    let mut prompt = Terminal::new();

    run(&mut api, &mut prompt, &profile, &args, &zone, zone.now()).await?;
    Ok(())
}

/// Creates one worklog and returns the body that was sent.
pub async fn run<A: Api, P: Prompt>(
    api: &mut A,
    prompt: &mut P,
    profile: &Profile,
    args: &LogArgs,
    zone: &Zone,
    now: LocalTime,
) -> Result<EventPayload> {
    login(api, &profile.credentials).await?;

    let (client, project) = if args.client || args.project {
        choose_client_project(api, prompt, profile, args.client, args.project).await?
    } else {
        (None, None)
    };
    let (client_uuid, client_name) = match &client {
        Some(client) => (client.uuid.clone(), client.name.clone()),
        None => (profile.client.uuid.clone(), profile.client.name.clone()),
    };
    let (project_uuid, project_name) = match &project {
        Some(project) => (project.uuid.clone(), project.project_name.clone()),
        None => (profile.project.uuid.clone(), profile.project.name.clone()),
    };

    let start_time = args.from.as_deref().unwrap_or(&profile.work_hours.start);
    let end_time = args.to.as_deref().unwrap_or(&profile.work_hours.end);
    let reference = if args.yesterday { now - Duration::days(1) } else { now };

    let start = zone.combine_day_and_time(args.day.as_deref(), start_time, reference)?;
    let end = zone.combine_day_and_time(args.day.as_deref(), end_time, reference)?;
    if end <= start {
        msg_bail_anyhow!(Message::EndNotAfterStart);
    }

    let message = unescape_message(&args.message);
    let payload = worklog_payload(profile, &client_uuid, &project_uuid, &message, start, end, zone)?;

    msg_info!(Message::CreatingEvent {
        user: profile.user.name.clone(),
        client: client_name,
        project: project_name,
        time: format!("{} - {}", start_time, end_time),
        date: start.format("%d.%m.%Y").to_string(),
        message: message.clone(),
    });
    api.create_event(&payload).await?;
    msg_success!(Message::EventCreated);

    Ok(payload)
}

/// Builds the worklog body for a `[start, end)` span.
///
/// `duration_time` encodes the duration as an instant: the local midnight
/// of the day before `start` plus `duration` minutes.
pub fn worklog_payload(
    profile: &Profile,
    client_uuid: &str,
    project_uuid: &str,
    message: &str,
    start: LocalTime,
    end: LocalTime,
    zone: &Zone,
) -> Result<EventPayload> {
    let duration = duration_minutes(&start, &end);
    let day_before = zone.midnight(start.date_naive() - Duration::days(1))?;
    let duration_time = day_before + Duration::minutes(duration);

    Ok(EventPayload {
        is_repeat: false,
        user_planning_event_uuid: profile.planning_event.uuid.clone(),
        planning_categories: profile
            .categories
            .iter()
            .flatten()
            .map(|category| category.uuid.clone())
            .collect(),
        started_at: to_iso(&start),
        ended_at: to_iso(&end),
        start_time: start.format("%H:%M:%S%:z").to_string(),
        end_time: end.format("%H:%M:%S%:z").to_string(),
        days: Vec::new(),
        duration_time: to_iso_millis(&duration_time),
        duration,
        timezone: to_iso_millis(&start),
        note: message.to_string(),
        is_automatically_approve: false,
        message: message.to_string(),
        mentions: Vec::new(),
        client: client_uuid.to_string(),
        client_project: project_uuid.to_string(),
        user_uuid: profile.user.uuid.clone(),
    })
}

/// Expands the escapes a shell leaves in a quoted message.
pub fn unescape_message(message: &str) -> String {
    message
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\\\", "\\")
}

/// Interactive client and/or project choice.
///
/// With only `select_project`, projects come from the profile's client,
/// which must be among the clients offered to the user.
pub async fn choose_client_project<A: Api, P: Prompt>(
    api: &A,
    prompt: &mut P,
    profile: &Profile,
    select_client: bool,
    select_project: bool,
) -> Result<(Option<Client>, Option<Project>)> {
    msg_info!(Message::FetchingClients);
    let clients = api.clients(&profile.user.uuid).await?;
    let client_names: Vec<String> = clients.iter().map(|c| c.name.clone()).collect();

    let mut client = None;
    if select_client {
        let index = choose(prompt, Message::ChooseClient, &client_names)?;
        client = Some(clients[index].clone());
    }

    if !select_project {
        return Ok((client, None));
    }

    let source = if !select_client && !profile.client.uuid.is_empty() {
        let Some(configured) = clients.iter().find(|c| c.uuid == profile.client.uuid) else {
            msg_bail_anyhow!(Message::ConfigClientNotOffered(profile.client.name.clone()));
        };
        msg_info!(Message::UsingConfigClient(configured.name.clone()));
        configured.clone()
    } else if let Some(client) = &client {
        client.clone()
    } else if clients.len() > 1 {
        let index = choose(prompt, Message::ChooseClientForProject, &client_names)?;
        clients[index].clone()
    } else {
        let Some(only) = clients.first() else {
            msg_bail_anyhow!(Message::NothingToChoose(Message::ChooseClient.to_string()));
        };
        only.clone()
    };

    let project_names: Vec<String> = source.projects.iter().map(|p| p.project_name.clone()).collect();
    let index = choose(prompt, Message::ChooseProject, &project_names)?;
    let project = source.projects[index].clone();

    Ok((client.or(Some(source)), Some(project)))
}
