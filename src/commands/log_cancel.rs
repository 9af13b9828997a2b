use super::{choose, load_profile, login};
use crate::{
    api::{
        types::{CalendarQuery, ScheduledEvent},
        Api, Sloneek,
    },
    libs::{
        config::Profile,
        messages::Message,
        prompt::{Prompt, Terminal},
        time::{LocalTime, Zone},
    },
    msg_success, msg_warning,
};
use anyhow::Result;

const NO_CLIENT: &str = "No client";
const NO_PROJECT: &str = "No project";

pub async fn cmd(profile_name: Option<&str>) -> Result<()> {
    let profile = load_profile(profile_name)?;
    let zone = Zone::from_env()?;
    let mut api = Sloneek::from_env();
    let mut prompt = Terminal::new();

    run(&mut api, &mut prompt, &profile, &zone, zone.now()).await?;
    Ok(())
}

/// Cancels one of the user's worklogs from the month of `now`.
pub async fn run<A: Api, P: Prompt>(
    api: &mut A,
    prompt: &mut P,
    profile: &Profile,
    zone: &Zone,
    now: LocalTime,
) -> Result<Option<String>> {
    login(api, &profile.credentials).await?;

    let window = zone.current_month_at(now)?;
    let query = CalendarQuery {
        interval_starting_at: window.iso_start(),
        interval_ending_at: window.iso_end(),
        users_uuids: Some(vec![profile.user.uuid.clone()]),
        ..Default::default()
    };

    let mut worklogs = api.scheduled_events(&query).await?;
    worklogs.sort_by_key(|w| w.started_at);

    if worklogs.is_empty() {
        msg_success!(Message::NoWorklogsToCancel, true);
        return Ok(None);
    }

    let labels: Vec<String> = worklogs.iter().map(|w| worklog_label(w, zone)).collect();
    let index = choose(prompt, Message::SelectWorklogToCancel, &labels)?;
    let selected = &worklogs[index];

    if !prompt.confirm(&Message::ConfirmCancelWorklog.to_string(), true)? {
        msg_warning!(Message::ActionAborted, true);
        return Ok(None);
    }

    api.cancel_event(&selected.uuid).await?;
    msg_success!(Message::WorklogCancelled, true);
    Ok(Some(selected.uuid.clone()))
}

/// `dd.mm.yyyy HH:MM - HH:MM | client | project | message`
pub fn worklog_label(worklog: &ScheduledEvent, zone: &Zone) -> String {
    let start = zone.localize(&worklog.started_at);
    let end = zone.localize(&worklog.ended_at);

    format!(
        "{} - {} | {} | {} | {}",
        start.format("%d.%m.%Y %H:%M"),
        end.format("%H:%M"),
        worklog.client.as_ref().map(|c| c.name.as_str()).unwrap_or(NO_CLIENT),
        worklog
            .client_project
            .as_ref()
            .map(|p| p.project_name.as_str())
            .unwrap_or(NO_PROJECT),
        worklog.message.as_deref().unwrap_or("")
    )
}
