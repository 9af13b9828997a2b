use super::{load_profile, login};
use crate::{
    api::{types::CalendarQuery, Api, Sloneek},
    libs::{
        config::Profile,
        event::{format_hours, other_users_today, EventSummary},
        messages::Message,
        time::{LocalTime, Zone},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show today's absences of other people instead of your own month
    #[arg(short, long)]
    other: bool,
    /// Keep only teams whose name contains this text (with --other)
    #[arg(short, long, default_value = "")]
    team_prefix: String,
}

pub async fn cmd(args: ListArgs, profile_name: Option<&str>) -> Result<()> {
    let profile = load_profile(profile_name)?;
    let zone = Zone::from_env()?;
    let mut api = Sloneek::from_env();

    login(&mut api, &profile.credentials).await?;
    if args.other {
        show_other_users(&api, &args.team_prefix, &zone, zone.now()).await
    } else {
        show_current_user(&api, &profile, &zone, zone.now()).await
    }
}

async fn show_current_user<A: Api>(api: &A, profile: &Profile, zone: &Zone, now: LocalTime) -> Result<()> {
    msg_info!(Message::FetchingEvents(now.format("%B %Y").to_string()));
    let summary = fetch_summary(api, profile, zone, now).await?;

    if summary.is_empty() {
        msg_print!(Message::NoEventsFound);
        return Ok(());
    }

    msg_print!(
        Message::EventsFound {
            total: summary.events.len(),
            work: summary.work_count,
            absence: summary.absence_count,
        },
        true
    );
    View::events(&summary.rows());
    msg_print!(
        Message::EventsTotal {
            total: summary.events.len(),
            work: summary.work_count,
            absence: summary.absence_count,
        },
        true
    );
    msg_print!(Message::HoursTotal {
        work: format_hours(summary.work_minutes),
        absence: format_hours(summary.absence_minutes),
    });
    Ok(())
}

/// Fetches the month of `now` for the profile's user and merges worklogs
/// with absences. Both calendars are requested concurrently.
pub async fn fetch_summary<A: Api>(api: &A, profile: &Profile, zone: &Zone, now: LocalTime) -> Result<EventSummary> {
    let window = zone.current_month_at(now)?;

    let scheduled_query = CalendarQuery {
        interval_starting_at: window.iso_start(),
        interval_ending_at: window.iso_end(),
        users_uuids: Some(vec![profile.user.uuid.clone()]),
        ..Default::default()
    };
    let absence_query = CalendarQuery {
        planning_events_uuids: Some(vec![profile.planning_event.detail_uuid.clone()]),
        ..scheduled_query.clone()
    };

    let (scheduled, absences) = tokio::try_join!(api.scheduled_events(&scheduled_query), api.absences(&absence_query))?;
    tracing::debug!(scheduled = scheduled.len(), absences = absences.len(), "fetched calendar");

    Ok(EventSummary::aggregate(&scheduled, &absences, zone)?)
}

async fn show_other_users<A: Api>(api: &A, team_prefix: &str, zone: &Zone, now: LocalTime) -> Result<()> {
    let window = zone.current_day_at(now)?;
    let query = CalendarQuery {
        interval_starting_at: window.iso_start(),
        interval_ending_at: window.iso_end(),
        ..Default::default()
    };

    let absences = api.absences(&query).await?;
    if absences.is_empty() {
        msg_print!(Message::NoAbsencesFound);
        return Ok(());
    }

    let rows = other_users_today(&absences, team_prefix, window.start.date_naive(), zone);
    View::other_users(&rows, &window.start.format("%d.%m.%Y %a").to_string());
    Ok(())
}
