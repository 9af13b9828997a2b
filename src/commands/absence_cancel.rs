use super::{choose, load_profile, login};
use crate::{
    api::{
        types::{Absence, CalendarQuery},
        Api, Sloneek,
    },
    libs::{
        config::Profile,
        event::NOT_AVAILABLE,
        messages::Message,
        prompt::{Prompt, Terminal},
        time::{LocalTime, Zone},
    },
    msg_success, msg_warning,
};
use anyhow::Result;

pub async fn cmd(profile_name: Option<&str>) -> Result<()> {
    let profile = load_profile(profile_name)?;
    let zone = Zone::from_env()?;
    let mut api = Sloneek::from_env();
    let mut prompt = Terminal::new();

    run(&mut api, &mut prompt, &profile, &zone, zone.now()).await?;
    Ok(())
}

/// Cancels one of the user's absences between today and the end of the
/// year. Returns the uuid of the cancelled absence, `None` when there was
/// nothing to cancel or the operator backed out.
pub async fn run<A: Api, P: Prompt>(
    api: &mut A,
    prompt: &mut P,
    profile: &Profile,
    zone: &Zone,
    now: LocalTime,
) -> Result<Option<String>> {
    login(api, &profile.credentials).await?;

    let window = zone.today_to_end_of_year_at(now)?;
    let query = CalendarQuery {
        interval_starting_at: window.iso_start(),
        interval_ending_at: window.iso_end(),
        users_uuids: Some(vec![profile.user.uuid.clone()]),
        ..Default::default()
    };

    let mut absences = api.absences(&query).await?;
    absences.sort_by_key(|a| a.started_at);

    if absences.is_empty() {
        msg_success!(Message::NoAbsencesToCancel, true);
        return Ok(None);
    }

    let labels: Vec<String> = absences.iter().map(|a| absence_label(a, zone)).collect();
    let index = choose(prompt, Message::SelectAbsenceToCancel, &labels)?;
    let selected = &absences[index];

    if !prompt.confirm(&Message::ConfirmCancelAbsence.to_string(), true)? {
        msg_warning!(Message::ActionAborted, true);
        return Ok(None);
    }

    api.cancel_absence(&selected.uuid).await?;
    msg_success!(Message::AbsenceCancelled, true);
    Ok(Some(selected.uuid.clone()))
}

/// `dd.mm.yyyy | name`, or `dd.mm.yyyy - dd.mm.yyyy | name` when the absence
/// spans several days.
pub fn absence_label(absence: &Absence, zone: &Zone) -> String {
    let start = zone.localize(&absence.started_at).format("%d.%m.%Y").to_string();
    let end = zone.localize(&absence.ended_at).format("%d.%m.%Y").to_string();
    let range = if start == end { start } else { format!("{} - {}", start, end) };

    format!("{} | {}", range, absence.name().unwrap_or(NOT_AVAILABLE))
}
