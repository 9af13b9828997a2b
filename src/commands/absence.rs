use super::{choose, load_profile, login};
use crate::{
    api::{
        types::{AbsenceOption, AbsencePayload, AbsenceUnit},
        Api, Sloneek,
    },
    libs::{
        config::Profile,
        error::SloneekError,
        messages::Message,
        prompt::{Prompt, Terminal},
        time::{to_iso, Zone},
    },
    msg_info, msg_success,
};
use anyhow::Result;

pub async fn cmd(profile_name: Option<&str>) -> Result<()> {
    let profile = load_profile(profile_name)?;
    let zone = Zone::from_env()?;
    let mut api = Sloneek::from_env();
    let mut prompt = Terminal::new();

    run(&mut api, &mut prompt, &profile, &zone).await?;
    Ok(())
}

/// Requests one absence and returns the body that was sent.
pub async fn run<A: Api, P: Prompt>(api: &mut A, prompt: &mut P, profile: &Profile, zone: &Zone) -> Result<AbsencePayload> {
    login(api, &profile.credentials).await?;
    msg_success!(Message::LoginSuccessful);

    let option = choose_absence_option(api, prompt).await?;
    msg_success!(Message::UsingAbsence(option.absence_event.display_name.clone()));

    let message = prompt.input(&Message::PromptAbsenceMessage.to_string(), None)?;

    let payload = match option.unit() {
        Some(AbsenceUnit::Days) => full_day(prompt, &option, &message, zone)?,
        Some(AbsenceUnit::DaysAndHalfDays) => half_day(prompt, &option, &message, zone)?,
        Some(AbsenceUnit::Hours) => hourly(prompt, &option, &message, zone)?,
        None => return Err(SloneekError::UnknownAbsenceUnit(option.absence_event.unit_type.clone()).into()),
    };

    msg_info!(Message::CreatingAbsence);
    api.create_absence(&payload).await?;
    msg_success!(Message::AbsenceCreated, true);

    Ok(payload)
}

/// The only option when there is one, otherwise a menu.
async fn choose_absence_option<A: Api, P: Prompt>(api: &A, prompt: &mut P) -> Result<AbsenceOption> {
    msg_info!(Message::FetchingAbsenceOptions);
    let mut options = api.absence_options().await?;
    if options.len() == 1 {
        return Ok(options.remove(0));
    }

    let names: Vec<String> = options.iter().map(|o| o.absence_event.display_name.clone()).collect();
    let index = choose(prompt, Message::SelectAbsence, &names)?;
    Ok(options.swap_remove(index))
}

fn full_day<P: Prompt>(prompt: &mut P, option: &AbsenceOption, message: &str, zone: &Zone) -> Result<AbsencePayload> {
    let span = [Message::SingleDay.to_string(), Message::MultipleDays.to_string()];
    let single = choose(prompt, Message::PromptSingleOrMultiple, &span)? == 0;

    let from = prompt.input(&Message::PromptStartDay.to_string(), None)?;
    let start = to_iso(&zone.full_date_to_local(&from)?);
    let end = if single {
        start.clone()
    } else {
        let to = prompt.input(&Message::PromptEndDay.to_string(), None)?;
        to_iso(&zone.full_date_to_local(&to)?)
    };

    Ok(AbsencePayload::full_day(&option.uuid, message, start, end))
}

fn half_day<P: Prompt>(prompt: &mut P, option: &AbsenceOption, message: &str, zone: &Zone) -> Result<AbsencePayload> {
    let length = [Message::HalfDay.to_string(), Message::FullDay.to_string()];
    if choose(prompt, Message::PromptHalfOrFullDay, &length)? == 1 {
        return full_day(prompt, option, message, zone);
    }

    let halves = [Message::FirstHalfOfDay.to_string(), Message::SecondHalfOfDay.to_string()];
    let first_half = choose(prompt, Message::PromptHalfOfDay, &halves)? == 0;

    let from = prompt.input(&Message::PromptStartDay.to_string(), None)?;
    let start = to_iso(&zone.full_date_to_local(&from)?);

    Ok(AbsencePayload::half_day(&option.uuid, message, start, first_half))
}

fn hourly<P: Prompt>(prompt: &mut P, option: &AbsenceOption, message: &str, zone: &Zone) -> Result<AbsencePayload> {
    let from = prompt.input(&Message::PromptStartDay.to_string(), None)?;
    let time = prompt.input(&Message::PromptAbsenceStartTime.to_string(), None)?;
    let start = to_iso(&zone.combine_full_date_and_time(&from, &time)?);

    let duration = prompt.input(&Message::PromptDurationHours.to_string(), None)?;
    let hours = match duration.trim().parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours > 0.0 => hours,
        _ => return Err(SloneekError::invalid_format(Message::InvalidDurationHours(duration).to_string()).into()),
    };

    Ok(AbsencePayload::hourly(&option.uuid, message, start, hours))
}
