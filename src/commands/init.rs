use super::{choose, login};
use crate::{
    api::{Api, Sloneek},
    libs::{
        config::{ConfigStore, Credentials, Named, PlanningEventRef, Profile, WorkHours, DEFAULT_PROFILE},
        messages::Message,
        prompt::{Prompt, Terminal},
        time::parse_clock,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};

const NEW_PROFILE_NAME: &str = "profile1";

/// Result of a completed setup, not yet written to disk.
#[derive(Debug, Clone)]
pub struct Setup {
    pub name: String,
    pub profile: Profile,
    pub store: ConfigStore,
}

pub async fn cmd(profile_name: Option<&str>) -> Result<()> {
    msg_print!(Message::SetupHeader, true);

    let existing = if ConfigStore::exists() {
        msg_info!(Message::ReadingConfig(ConfigStore::path().display().to_string()));
        Some(ConfigStore::read()?)
    } else {
        None
    };

    let mut api = Sloneek::from_env();
    let mut prompt = Terminal::new();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let setup = run(&mut api, &mut prompt, existing, profile_name, timestamp).await?;

    msg_info!(Message::WritingConfig(ConfigStore::path().display().to_string()));
    setup.store.save()?;
    msg_success!(Message::ConfigSaved, true);

    let profile = &setup.profile;
    let categories = profile
        .categories
        .as_ref()
        .map(|c| c.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", "));
    msg_print!(Message::SetupSummary {
        profile: setup.name.clone(),
        user: profile.user.name.clone(),
        client: profile.client.name.clone(),
        project: profile.project.name.clone(),
        categories,
        work_hours: format!("{} - {}", profile.work_hours.start, profile.work_hours.end),
    });
    msg_success!(Message::SetupCompleted, true);
    Ok(())
}

/// Walks the operator through creating a profile and returns the store with
/// the profile upserted.
///
/// Without an existing store the profile always becomes `_default`.
pub async fn run<A: Api, P: Prompt>(
    api: &mut A,
    prompt: &mut P,
    existing: Option<ConfigStore>,
    profile_name: Option<&str>,
    timestamp: String,
) -> Result<Setup> {
    let name = match &existing {
        Some(_) => target_profile(prompt, profile_name)?,
        None => DEFAULT_PROFILE.to_string(),
    };

    let credentials = Credentials {
        email: prompt.input(&Message::PromptEmail.to_string(), None)?,
        password: prompt.password(&Message::PromptPassword.to_string())?,
    };
    login(api, &credentials).await?;
    msg_success!(Message::LoginSuccessful, true);

    msg_info!(Message::FetchingUsers);
    let users = api.users().await?;
    let user = if users.len() == 1 {
        msg_success!(Message::UsingUser(users[0].name.clone()));
        users[0].clone()
    } else {
        let names: Vec<String> = users.iter().map(|u| u.name.clone()).collect();
        users[choose(prompt, Message::SelectUser, &names)?].clone()
    };

    msg_info!(Message::FetchingClients);
    let clients = api.clients(&user.uuid).await?;
    let names: Vec<String> = clients.iter().map(|c| c.name.clone()).collect();
    let client = &clients[choose(prompt, Message::ChooseClient, &names)?];

    let names: Vec<String> = client.projects.iter().map(|p| p.project_name.clone()).collect();
    let project = &client.projects[choose(prompt, Message::ChooseProject, &names)?];

    msg_info!(Message::FetchingPlanningEvents);
    let events = api.planning_events(&user.uuid).await?;
    let planning_event = if events.len() == 1 {
        events[0].clone()
    } else {
        let names: Vec<String> = events.iter().map(|e| e.planning_event.display_name.clone()).collect();
        events[choose(prompt, Message::ChoosePlanningEvent, &names)?].clone()
    };
    msg_success!(Message::UsingPlanningEvent(planning_event.planning_event.display_name.clone()), true);

    msg_info!(Message::FetchingCategories);
    let mut categories = Vec::new();
    for category in api.categories().await? {
        if prompt.confirm(&Message::IncludeCategory(category.name.clone()).to_string(), true)? {
            categories.push(Named {
                uuid: category.uuid,
                name: category.name,
            });
        }
    }
    if categories.is_empty() {
        msg_warning!(Message::NoCategoriesSelected, true);
    } else {
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        msg_success!(Message::SelectedCategories(names.join(", ")), true);
    }

    let defaults = WorkHours::default();
    let work_hours = WorkHours {
        start: ask_clock(prompt, Message::PromptWorkStart, &defaults.start)?,
        end: ask_clock(prompt, Message::PromptWorkEnd, &defaults.end)?,
    };

    let profile = Profile {
        credentials,
        user: Named {
            uuid: user.uuid.clone(),
            name: user.name.clone(),
        },
        client: Named {
            uuid: client.uuid.clone(),
            name: client.name.clone(),
        },
        project: Named {
            uuid: project.uuid.clone(),
            name: project.project_name.clone(),
        },
        planning_event: PlanningEventRef {
            uuid: planning_event.uuid.clone(),
            detail_uuid: planning_event.planning_event.uuid.clone(),
            name: planning_event.planning_event.display_name.clone(),
        },
        categories: if categories.is_empty() { None } else { Some(categories) },
        work_hours,
        timestamp,
    };

    let mut store = existing.unwrap_or_default();
    store.upsert(Some(&name), profile.clone());

    Ok(Setup { name, profile, store })
}

/// Which profile an existing store should receive the new setup under.
fn target_profile<P: Prompt>(prompt: &mut P, profile_name: Option<&str>) -> Result<String> {
    match profile_name {
        Some(DEFAULT_PROFILE) => {
            msg_success!(Message::WillOverwriteDefault, true);
            Ok(DEFAULT_PROFILE.to_string())
        }
        Some(name) => {
            msg_success!(Message::WillCreateProfile(name.to_string()), true);
            Ok(name.to_string())
        }
        None => {
            let choices = [
                Message::SetupChoiceOverwriteDefault.to_string(),
                Message::SetupChoiceNewProfile.to_string(),
            ];
            if choose(prompt, Message::ConfigExists, &choices)? == 0 {
                msg_success!(Message::WillOverwriteDefault, true);
                return Ok(DEFAULT_PROFILE.to_string());
            }

            let name = prompt.input(&Message::PromptProfileName.to_string(), Some(NEW_PROFILE_NAME))?;
            let name = match name.trim() {
                "" => NEW_PROFILE_NAME.to_string(),
                name => name.to_string(),
            };
            msg_success!(Message::WillCreateProfile(name.clone()), true);
            Ok(name)
        }
    }
}

/// Clock time with a fallback for an empty answer.
fn ask_clock<P: Prompt>(prompt: &mut P, message: Message, default: &str) -> Result<String> {
    let answer = prompt.input(&message.to_string(), Some(default))?;
    let answer = match answer.trim() {
        "" => default.to_string(),
        answer => answer.to_string(),
    };
    parse_clock(&answer)?;
    Ok(answer)
}
