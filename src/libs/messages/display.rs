//! Wording of every [`Message`].
//!
//! Keeping the text in one match makes it easy to review the whole
//! vocabulary of the CLI at once.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ReadingConfig(path) => format!("Reading config from {}", path),
            Message::WritingConfig(path) => format!("Writing config to {}", path),
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::UsingProfile(name) => format!("Using profile: {}", name),
            Message::UsingDefaultProfile => "Using default profile".to_string(),

            // === PROFILE MESSAGES ===
            Message::ProfilesHeader => "Sloneek Profiles:".to_string(),
            Message::ProfileHeader(name) => format!("Profile: {}", name),
            Message::NoProfilesToRemove => "No profiles found to remove.".to_string(),
            Message::SelectProfileToRemove => "Select a profile to remove".to_string(),
            Message::ConfirmRemoveProfile(name) => format!("Are you sure you want to remove the profile \"{}\"?", name),
            Message::ProfileRemovalCancelled => "Profile removal cancelled.".to_string(),
            Message::ProfileRemoved(name) => format!("Profile \"{}\" has been removed.", name),
            Message::ProfileRenamedToDefault(name) => {
                format!("The remaining profile \"{}\" has been renamed to \"_default\".", name)
            }

            // === SETUP MESSAGES ===
            Message::SetupHeader => "Sloneek Configuration Setup".to_string(),
            Message::ConfigExists => "A configuration already exists. Do you want to".to_string(),
            Message::SetupChoiceOverwriteDefault => "Overwrite default profile".to_string(),
            Message::SetupChoiceNewProfile => "Create a new profile".to_string(),
            Message::PromptProfileName => "Enter profile name".to_string(),
            Message::WillOverwriteDefault => "Will overwrite default profile".to_string(),
            Message::WillCreateProfile(name) => format!("Will create/update profile: {}", name),
            Message::PromptEmail => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::FetchingUsers => "Fetching users...".to_string(),
            Message::UsingUser(name) => format!("Using user: {}", name),
            Message::SelectUser => "Select user".to_string(),
            Message::FetchingClients => "Fetching clients...".to_string(),
            Message::ChooseClient => "Choose client".to_string(),
            Message::ChooseProject => "Choose project".to_string(),
            Message::FetchingPlanningEvents => "Fetching planning events...".to_string(),
            Message::UsingPlanningEvent(name) => format!("Using planning event: {}", name),
            Message::ChoosePlanningEvent => "Choose planning event".to_string(),
            Message::FetchingCategories => "Fetching categories...".to_string(),
            Message::IncludeCategory(name) => format!("Include category \"{}\"?", name),
            Message::SelectedCategories(names) => format!("Selected categories: {}", names),
            Message::NoCategoriesSelected => "No categories selected".to_string(),
            Message::PromptWorkStart => "Start time".to_string(),
            Message::PromptWorkEnd => "End time".to_string(),
            Message::SetupSummary {
                profile,
                user,
                client,
                project,
                categories,
                work_hours,
            } => {
                let mut summary = format!(
                    "Configuration Summary:\nProfile: {}\nUser: {}\nClient: {}\nProject: {}\n",
                    profile, user, client, project
                );
                if let Some(categories) = categories {
                    summary.push_str(&format!("Categories: {}\n", categories));
                }
                summary.push_str(&format!("Work Hours: {}", work_hours));
                summary
            }
            Message::SetupCompleted => "Setup completed successfully!".to_string(),

            // === SESSION MESSAGES ===
            Message::LoggingIn => "Logging in...".to_string(),
            Message::LoginSuccessful => "Login successful".to_string(),

            // === LIST MESSAGES ===
            Message::FetchingEvents(month) => format!("Fetching events for {}...", month),
            Message::NoEventsFound => "No events found.".to_string(),
            Message::EventsFound { total, work, absence } => {
                format!("Found {} events ({} work, {} absence):", total, work, absence)
            }
            Message::EventsTotal { total, work, absence } => {
                format!("Total: {} events ({} work, {} absence)", total, work, absence)
            }
            Message::HoursTotal { work, absence } => format!("Hours: {}h work, {}h absence", work, absence),
            Message::NoAbsencesFound => "No absences found.".to_string(),

            // === WORKLOG MESSAGES ===
            Message::UsingConfigClient(name) => format!("Using client from config: {}", name),
            Message::ChooseClientForProject => "Choose client for project selection".to_string(),
            Message::ConfigClientNotOffered(name) => {
                format!("Client from config ({}) not found in available clients", name)
            }
            Message::EndNotAfterStart => "End time must be after start time".to_string(),
            Message::CreatingEvent {
                user,
                client,
                project,
                time,
                date,
                message,
            } => format!(
                "Creating event...\nUser: {}\nClient: {}\nProject: {}\nTime: {}\nDate: {}\nMessage: {}\n",
                user, client, project, time, date, message
            ),
            Message::EventCreated => "Event created successfully!".to_string(),

            // === ABSENCE MESSAGES ===
            Message::FetchingAbsenceOptions => "Fetching absences...".to_string(),
            Message::SelectAbsence => "Select absence".to_string(),
            Message::UsingAbsence(name) => format!("Using absence: {}", name),
            Message::PromptAbsenceMessage => "Absence message".to_string(),
            Message::PromptSingleOrMultiple => "Do you want absence to be single day or multiple days".to_string(),
            Message::SingleDay => "Single day".to_string(),
            Message::MultipleDays => "Multiple days".to_string(),
            Message::PromptHalfOrFullDay => "Select absence half/full day".to_string(),
            Message::HalfDay => "Half day".to_string(),
            Message::FullDay => "Full day".to_string(),
            Message::PromptHalfOfDay => "Select morning/afternoon".to_string(),
            Message::FirstHalfOfDay => "First half of the day (before lunch)".to_string(),
            Message::SecondHalfOfDay => "Second half of the day (after lunch)".to_string(),
            Message::PromptStartDay => "Start day (example 16.5.2025)".to_string(),
            Message::PromptEndDay => "End day (example 16.5.2025)".to_string(),
            Message::PromptAbsenceStartTime => "Start time (example 12:30)".to_string(),
            Message::PromptDurationHours => "Duration in hours".to_string(),
            Message::InvalidDurationHours(value) => format!("{} is not a number of hours", value),
            Message::CreatingAbsence => "Creating absence...".to_string(),
            Message::AbsenceCreated => "Absence created".to_string(),

            // === CANCEL MESSAGES ===
            Message::NoAbsencesToCancel => "You don't have any absences to cancel.".to_string(),
            Message::SelectAbsenceToCancel => "Select an absence to cancel".to_string(),
            Message::ConfirmCancelAbsence => "Are you sure you want to cancel this absence?".to_string(),
            Message::AbsenceCancelled => "Absence cancelled successfully".to_string(),
            Message::NoWorklogsToCancel => "You don't have any worklogs for the current month to cancel.".to_string(),
            Message::SelectWorklogToCancel => "Select a worklog to cancel".to_string(),
            Message::ConfirmCancelWorklog => "Are you sure you want to cancel this worklog?".to_string(),
            Message::WorklogCancelled => "Worklog cancelled successfully".to_string(),
            Message::ActionAborted => "Action aborted by user.".to_string(),

            // === ERROR MESSAGES ===
            Message::NothingToChoose(prompt) => format!("Nothing to choose from: {}", prompt),
        };
        write!(f, "{}", text)
    }
}
