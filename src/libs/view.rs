use super::config::{ConfigStore, Profile};
use super::event::{EventRows, OtherUserRow};
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn events(rows: &EventRows) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["Date", "Time", "Type", "Client/Absence", "Project/Details"]);
        for event in &rows.0 {
            table.add_row(row![event.date, event.time, event.kind, event.client, event.project]);
        }
        table.printstd();
    }

    pub fn other_users(rows: &[OtherUserRow], date: &str) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["Who", "Team", "Date", "Time", "Type", "Ends"]);
        for absence in rows {
            table.add_row(row![absence.who, absence.team, date, absence.time, absence.kind, absence.ends]);
        }
        table.printstd();
    }

    /// All profiles, or only `only` when given.
    pub fn profiles(store: &ConfigStore, only: Option<&str>) {
        let mut table = Table::new();

        table.set_titles(row!["Profile Name", "Email", "Client", "Project", "From", "To"]);
        for (name, profile) in store.profiles.iter().filter(|(name, _)| only.map_or(true, |o| o == name.as_str())) {
            table.add_row(row![
                name,
                profile.credentials.email,
                profile.client.name,
                profile.project.name,
                profile.work_hours.start,
                profile.work_hours.end
            ]);
        }
        table.printstd();
    }

    pub fn profile(profile: &Profile) {
        let mut table = Table::new();

        table.add_row(row!["Email", profile.credentials.email]);
        table.add_row(row!["Client", profile.client.name]);
        table.add_row(row!["Project", profile.project.name]);
        table.add_row(row!["From", profile.work_hours.start]);
        table.add_row(row!["To", profile.work_hours.end]);
        table.add_row(row!["Last Updated", profile.timestamp]);
        table.printstd();
    }
}
