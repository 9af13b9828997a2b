use super::choose;
use crate::{
    libs::{
        config::{ConfigStore, Removal},
        error::SloneekError,
        messages::Message,
        prompt::{Prompt, Terminal},
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Remove the profile given by --profile, or pick one from a menu
    #[arg(short = 'd', long = "remove", visible_alias = "delete", alias = "cancel")]
    pub remove: bool,
}

pub fn cmd(args: ProfileArgs, profile_name: Option<&str>) -> Result<()> {
    msg_info!(Message::ReadingConfig(ConfigStore::path().display().to_string()));
    let mut store = ConfigStore::read()?;

    if !args.remove {
        msg_print!(Message::ProfilesHeader, true);
        View::profiles(&store, profile_name);
        return Ok(());
    }

    let mut prompt = Terminal::new();
    if let Some(removal) = remove(&mut prompt, &mut store, profile_name)? {
        msg_info!(Message::WritingConfig(ConfigStore::path().display().to_string()));
        store.save()?;
        report(&removal);
    }
    Ok(())
}

/// Removes a profile from `store` without saving it.
///
/// A named profile is removed right away, otherwise the operator picks one
/// and confirms. `None` means nothing was removed.
pub fn remove<P: Prompt>(prompt: &mut P, store: &mut ConfigStore, name: Option<&str>) -> Result<Option<Removal>> {
    if let Some(name) = name {
        let Some(profile) = store.get(name) else {
            return Err(SloneekError::ProfileNotFound(name.to_string()).into());
        };
        msg_print!(Message::ProfileHeader(name.to_string()), true);
        View::profile(profile);
        return Ok(Some(store.remove(name)?));
    }

    if store.is_empty() {
        msg_warning!(Message::NoProfilesToRemove);
        return Ok(None);
    }

    let names = store.names();
    let index = choose(prompt, Message::SelectProfileToRemove, &names)?;
    let name = &names[index];

    if !prompt.confirm(&Message::ConfirmRemoveProfile(name.clone()).to_string(), true)? {
        msg_warning!(Message::ProfileRemovalCancelled);
        return Ok(None);
    }
    Ok(Some(store.remove(name)?))
}

fn report(removal: &Removal) {
    msg_success!(Message::ProfileRemoved(removal.name.clone()));
    if let Some(renamed) = &removal.renamed {
        msg_success!(Message::ProfileRenamedToDefault(renamed.clone()));
    }
}
