//! Command-line surface of the sloneek client.
//!
//! Every subcommand accepts `-r/--profile <name>`; without it the `_default`
//! profile is used. Commands that talk to the service are written against
//! the [`Api`] and [`Prompt`] traits so their flows can be driven by fakes.

pub mod absence;
pub mod absence_cancel;
pub mod init;
pub mod list;
pub mod log;
pub mod log_cancel;
pub mod profile;

use crate::{
    api::{
        types::{LoginCredentials, LoginInfo},
        Api,
    },
    libs::{
        config::{ConfigStore, Credentials, Profile},
        messages::Message,
        prompt::Prompt,
    },
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize Sloneek configuration")]
    Init,
    #[command(about = "Display or remove configured profiles")]
    Profile(profile::ProfileArgs),
    #[command(about = "List events and absences for the current month")]
    List(list::ListArgs),
    #[command(about = "Create a new Sloneek worklog")]
    Log(log::LogArgs),
    #[command(about = "Create a new Sloneek absence")]
    Absence,
    #[command(about = "Cancel one of your upcoming absences")]
    AbsenceCancel,
    #[command(about = "Cancel one of your worklogs from the current month")]
    LogCancel,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Profile to use instead of `_default`
    #[arg(short = 'r', long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let profile = cli.profile.as_deref();

        match cli.command {
            Commands::Init => init::cmd(profile).await,
            Commands::Profile(args) => profile::cmd(args, profile),
            Commands::List(args) => list::cmd(args, profile).await,
            Commands::Log(args) => log::cmd(args, profile).await,
            Commands::Absence => absence::cmd(profile).await,
            Commands::AbsenceCancel => absence_cancel::cmd(profile).await,
            Commands::LogCancel => log_cancel::cmd(profile).await,
        }
    }
}

/// Reads the profiles file and picks the profile for this run.
pub fn load_profile(name: Option<&str>) -> Result<Profile> {
    msg_info!(Message::ReadingConfig(ConfigStore::path().display().to_string()));
    let store = ConfigStore::read()?;
    let profile = store.resolve(name)?.clone();

    match name {
        Some(name) => msg_info!(Message::UsingProfile(name.to_string())),
        None => msg_info!(Message::UsingDefaultProfile),
    }
    Ok(profile)
}

pub async fn login<A: Api>(api: &mut A, credentials: &Credentials) -> Result<LoginInfo> {
    msg_info!(Message::LoggingIn);
    let info = api
        .login(&LoginCredentials {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        })
        .await?;
    Ok(info)
}

/// Single-choice menu that refuses to open without options.
pub fn choose<P: Prompt>(prompt: &mut P, message: Message, items: &[String]) -> Result<usize> {
    if items.is_empty() {
        msg_bail_anyhow!(Message::NothingToChoose(message.to_string()));
    }

    let index = prompt.select(&message.to_string(), items)?;
    if index >= items.len() {
        msg_bail_anyhow!(Message::NothingToChoose(message.to_string()));
    }
    Ok(index)
}
