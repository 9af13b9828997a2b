//! Error taxonomy shared by the time helpers, the profile store and the API
//! client.
//!
//! Commands propagate these through `anyhow`; the dispatcher in `main.rs`
//! downcasts back to [`SloneekError`] to pick the operator message.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SloneekError {
    /// Malformed day or clock input typed by the operator.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The API answered with a non-2xx status.
    #[error("API call failed: {status}\n{body}")]
    Http { status: StatusCode, body: String },

    /// The request never got an answer.
    #[error("API call failed: {0}")]
    Network(String),

    /// The API answered 2xx with a body that does not match the expected shape.
    #[error("Unexpected API response: {0}")]
    Decode(String),

    #[error("No profiles found. Please run 'sloneek init' to create a profile.")]
    NoProfiles,

    #[error("Profile \"{0}\" not found.")]
    ProfileNotFound(String),

    #[error("config.json not found at {0}. Please run 'sloneek init' first.")]
    ConfigNotFound(String),

    #[error("Error reading config.json: {0}")]
    Config(String),

    #[error("Unknown absence unit type: {0}")]
    UnknownAbsenceUnit(String),

    #[error("Action aborted by user.")]
    Aborted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SloneekError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}

impl From<reqwest::Error> for SloneekError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<dialoguer::Error> for SloneekError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => Self::Aborted,
            dialoguer::Error::IO(e) => Self::Io(e),
            #[allow(unreachable_patterns)]
            other => Self::Io(std::io::Error::other(other.to_string())),
        }
    }
}

/// Exit code reported to the shell for any failure, interrupts included.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Operator-facing text and process exit code for an error that reached
/// the top of a command.
pub fn exit_report(err: &anyhow::Error) -> (String, i32) {
    match err.downcast_ref::<SloneekError>() {
        Some(known) => (known.to_string(), FAILURE_EXIT_CODE),
        None => (format!("{:#}", err), FAILURE_EXIT_CODE),
    }
}
