//! # Sloneek - command-line client for the Sloneek workforce platform
//!
//! Logs work, requests and cancels absences and lists the current month
//! without leaving the terminal.
//!
//! ## Features
//!
//! - **Worklogs**: create (`log`) and cancel (`log-cancel`) planning events
//! - **Absences**: request full-day, half-day and hourly absences, cancel
//!   upcoming ones
//! - **Listing**: the month's worklogs and absences with hour totals, or
//!   who else is away today
//! - **Profiles**: several named credential sets in `~/.sloneek/config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sloneek::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
