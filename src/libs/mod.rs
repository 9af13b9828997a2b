//! Core library modules for the sloneek client.
//!
//! - **time**: calendar windows and day/time parsing in an explicit zone
//! - **event**: merging worklogs and absences into the listing
//! - **config**: named profiles and the profiles file
//! - **prompt**, **view**, **messages**: everything the operator sees
//! - **error**: the error taxonomy mapped to exit codes in `main`

pub mod config;
pub mod data_storage;
pub mod error;
pub mod event;
pub mod messages;
pub mod prompt;
pub mod time;
pub mod view;
