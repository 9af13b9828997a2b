//! Interactive questions asked by `init`, `log`, `absence` and the cancel
//! commands.
//!
//! Commands only see the [`Prompt`] trait; [`Terminal`] answers it with
//! dialoguer widgets. Pressing Ctrl-C inside a widget surfaces as
//! [`SloneekError::Aborted`].

use super::error::SloneekError;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

pub trait Prompt {
    /// Single-choice menu, returns the chosen index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, SloneekError>;

    /// Free text, `default` is used when the answer is left empty.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String, SloneekError>;

    /// Masked free text.
    fn password(&mut self, prompt: &str) -> Result<String, SloneekError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, SloneekError>;
}

/// Prompts on the controlling terminal.
#[derive(Default)]
pub struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for Terminal {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, SloneekError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String, SloneekError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn password(&mut self, prompt: &str) -> Result<String, SloneekError> {
        Ok(Password::with_theme(&self.theme).with_prompt(prompt).interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, SloneekError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
