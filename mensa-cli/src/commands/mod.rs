pub mod admin;
pub mod auth;
pub mod fill;
pub mod responses;
pub mod surveys;

use anyhow::Result;
use dialoguer::{Confirm, Password};

/// Prompt for a password without echoing it.
pub(crate) fn prompt_password(prompt: &str) -> Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

/// Prompt for a password twice and insist the entries match.
pub(crate) fn prompt_new_password(prompt: &str) -> Result<String> {
    Ok(Password::new()
        .with_prompt(prompt)
        .with_confirmation("Repeat password", "The passwords do not match")
        .interact()?)
}

/// Yes/no confirmation, defaulting to no.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
