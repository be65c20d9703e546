use anyhow::{Result, bail};
use colored::Colorize;
use serde_json::json;

use mensa_api::{NewQuestion, NewSurvey, NewUser, UserPatch};

use crate::App;
use crate::cli::{AdminCommand, AdminQuestionCommand, AdminSurveyCommand, AdminUserCommand};
use crate::commands::{confirm, prompt_new_password};

const QUESTION_KINDS: &[&str] = &["text", "choice", "multiple", "star", "date", "scale"];

pub async fn run(app: &App, command: AdminCommand) -> Result<()> {
    let session = app.session()?;
    if !session.is_admin() {
        bail!("admin commands require a staff account");
    }
    match command {
        AdminCommand::Survey(command) => survey(app, command).await,
        AdminCommand::Question(command) => question(app, command).await,
        AdminCommand::User(command) => user(app, command).await,
    }
}

async fn survey(app: &App, command: AdminSurveyCommand) -> Result<()> {
    match command {
        AdminSurveyCommand::New {
            title,
            description,
            inactive,
        } => {
            let created = app
                .client
                .create_survey(&NewSurvey {
                    title,
                    description,
                    is_active: !inactive,
                })
                .await?;
            println!("Created survey {} ({}).", created.id, created.title.bold());
        }
        AdminSurveyCommand::Update {
            id,
            title,
            description,
            active,
        } => {
            if title.is_none() && description.is_none() && active.is_none() {
                bail!("nothing to update, pass --title, --description, or --active");
            }
            app.client
                .update_survey(id, title.as_deref(), description.as_deref(), active)
                .await?;
            println!("Survey {id} updated.");
        }
        AdminSurveyCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete survey {id} and all of its questions?"))? {
                println!("Not deleted.");
                return Ok(());
            }
            app.client.delete_survey(id).await?;
            println!("Survey {id} deleted.");
        }
    }
    Ok(())
}

async fn question(app: &App, command: AdminQuestionCommand) -> Result<()> {
    match command {
        AdminQuestionCommand::Add {
            survey_id,
            text,
            kind,
            options,
            order,
            page,
            required,
        } => {
            if !QUESTION_KINDS.contains(&kind.as_str()) {
                bail!(
                    "unknown question type {kind:?}, expected one of: {}",
                    QUESTION_KINDS.join(", ")
                );
            }
            let created = app
                .client
                .create_question(&NewQuestion {
                    survey: survey_id,
                    text,
                    question_type: kind,
                    options,
                    order,
                    page_number: page,
                    required,
                })
                .await?;
            println!("Added question {} to survey {survey_id}.", created.id);
        }
        AdminQuestionCommand::Update {
            id,
            text,
            options,
            order,
            page,
            required,
        } => {
            let patch = question_patch(text, options, order, page, required);
            if patch.is_empty() {
                bail!("nothing to update");
            }
            app.client.update_question(id, &patch.into()).await?;
            println!("Question {id} updated.");
        }
        AdminQuestionCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete question {id}?"))? {
                println!("Not deleted.");
                return Ok(());
            }
            app.client.delete_question(id).await?;
            println!("Question {id} deleted.");
        }
    }
    Ok(())
}

/// Build the PATCH body for a question from the flags that were given.
fn question_patch(
    text: Option<String>,
    options: Option<String>,
    order: Option<i64>,
    page: Option<u32>,
    required: Option<bool>,
) -> serde_json::Map<String, serde_json::Value> {
    let mut patch = serde_json::Map::new();
    if let Some(text) = text {
        patch.insert("text".into(), json!(text));
    }
    if let Some(options) = options {
        patch.insert("options".into(), json!(options));
    }
    if let Some(order) = order {
        patch.insert("order".into(), json!(order));
    }
    if let Some(page) = page {
        patch.insert("page_number".into(), json!(page));
    }
    if let Some(required) = required {
        patch.insert("required".into(), json!(required));
    }
    patch
}

async fn user(app: &App, command: AdminUserCommand) -> Result<()> {
    match command {
        AdminUserCommand::List => {
            for user in app.client.users().await? {
                let role = if user.is_superuser {
                    "superuser".red()
                } else if user.is_staff {
                    "staff".yellow()
                } else {
                    "user".normal()
                };
                println!(
                    "{:>4}  {}  <{}>  [{role}]",
                    user.id,
                    user.username.bold(),
                    user.email
                );
            }
        }
        AdminUserCommand::Add {
            username,
            email,
            staff,
        } => {
            let password = prompt_new_password(&format!("Password for {username}"))?;
            let created = app
                .client
                .create_user(&NewUser {
                    username,
                    email,
                    password,
                    is_staff: staff,
                })
                .await?;
            println!("Created user {} (#{}).", created.username.bold(), created.id);
        }
        AdminUserCommand::Update {
            id,
            email,
            staff,
            password,
        } => {
            let password = if password {
                Some(prompt_new_password("New password")?)
            } else {
                None
            };
            if email.is_none() && staff.is_none() && password.is_none() {
                bail!("nothing to update, pass --email, --staff, or --password");
            }
            app.client
                .update_user(
                    id,
                    &UserPatch {
                        email,
                        password,
                        is_staff: staff,
                    },
                )
                .await?;
            println!("User {id} updated.");
        }
        AdminUserCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete user {id}?"))? {
                println!("Not deleted.");
                return Ok(());
            }
            app.client.delete_user(id).await?;
            println!("User {id} deleted.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_patch_only_carries_given_flags() {
        let patch = question_patch(Some("Yemek nasıldı?".into()), None, None, Some(2), None);
        assert_eq!(
            serde_json::Value::from(patch),
            json!({ "text": "Yemek nasıldı?", "page_number": 2 })
        );
    }

    #[test]
    fn question_patch_is_empty_without_flags() {
        assert!(question_patch(None, None, None, None, None).is_empty());
    }
}
