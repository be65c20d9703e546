use anyhow::Result;
use colored::Colorize;
use log::info;

use mensa_api::{RegisterRequest, Session};

use crate::App;
use crate::cli::PasswordCommand;
use crate::commands::{prompt_new_password, prompt_password};

pub async fn login(app: &App, username: &str) -> Result<()> {
    let password = prompt_password("Password")?;
    let login = app.client.login(username, &password).await?;
    let session = Session::from_login(&login);
    session.save()?;
    info!("logged in as user {}", login.user_id);
    println!("Logged in as {}.", session.username.bold());
    if session.is_admin() {
        println!("Staff commands are available under {}.", "mensa admin".cyan());
    }
    Ok(())
}

pub fn logout(app: &App) -> Result<()> {
    Session::clear()?;
    match &app.session {
        Some(session) => println!("Logged out {}.", session.username.bold()),
        None => println!("No stored session."),
    }
    Ok(())
}

pub async fn register(app: &App, username: &str, email: &str) -> Result<()> {
    let password = prompt_new_password("Choose a password")?;
    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password,
    };
    app.client.register(&request).await?;
    println!(
        "Account {} created. Log in with {}.",
        username.bold(),
        format!("mensa login {username}").cyan()
    );
    Ok(())
}

pub async fn password(app: &App, command: PasswordCommand) -> Result<()> {
    match command {
        PasswordCommand::ResetRequest { email } => {
            app.client.request_password_reset(&email).await?;
            println!("If {email} belongs to an account, a reset email is on its way.");
        }
        PasswordCommand::ResetConfirm { uid, token } => {
            let password = prompt_new_password("New password")?;
            app.client
                .confirm_password_reset(&uid, &token, &password)
                .await?;
            println!("Password updated. Log in with the new password.");
        }
        PasswordCommand::Change => {
            app.session()?;
            let password = prompt_new_password("New password")?;
            app.client.change_password(&password).await?;
            println!("Password changed.");
        }
    }
    Ok(())
}
