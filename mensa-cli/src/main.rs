mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::debug;

use mensa_api::{ApiClient, ApiError, DEFAULT_BASE_URL, Session};

use crate::cli::{Cli, Command};

/// Everything a command handler needs: the configured client, the
/// stored session (if any), and the output preferences.
pub struct App {
    pub client: ApiClient,
    pub session: Option<Session>,
    pub plain: bool,
}

impl App {
    /// The session, or a login hint as an error.
    pub fn session(&self) -> Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("not logged in, run `mensa login <username>` first"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let base_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("MENSA_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    debug!("using API at {base_url}");

    let session = Session::load()?;
    let mut client = ApiClient::new(&base_url)?;
    if let Some(session) = &session {
        client = client.with_token(&session.token);
    }
    let app = App {
        client,
        session,
        plain: cli.plain,
    };

    let outcome = run(&app, cli.command).await;
    if let Err(error) = &outcome {
        if let Some(ApiError::Unauthorized) = error.downcast_ref::<ApiError>() {
            Session::clear()?;
            eprintln!(
                "{}",
                "Your session is no longer valid; it has been cleared. Log in again.".yellow()
            );
        }
    }
    outcome
}

async fn run(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Login { username } => commands::auth::login(app, &username).await,
        Command::Logout => commands::auth::logout(app),
        Command::Register { username, email } => {
            commands::auth::register(app, &username, &email).await
        }
        Command::Password(command) => commands::auth::password(app, command).await,
        Command::Surveys(command) => commands::surveys::run(app, command).await,
        Command::Fill { survey_id } => commands::fill::run(app, survey_id).await,
        Command::Responses(command) => commands::responses::run(app, command).await,
        Command::Admin(command) => commands::admin::run(app, command).await,
    }
}
