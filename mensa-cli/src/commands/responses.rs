use anyhow::Result;
use colored::Colorize;
use log::info;

use mensa_form::{FormOutcome, FormSession};

use crate::App;
use crate::cli::ResponsesCommand;
use crate::commands::confirm;
use crate::commands::fill::{backend_for, run_form};
use crate::render;

pub async fn run(app: &App, command: ResponsesCommand) -> Result<()> {
    app.session()?;
    match command {
        ResponsesCommand::List => list(app).await,
        ResponsesCommand::Edit { id } => edit(app, id).await,
        ResponsesCommand::Delete { id, yes } => delete(app, id, yes).await,
    }
}

async fn list(app: &App) -> Result<()> {
    let responses = app.client.responses().await?;
    if responses.is_empty() {
        println!("No responses yet. Fill out a survey with `mensa fill <id>`.");
        return Ok(());
    }
    for response in &responses {
        println!("{}", render::response_line(response));
    }
    Ok(())
}

async fn edit(app: &App, id: u64) -> Result<()> {
    let stored = app.client.response(id).await?;
    let survey = app.client.survey(stored.survey).await?;
    let mut session = FormSession::for_edit(survey, stored.to_answers());

    let backend = backend_for(app);
    match run_form(&backend, &mut session)? {
        FormOutcome::Cancelled => {
            println!("Cancelled, the response is unchanged.");
            return Ok(());
        }
        FormOutcome::Completed => {}
    }

    if !confirm("Save the updated answers?")? {
        println!("Not saved.");
        return Ok(());
    }

    let payload = session.update_payload()?;
    app.client.update_response(id, &payload).await?;
    info!("updated response {id}");
    println!("{}", "Response updated.".green());
    Ok(())
}

async fn delete(app: &App, id: u64, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete response {id}?"))? {
        println!("Not deleted.");
        return Ok(());
    }
    app.client.delete_response(id).await?;
    println!("Response {id} deleted.");
    Ok(())
}
