use anyhow::Result;
use colored::Colorize;
use log::info;

use mensa_form::{FormBackend, FormOutcome, FormSession};
use mensa_form_dialoguer::{DialoguerBackend, DialoguerError};

use crate::App;
use crate::commands::confirm;

/// Run the interactive form; Ctrl-C counts as cancelling.
pub(crate) fn run_form(backend: &DialoguerBackend, session: &mut FormSession) -> Result<FormOutcome> {
    match backend.run(session) {
        Ok(outcome) => Ok(outcome),
        Err(DialoguerError::Cancelled) => Ok(FormOutcome::Cancelled),
        Err(e) => Err(e.into()),
    }
}

pub async fn run(app: &App, survey_id: u64) -> Result<()> {
    app.session()?;
    let survey = app.client.survey(survey_id).await?;
    if !survey.is_active {
        println!(
            "{}",
            "This survey is closed; answers can no longer be submitted.".yellow()
        );
        return Ok(());
    }

    let mut session = FormSession::new(survey);
    let backend = backend_for(app);
    match run_form(&backend, &mut session)? {
        FormOutcome::Cancelled => {
            println!("Cancelled, nothing was submitted.");
            return Ok(());
        }
        FormOutcome::Completed => {}
    }

    if !confirm("Submit your answers?")? {
        println!("Not submitted.");
        return Ok(());
    }

    let payload = session.payload()?;
    let stored = app.client.submit_response(&payload).await?;
    session.mark_submitted();
    info!("submitted response {} for survey {}", stored.id, survey_id);
    println!();
    println!("{}", "Thank you! Your response has been recorded.".green().bold());
    Ok(())
}

pub(crate) fn backend_for(app: &App) -> DialoguerBackend {
    if app.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    }
}
