use anyhow::Result;

use crate::App;
use crate::cli::SurveysCommand;
use crate::render;

pub async fn run(app: &App, command: SurveysCommand) -> Result<()> {
    match command {
        SurveysCommand::List { search } => {
            let surveys = app.client.surveys(search.as_deref()).await?;
            if surveys.is_empty() {
                println!("No surveys found.");
                return Ok(());
            }
            for survey in &surveys {
                println!("{}", render::survey_line(survey));
            }
        }
        SurveysCommand::Show { id } => {
            let survey = app.client.survey(id).await?;
            render::print_survey(&survey);
        }
        SurveysCommand::Results { id } => {
            let survey = app.client.survey(id).await?;
            let results = app.client.survey_results(id).await?;
            render::print_results(&survey, &results);
        }
    }
    Ok(())
}
