//! Dialoguer implementation of the FormBackend trait.

use chrono::NaiveDate;
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use mensa_form::{FormBackend, FormError, FormOutcome, FormSession, WidgetInput};
use mensa_types::{AnswerValue, Question, QuestionKind, options};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the form (e.g., pressed Ctrl+C).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI form filling.
///
/// Renders one page at a time: every question of the current page gets
/// the prompt widget matching its kind, then a navigation menu offers
/// back/next/submit. Page transitions go through the session's
/// validation gate, so required questions block with their message.
pub struct DialoguerBackend {
    /// Use colorful theme for prompts. The theme lives here because the
    /// dialoguer builders borrow it.
    colorful: bool,
    theme: ColorfulTheme,
}

enum Nav {
    Back,
    Forward,
    Cancel,
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            theme: ColorfulTheme::default(),
        }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            theme: ColorfulTheme::default(),
        }
    }

    fn ask_question(
        &self,
        question: &Question,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let prompt = prompt_text(question);
        match question.kind {
            QuestionKind::Text => self.ask_text(question, &prompt, session),
            QuestionKind::Choice => self.ask_choice(question, &prompt, session),
            QuestionKind::Multiple => self.ask_multiple(question, &prompt, session),
            QuestionKind::Star => self.ask_star(question, &prompt, session),
            QuestionKind::Date => self.ask_date(question, &prompt, session),
            QuestionKind::Scale => self.ask_scale(question, &prompt, session),
        }
    }

    fn ask_text(
        &self,
        question: &Question,
        prompt: &str,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let mut builder = self.input(prompt).allow_empty(true);
        if let Some(current) = session.answer(question.id).and_then(AnswerValue::as_str) {
            builder = builder.default(current.to_string());
        }
        match builder.interact_text() {
            Ok(value) => {
                let _ = session.apply_input(question.id, &WidgetInput::Text(value));
                Ok(())
            }
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    fn ask_choice(
        &self,
        question: &Question,
        prompt: &str,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let current = session.answer(question.id).and_then(AnswerValue::as_str);
        let default = question
            .options
            .iter()
            .position(|opt| Some(opt.as_str()) == current)
            .unwrap_or(0);
        let picked = match self
            .select(prompt)
            .items(&question.options)
            .default(default)
            .interact_opt()
        {
            Ok(picked) => picked,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };
        if let Some(index) = picked {
            let label = question.options[index].clone();
            let _ = session.apply_input(question.id, &WidgetInput::Pick(label));
        }
        Ok(())
    }

    fn ask_multiple(
        &self,
        question: &Question,
        prompt: &str,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let selected = session
            .answer(question.id)
            .and_then(AnswerValue::as_str)
            .map(options::split)
            .unwrap_or_default();
        let defaults: Vec<bool> = question
            .options
            .iter()
            .map(|opt| selected.contains(opt))
            .collect();

        let mut builder = if self.colorful {
            MultiSelect::with_theme(&self.theme)
        } else {
            MultiSelect::new()
        };
        builder = builder
            .with_prompt(prompt)
            .items(&question.options)
            .defaults(&defaults);

        let chosen = match builder.interact_opt() {
            Ok(chosen) => chosen,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };
        let Some(chosen) = chosen else {
            return Ok(());
        };

        // Emit toggle events for every label whose membership changed,
        // so the stored comma-joined string goes through the widget.
        for (index, label) in question.options.iter().enumerate() {
            let was = selected.contains(label);
            let is = chosen.contains(&index);
            if was != is {
                let _ = session.apply_input(question.id, &WidgetInput::Toggle(label.clone()));
            }
        }
        Ok(())
    }

    fn ask_star(
        &self,
        question: &Question,
        prompt: &str,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let steps: Vec<f64> = (1..=10).map(|n| f64::from(n) / 2.0).collect();
        let labels: Vec<String> = steps.iter().map(|s| format!("{s} ★")).collect();
        let current = current_rating(session.answer(question.id));
        let default = steps
            .iter()
            .position(|s| *s == current)
            .unwrap_or(steps.len() - 1);

        let picked = match self
            .select(prompt)
            .items(&labels)
            .default(default)
            .interact_opt()
        {
            Ok(picked) => picked,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };
        if let Some(index) = picked {
            let _ = session.set_answer(question.id, AnswerValue::Rating(steps[index]));
        }
        Ok(())
    }

    fn ask_date(
        &self,
        question: &Question,
        prompt: &str,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let mut builder = self
            .input(&format!("{prompt} (YYYY-MM-DD)"))
            .allow_empty(true)
            .validate_with(|value: &String| {
                if value.is_empty() || is_iso_date(value) {
                    Ok(())
                } else {
                    Err("expected an ISO date like 2024-11-02")
                }
            });
        if let Some(current) = session.answer(question.id).and_then(AnswerValue::as_str) {
            builder = builder.default(current.to_string());
        }
        match builder.interact_text() {
            Ok(value) => {
                let _ = session.apply_input(question.id, &WidgetInput::Date(value));
                Ok(())
            }
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    fn ask_scale(
        &self,
        question: &Question,
        prompt: &str,
        session: &mut FormSession,
    ) -> Result<(), DialoguerError> {
        let labels: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
        let current = session.answer(question.id).and_then(AnswerValue::as_str);
        let default = labels
            .iter()
            .position(|l| Some(l.as_str()) == current)
            .unwrap_or(0);

        let picked = match self
            .select(prompt)
            .items(&labels)
            .default(default)
            .interact_opt()
        {
            Ok(picked) => picked,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };
        if let Some(index) = picked {
            let _ = session.apply_input(question.id, &WidgetInput::Scale(index as u8 + 1));
        }
        Ok(())
    }

    fn navigate(&self, session: &FormSession) -> Result<Nav, DialoguerError> {
        let mut items: Vec<&str> = Vec::new();
        if !session.is_first_page() {
            items.push("← Back");
        }
        items.push(if session.is_last_page() {
            "Submit ✔"
        } else {
            "Next →"
        });
        items.push("Cancel");

        let picked = match self
            .select("Continue")
            .items(&items)
            .default(items.len() - 2)
            .interact_opt()
        {
            Ok(picked) => picked,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };
        Ok(match picked.map(|i| items[i]) {
            Some("← Back") => Nav::Back,
            Some("Cancel") | None => Nav::Cancel,
            _ => Nav::Forward,
        })
    }

    fn input(&self, prompt: &str) -> Input<'_, String> {
        let builder = if self.colorful {
            Input::with_theme(&self.theme)
        } else {
            Input::new()
        };
        builder.with_prompt(prompt.to_string())
    }

    fn select(&self, prompt: &str) -> Select<'_> {
        let builder = if self.colorful {
            Select::with_theme(&self.theme)
        } else {
            Select::new()
        };
        builder.with_prompt(prompt.to_string())
    }
}

impl FormBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn run(&self, session: &mut FormSession) -> Result<FormOutcome, Self::Error> {
        if !session.title().is_empty() {
            println!("\n{}", session.title());
            if !session.description().is_empty() {
                println!("{}", session.description());
            }
        }

        loop {
            let (current, max) = session.progress();
            println!("\n— Page {current}/{max} —");

            let page = session.current_questions().to_vec();
            if page.is_empty() {
                println!("(no questions on this page)");
            }
            for question in &page {
                self.ask_question(question, session)?;
            }

            match self.navigate(session)? {
                Nav::Back => session.back(),
                Nav::Cancel => return Ok(FormOutcome::Cancelled),
                Nav::Forward if session.is_last_page() => match session.payload() {
                    Ok(_) => return Ok(FormOutcome::Completed),
                    Err(FormError::PageBlocked { missing }) => {
                        println!("Required: {}", missing.join(", "));
                    }
                    Err(FormError::AlreadySubmitted) => return Ok(FormOutcome::Cancelled),
                },
                Nav::Forward => {
                    if let Err(FormError::PageBlocked { missing }) = session.next() {
                        println!("Required: {}", missing.join(", "));
                    }
                }
            }
        }
    }
}

/// The rating currently held for a star question.
///
/// Stored responses come back from the server with every value in
/// string form, so numeric text counts as a rating too.
fn current_rating(answer: Option<&AnswerValue>) -> f64 {
    match answer {
        Some(AnswerValue::Rating(r)) => *r,
        Some(AnswerValue::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    }
}

fn prompt_text(question: &Question) -> String {
    if question.required {
        format!("{} *", question.text)
    } else {
        question.text.clone()
    }
}

/// A valid calendar date in zero-padded `YYYY-MM-DD` form.
fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa_form::FormSession;
    use sample_surveys::cafeteria_satisfaction;

    #[test]
    fn iso_date_check() {
        assert!(is_iso_date("2024-11-02"));
        assert!(is_iso_date("2024-02-29"));
        assert!(!is_iso_date("02.11.2024"));
        assert!(!is_iso_date("2024-1-02"));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(!is_iso_date("2024-13-45"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("2024-00-10"));
    }

    #[test]
    fn stored_star_values_read_back_as_ratings() {
        let survey = cafeteria_satisfaction();
        let star_id = survey.questions[0].id;
        let answers = [(star_id, AnswerValue::Text("3.5".into()))]
            .into_iter()
            .collect();
        let session = FormSession::for_edit(survey, answers);
        assert_eq!(current_rating(session.answer(star_id)), 3.5);
        assert_eq!(current_rating(Some(&AnswerValue::Text("4".into()))), 4.0);
        assert_eq!(current_rating(Some(&AnswerValue::Rating(2.5))), 2.5);
        assert_eq!(current_rating(Some(&AnswerValue::Text("söz".into()))), 0.0);
        assert_eq!(current_rating(None), 0.0);
    }

    #[test]
    fn required_questions_are_starred() {
        let survey = cafeteria_satisfaction();
        let session = FormSession::new(survey);
        let page = session.current_questions();
        assert!(prompt_text(&page[0]).ends_with('*'));
    }
}
