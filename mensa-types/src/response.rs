use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{AnswerValue, Answers};

/// An already-submitted answer as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredAnswer {
    pub question: u64,
    pub value: String,
}

/// A user's submitted response to a survey, as returned by
/// `GET /responses/` and `GET /responses/{id}/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurveyResponse {
    pub id: u64,
    pub survey: u64,
    #[serde(default)]
    pub survey_title: String,
    #[serde(default)]
    pub answers: Vec<StoredAnswer>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl SurveyResponse {
    /// Seed an answer store from the stored values, for the edit flow.
    /// Everything comes back as text; widgets reinterpret on render.
    pub fn to_answers(&self) -> Answers {
        self.answers
            .iter()
            .map(|a| (a.question, AnswerValue::Text(a.value.clone())))
            .collect()
    }
}
