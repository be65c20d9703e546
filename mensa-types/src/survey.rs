use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Question;

/// The top-level survey structure as delivered by the API.
///
/// Presentation-agnostic - the form engine groups the questions into
/// pages, the results view pairs them with aggregated statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// All questions, unique by id. Not guaranteed sorted by `order`.
    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Survey {
    /// Create a new survey with the given questions.
    pub fn new(id: u64, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            questions,
            is_active: true,
            created_at: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;

    #[test]
    fn deserializes_nested_questions() {
        let survey: Survey = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Yemekhane Memnuniyeti",
                "description": "Haftalık anket",
                "is_active": true,
                "created_at": "2024-11-02T09:30:00Z",
                "questions": [
                    {"id": 2, "text": "Puanınız?", "question_type": "star", "order": 1},
                    {"id": 3, "text": "Yorumunuz?", "question_type": "text", "order": 0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(survey.len(), 2);
        assert_eq!(survey.questions[0].kind, QuestionKind::Star);
        assert!(survey.created_at.is_some());
    }
}
