//! Survey, question, and results endpoints.

use serde_json::json;

use mensa_types::{Question, QuestionResults, Survey};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewQuestion, NewSurvey};

impl ApiClient {
    /// List surveys, optionally filtered by a server-side search term.
    pub async fn surveys(&self, search: Option<&str>) -> Result<Vec<Survey>, ApiError> {
        let path = match search.map(str::trim) {
            Some(term) if !term.is_empty() => {
                format!("/surveys/?search={}", urlencoding::encode(term))
            }
            _ => "/surveys/".to_string(),
        };
        self.get_json(&path).await
    }

    /// Fetch one survey with its questions nested.
    pub async fn survey(&self, id: u64) -> Result<Survey, ApiError> {
        self.get_json(&format!("/surveys/{id}/")).await
    }

    pub async fn survey_results(&self, id: u64) -> Result<Vec<QuestionResults>, ApiError> {
        self.get_json(&format!("/surveys/{id}/results/")).await
    }

    pub async fn create_survey(&self, survey: &NewSurvey) -> Result<Survey, ApiError> {
        self.post_json("/surveys/", survey).await
    }

    pub async fn update_survey(
        &self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Survey, ApiError> {
        let mut patch = serde_json::Map::new();
        if let Some(title) = title {
            patch.insert("title".into(), json!(title));
        }
        if let Some(description) = description {
            patch.insert("description".into(), json!(description));
        }
        if let Some(is_active) = is_active {
            patch.insert("is_active".into(), json!(is_active));
        }
        self.patch_json(&format!("/surveys/{id}/"), &patch).await
    }

    pub async fn delete_survey(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/surveys/{id}/")).await
    }

    pub async fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError> {
        self.post_json("/questions/", question).await
    }

    pub async fn update_question(
        &self,
        id: u64,
        patch: &serde_json::Value,
    ) -> Result<Question, ApiError> {
        self.patch_json(&format!("/questions/{id}/"), patch).await
    }

    pub async fn delete_question(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/questions/{id}/")).await
    }
}
