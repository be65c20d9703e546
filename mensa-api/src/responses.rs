//! Response (filled-out survey) endpoints. The server scopes the list
//! to the caller unless they are staff.

use mensa_types::{ResponsePayload, SurveyResponse, UpdatePayload};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn responses(&self) -> Result<Vec<SurveyResponse>, ApiError> {
        self.get_json("/responses/").await
    }

    pub async fn response(&self, id: u64) -> Result<SurveyResponse, ApiError> {
        self.get_json(&format!("/responses/{id}/")).await
    }

    pub async fn submit_response(
        &self,
        payload: &ResponsePayload,
    ) -> Result<SurveyResponse, ApiError> {
        self.post_json("/responses/", payload).await
    }

    pub async fn update_response(
        &self,
        id: u64,
        payload: &UpdatePayload,
    ) -> Result<SurveyResponse, ApiError> {
        self.put_json(&format!("/responses/{id}/"), payload).await
    }

    pub async fn delete_response(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/responses/{id}/")).await
    }
}
