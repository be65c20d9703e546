//! Request and response bodies that only exist at the API boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: u64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A user record as the account endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

/// Body for creating a survey. Questions are created separately,
/// one POST per question.
#[derive(Debug, Clone, Serialize)]
pub struct NewSurvey {
    pub title: String,
    pub description: String,
    pub is_active: bool,
}

/// Body for creating or replacing a question on a survey.
#[derive(Debug, Clone, Serialize)]
pub struct NewQuestion {
    pub survey: u64,
    pub text: String,
    pub question_type: String,
    pub options: String,
    pub order: i64,
    pub page_number: u32,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_staff: bool,
}

/// Partial user update; only the present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_patch_skips_absent_fields() {
        let patch = UserPatch {
            email: Some("new@example.com".into()),
            ..UserPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "new@example.com" }));
    }

    #[test]
    fn login_response_defaults_flags() {
        let json = r#"{"token":"t","user_id":3,"email":"a@b.c","username":"ayse"}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(!parsed.is_staff);
        assert!(!parsed.is_superuser);
    }
}
