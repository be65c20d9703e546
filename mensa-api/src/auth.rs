//! Authentication and account self-service endpoints.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/login/", &body).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post_no_content("/register/", request).await
    }

    /// The server answers the same way whether or not the address is
    /// known, so success only means the request was accepted.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.post_no_content("/password-reset/request/", &json!({ "email": email }))
            .await
    }

    pub async fn confirm_password_reset(
        &self,
        uid: &str,
        token: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.post_no_content(
            "/password-reset/confirm/",
            &json!({ "uid": uid, "token": token, "password": password }),
        )
        .await
    }

    /// Change the current user's password. Requires a token.
    pub async fn change_password(&self, password: &str) -> Result<(), ApiError> {
        self.post_no_content("/change-password/", &json!({ "password": password }))
            .await
    }
}
