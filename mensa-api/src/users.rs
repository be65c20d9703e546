//! Account management endpoints. Staff-only on the server side; the
//! client just forwards the token and reports 403 as `Unauthorized`.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AccountUser, NewUser, UserPatch};

impl ApiClient {
    pub async fn users(&self) -> Result<Vec<AccountUser>, ApiError> {
        self.get_json("/users/").await
    }

    pub async fn user(&self, id: u64) -> Result<AccountUser, ApiError> {
        self.get_json(&format!("/users/{id}/")).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<AccountUser, ApiError> {
        self.post_json("/users/", user).await
    }

    pub async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<AccountUser, ApiError> {
        self.patch_json(&format!("/users/{id}/"), patch).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/users/{id}/")).await
    }
}
