use auth::Identity;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::required_field;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::account::models::ChangePasswordCommand;
use crate::inbound::http::router::AppState;

/// HTTP request body for changing the caller's password (raw JSON)
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

impl ChangePasswordRequest {
    fn try_into_command(self) -> Result<ChangePasswordCommand, ApiError> {
        Ok(ChangePasswordCommand {
            old_password: required_field(self.old_password, "old_password")?,
            new_password: required_field(self.new_password, "new_password")?,
        })
    }
}

/// `PUT /api/auth/password`
pub async fn change_password(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let command = req.try_into_command()?;

    state
        .account_service
        .change_password(&identity, command)
        .await
        .map_err(ApiError::from)
        .map(|ref credential| ApiSuccess::new(StatusCode::OK, credential.into()))
}
