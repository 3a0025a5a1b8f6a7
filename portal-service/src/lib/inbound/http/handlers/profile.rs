use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::account::models::Credential;
use crate::inbound::http::router::AppState;

/// `GET /api/auth/profile`: the stored account behind the token.
pub async fn profile(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    state
        .account_service
        .profile(&identity)
        .await
        .map_err(ApiError::from)
        .map(|ref credential| ApiSuccess::new(StatusCode::OK, credential.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    #[serde(flatten)]
    pub user: UserData,
    pub status: String,
}

impl From<&Credential> for ProfileResponseData {
    fn from(credential: &Credential) -> Self {
        Self {
            user: credential.into(),
            status: credential.status.as_str().to_string(),
        }
    }
}
