use auth::Domain;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::required_field;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::account::models::LoginCommand;
use crate::account::models::Username;
use crate::inbound::http::router::AppState;

/// `POST /api/admin/auth/login`
pub async fn admin_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    login(state, Domain::Admin, body).await
}

/// `POST /api/auth/login`
pub async fn registrant_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    login(state, Domain::Registrant, body).await
}

async fn login(
    state: AppState,
    domain: Domain,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let command = body.try_into_command(domain)?;

    let outcome = state.account_service.login(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&outcome.credential).into(),
            token: outcome.token,
        },
    ))
}

/// Login request body (raw JSON). Fields are optional so that a missing
/// field is reported as 400 rather than an extractor rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: Option<String>,
    password: Option<String>,
}

impl LoginRequestBody {
    fn try_into_command(self, domain: Domain) -> Result<LoginCommand, ApiError> {
        let username = required_field(self.username, "username")?;
        let password = required_field(self.password, "password")?;

        let username =
            Username::new(username).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(LoginCommand::new(domain, username, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: UserData,
}
