use auth::Identity;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::config::MAX_CODE_LENGTH;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateCodeQuery {
    pub length: Option<usize>,
}

/// `POST /api/admin/codes?length=N`: mint an activation/document code.
pub async fn generate_code(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    query: Result<Query<GenerateCodeQuery>, QueryRejection>,
) -> Result<ApiSuccess<GenerateCodeResponseData>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let length = query.length.unwrap_or(state.default_code_length);

    if length == 0 || length > MAX_CODE_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "length must be between 1 and {MAX_CODE_LENGTH}"
        )));
    }

    let code = state.code_generator.generate(length);
    tracing::info!(issued_by = %identity.id(), length, "Code generated");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        GenerateCodeResponseData { code },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateCodeResponseData {
    pub code: String,
}
