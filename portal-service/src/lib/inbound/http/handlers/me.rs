use auth::Identity;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;

/// `GET /api/auth/me`: the identity carried by the bearer token.
///
/// Answered from the verified claims alone, without a store lookup.
pub async fn me(
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&identity).into()))
}
