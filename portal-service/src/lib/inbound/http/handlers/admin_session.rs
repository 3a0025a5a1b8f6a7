use auth::Identity;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

/// `GET /api/admin/session`: summary of the administrator behind the token.
pub async fn admin_session(
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<AdminSessionData>, ApiError> {
    let Identity::Admin(admin) = identity else {
        return Err(ApiError::Forbidden(
            "Administrator privileges required".to_string(),
        ));
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AdminSessionData {
            id: admin.id.to_string(),
            username: admin.username,
            email: admin.email,
            level: admin.level,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSessionData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub level: i32,
}
