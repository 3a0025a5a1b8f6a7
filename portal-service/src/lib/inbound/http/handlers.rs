use auth::Domain;
use auth::Identity;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AccountError;
use crate::account::models::Credential;

pub mod admin_session;
pub mod change_password;
pub mod generate_code;
pub mod login;
pub mod me;
pub mod profile;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error taxonomy exposed over HTTP.
///
/// `InternalServerError` carries a detail string for the server log only; the
/// client always receives a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AccountError::IncorrectPassword => ApiError::BadRequest(err.to_string()),
            AccountError::NotFound(_) => ApiError::NotFound("Account not found".to_string()),
            AccountError::UsernameAlreadyExists(_)
            | AccountError::InvalidUsername(_)
            | AccountError::InvalidStatus(_)
            | AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public summary of a principal, shared by login, `me` and profile responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub domain: Domain,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl From<&Identity> for UserData {
    fn from(identity: &Identity) -> Self {
        match identity {
            Identity::Admin(admin) => Self {
                id: admin.id.to_string(),
                domain: Domain::Admin,
                username: admin.username.clone(),
                email: admin.email.clone(),
                level: Some(admin.level),
                account_type: None,
            },
            Identity::Registrant(registrant) => Self {
                id: registrant.id.to_string(),
                domain: Domain::Registrant,
                username: registrant.username.clone(),
                email: registrant.email.clone(),
                level: None,
                account_type: Some(registrant.account_type.clone()),
            },
        }
    }
}

impl From<&Credential> for UserData {
    fn from(credential: &Credential) -> Self {
        (&credential.to_identity()).into()
    }
}

/// Treat an absent or blank field as a validation failure.
pub(crate) fn required_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(format!("Missing required field: {name}"))),
    }
}
