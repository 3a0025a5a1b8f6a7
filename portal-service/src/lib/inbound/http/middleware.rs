use auth::Identity;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Middleware that validates bearer tokens and adds the identity to request extensions.
///
/// Downstream handlers read `Extension<Identity>` and never look at the token
/// again. No store access happens here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(claims.into_identity());

    Ok(next.run(req).await)
}

/// Middleware that only lets administrative identities through.
///
/// Must run after [`authenticate`]. A request without a resolved identity is
/// rejected as unauthenticated rather than assumed to be anything.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    match req.extensions().get::<Identity>() {
        None => {
            tracing::error!("Admin gate reached without an authenticated identity");
            Err(ApiError::Unauthorized("Authentication required".to_string()).into_response())
        }
        Some(identity) if !identity.is_admin() => {
            tracing::info!(
                user_id = %identity.id(),
                domain = %identity.domain(),
                "Admin-only route rejected"
            );
            Err(ApiError::Forbidden("Administrator privileges required".to_string())
                .into_response())
        }
        Some(_) => Ok(next.run(req).await),
    }
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let unauthorized = || {
        ApiError::Unauthorized("Missing or malformed bearer token".to_string()).into_response()
    };

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| unauthorized())?;

    auth_str
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(unauthorized)
}
