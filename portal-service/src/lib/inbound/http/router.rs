use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::CodeGenerator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::admin_session::admin_session;
use super::handlers::change_password::change_password;
use super::handlers::generate_code::generate_code;
use super::handlers::login::admin_login;
use super::handlers::login::registrant_login;
use super::handlers::me::me;
use super::handlers::profile::profile;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_admin;
use crate::account::ports::AccountServicePort;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub code_generator: CodeGenerator,
    pub default_code_length: usize,
}

pub fn create_router(
    account_service: Arc<dyn AccountServicePort>,
    authenticator: Arc<Authenticator>,
    default_code_length: usize,
) -> Router {
    let state = AppState {
        account_service,
        authenticator,
        code_generator: CodeGenerator::new(),
        default_code_length,
    };

    let public_routes = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/admin/auth/login", post(admin_login))
        .route("/api/auth/login", post(registrant_login));

    let authenticated_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/auth/profile", get(profile))
        .route("/api/auth/password", put(change_password));

    let admin_routes = Router::new()
        .route("/api/admin/session", get(admin_session))
        .route("/api/admin/codes", post(generate_code))
        .route_layer(middleware::from_fn(require_admin));

    let protected_routes = authenticated_routes
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
