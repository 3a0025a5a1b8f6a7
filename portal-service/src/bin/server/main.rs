use std::sync::Arc;

use auth::Authenticator;
use portal_service::account::ports::AccountServicePort;
use portal_service::account::service::AccountService;
use portal_service::config::Config;
use portal_service::config::CredentialBackend;
use portal_service::inbound::http::router::create_router;
use portal_service::repositories::InMemoryCredentialStore;
use portal_service::repositories::PostgresCredentialStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "portal-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let token_ttl = config.jwt.ttl()?;

    tracing::info!(
        http_port = config.server.http_port,
        credential_backend = ?config.credentials.backend,
        password_scheme = %config.password.scheme,
        token_ttl_seconds = token_ttl.num_seconds(),
        default_code_length = config.codes.default_length,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        token_ttl,
        config.password.scheme.hasher(),
    ));

    let account_service: Arc<dyn AccountServicePort> = match config.credentials.backend {
        CredentialBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = 5,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let store = Arc::new(PostgresCredentialStore::new(pg_pool));
            Arc::new(AccountService::new(store, Arc::clone(&authenticator)))
        }
        CredentialBackend::Memory => {
            let store = Arc::new(InMemoryCredentialStore::from_seed(&config.credentials.seed).await?);
            tracing::warn!(
                seeded_accounts = config.credentials.seed.len(),
                "Using in-memory credential store; changes are lost on restart"
            );
            Arc::new(AccountService::new(store, Arc::clone(&authenticator)))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        Arc::clone(&authenticator),
        config.codes.default_length,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
