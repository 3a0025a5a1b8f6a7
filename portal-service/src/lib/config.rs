use std::env;
use std::fmt;

use auth::Domain;
use auth::PasswordScheme;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub codes: CodesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
}

/// Where credentials are looked up.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub backend: CredentialBackend,
    /// Accounts loaded into the in-memory backend at startup.
    #[serde(default)]
    pub seed: Vec<SeedCredential>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedCredential {
    pub domain: Domain,
    pub username: String,
    pub email: String,
    pub password_digest: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default = "default_account_type")]
    pub account_type: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_level() -> i32 {
    1
}

fn default_account_type() -> String {
    "personal".to_string()
}

fn default_status() -> String {
    "active".to_string()
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_ttl")]
    pub ttl: String,
}

fn default_ttl() -> String {
    auth::jwt::DEFAULT_TTL.to_string()
}

impl JwtConfig {
    /// Parsed token lifetime.
    ///
    /// # Errors
    /// * `ConfigError::Message` - `jwt.ttl` is not a valid TTL string
    pub fn ttl(&self) -> Result<Duration, ConfigError> {
        auth::parse_ttl(&self.ttl).map_err(|e| ConfigError::Message(format!("jwt.ttl: {e}")))
    }
}

// The secret must never reach logs.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PasswordConfig {
    #[serde(default)]
    pub scheme: PasswordScheme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodesConfig {
    #[serde(default = "default_code_length")]
    pub default_length: usize,
}

impl Default for CodesConfig {
    fn default() -> Self {
        Self {
            default_length: default_code_length(),
        }
    }
}

fn default_code_length() -> usize {
    8
}

/// Upper bound for generated activation/document codes.
pub const MAX_CODE_LENGTH: usize = 64;

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message("jwt.secret must be set".to_string()));
        }

        self.jwt.ttl()?;

        if self.codes.default_length == 0 || self.codes.default_length > MAX_CODE_LENGTH {
            return Err(ConfigError::Message(format!(
                "codes.default_length must be between 1 and {MAX_CODE_LENGTH}"
            )));
        }

        if self.credentials.backend == CredentialBackend::Postgres && self.database.url.is_empty()
        {
            return Err(ConfigError::Message(
                "database.url is required for the postgres credential backend".to_string(),
            ));
        }

        Ok(())
    }
}
