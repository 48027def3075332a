//! Server configuration
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. Optional `config.{yaml,toml,json}` in the working directory
//! 3. Environment variables prefixed `PITWALL__`, sections separated by `__`
//!    (`PITWALL__SERVER__PORT=9000`, `PITWALL__DATABASE__URL=sqlite://f1.db`)
//! 4. Deployment variables `PORT` and `DB_PATH`
//!
//! A `.env` file is read before any of the above.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty disables CORS headers.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Upper bound on a single request, including its queries.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_seconds() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite://path/to/f1db.sqlite3`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// The API never writes; open connections read-only.
    #[serde(default = "default_read_only")]
    pub read_only: bool,
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,
    #[serde(default = "default_pool_timeout_seconds")]
    pub pool_timeout_seconds: u64,
    #[serde(default = "default_busy_timeout_seconds")]
    pub busy_timeout_seconds: u64,
}

fn default_database_url() -> String {
    "sqlite://f1db.sqlite3".to_string()
}

fn default_read_only() -> bool {
    true
}

fn default_pool_max_size() -> u32 {
    5
}

fn default_pool_timeout_seconds() -> u64 {
    5
}

fn default_busy_timeout_seconds() -> u64 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            read_only: default_read_only(),
            pool_max_size: default_pool_max_size(),
            pool_timeout_seconds: default_pool_timeout_seconds(),
            busy_timeout_seconds: default_busy_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for this crate (`RUST_LOG` takes precedence)
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub file_enabled: bool,
    #[serde(default = "default_file_directory")]
    pub file_directory: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// daily, hourly, minutely or never
    #[serde(default = "default_file_rotation")]
    pub file_rotation: String,

    #[serde(default)]
    pub opentelemetry_enabled: bool,
    #[serde(default = "default_otlp_endpoint")]
    pub otlp_endpoint: String,
    #[serde(default = "default_otlp_timeout_seconds")]
    pub otlp_timeout_seconds: u64,
    #[serde(default = "default_trace_sample_ratio")]
    pub trace_sample_ratio: f64,

    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default)]
    pub service_version: Option<String>,
    #[serde(default = "default_deployment_environment")]
    pub deployment_environment: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_file_directory() -> String {
    "logs".to_string()
}

fn default_file_prefix() -> String {
    "pitwall".to_string()
}

fn default_file_rotation() -> String {
    "daily".to_string()
}

fn default_otlp_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_otlp_timeout_seconds() -> u64 {
    10
}

fn default_trace_sample_ratio() -> f64 {
    1.0
}

fn default_service_name() -> String {
    "pitwall".to_string()
}

fn default_deployment_environment() -> String {
    "development".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file_enabled: false,
            file_directory: default_file_directory(),
            file_prefix: default_file_prefix(),
            file_rotation: default_file_rotation(),
            opentelemetry_enabled: false,
            otlp_endpoint: default_otlp_endpoint(),
            otlp_timeout_seconds: default_otlp_timeout_seconds(),
            trace_sample_ratio: default_trace_sample_ratio(),
            service_name: default_service_name(),
            service_version: None,
            deployment_environment: default_deployment_environment(),
        }
    }
}

const FILE_ROTATIONS: &[&str] = &["daily", "hourly", "minutely", "never"];

impl Config {
    /// Load configuration from defaults, config file and environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("PITWALL")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            );

        // Variables understood by existing deployments.
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(path) = std::env::var("DB_PATH") {
            builder = builder.set_override("database.url", sqlite_url(&path))?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.server.request_timeout_seconds == 0 {
            return Err("server.request_timeout_seconds must be non-zero".to_string());
        }
        if self.database.url.trim().is_empty() {
            return Err("database.url must not be empty".to_string());
        }
        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be at least 1".to_string());
        }
        if self.database.pool_timeout_seconds == 0 {
            return Err("database.pool_timeout_seconds must be non-zero".to_string());
        }
        if !FILE_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation must be one of {}, got '{}'",
                FILE_ROTATIONS.join(", "),
                self.logging.file_rotation
            ));
        }
        if !(0.0..=1.0).contains(&self.logging.trace_sample_ratio) {
            return Err("logging.trace_sample_ratio must be between 0 and 1".to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address '{addr}': {e}"))
    }
}

/// Accept both plain file paths and full `sqlite:` URLs.
fn sqlite_url(path: &str) -> String {
    if path.starts_with("sqlite:") {
        path.to_string()
    } else {
        format!("sqlite://{path}")
    }
}
