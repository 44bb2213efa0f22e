//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hobbyhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Session cookie settings.
    pub session: SessionConfig,
    /// Profile image upload settings.
    pub uploads: UploadsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Session cookie configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookie signing secret. Empty means a key is generated at startup,
    /// which invalidates sessions on restart. Must be at least 64 bytes
    /// when set.
    pub secret: String,
    /// Inactivity window after which a session expires.
    pub expiry_minutes: i64,
}

/// Upload backend configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Which file-store backend to use.
    pub mode: UploadMode,
    /// Local upload directory (`local` mode; also the source for serving
    /// `/images/uploads`).
    pub dir: String,
    /// Bucket name (`s3` mode).
    pub bucket: String,
    /// Bucket region (`s3` mode).
    pub region: String,
}

/// File-store backend selector, fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    #[default]
    Local,
    S3,
}

impl Config {
    /// Load configuration from `hobbyhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails semantic validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("hobbyhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOBBYHUB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HOBBYHUB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOBBYHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("HOBBYHUB_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("HOBBYHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("HOBBYHUB_SESSION_SECRET") {
            self.session.secret = val;
        }
        if let Ok(val) = std::env::var("HOBBYHUB_UPLOADS_MODE") {
            match val.as_str() {
                "local" => self.uploads.mode = UploadMode::Local,
                "s3" => self.uploads.mode = UploadMode::S3,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("HOBBYHUB_UPLOADS_DIR") {
            self.uploads.dir = val;
        }
        if let Ok(val) = std::env::var("HOBBYHUB_S3_BUCKET") {
            self.uploads.bucket = val;
        }
        if let Ok(val) = std::env::var("HOBBYHUB_S3_REGION") {
            self.uploads.region = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.session.secret.is_empty() && self.session.secret.len() < 64 {
            return Err(ConfigError::Validation(
                "session secret must be at least 64 bytes when set".to_string(),
            ));
        }
        if self.uploads.mode == UploadMode::S3 && self.uploads.bucket.is_empty() {
            return Err(ConfigError::Validation(
                "uploads.bucket is required in s3 mode".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:hobbyhub.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hobbyhubd=info,hobbyhub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiry_minutes: 30,
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            mode: UploadMode::Local,
            dir: "uploads".to_string(),
            bucket: String::new(),
            region: "us-east-1".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
