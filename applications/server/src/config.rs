/// Server configuration
use crate::error::{Result, ServerError};
use roster_storage::PoolSettings;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_database")]
    pub database: DatabaseSettings,

    #[serde(default = "default_http")]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    /// No default: zero means "not configured" and fails validation
    #[serde(default)]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// No default: empty means "not configured" and fails validation
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, std::env::vars().collect())
    }

    /// Load configuration from file and an explicit environment map
    ///
    /// Precedence, lowest first: defaults, config file, `ROSTER_*` variables,
    /// then the plain `PORT` and `DATABASE_URL` variables.
    pub fn load_with_env(path: Option<&Path>, env: HashMap<String, String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                // Load from config file if it exists
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (e.g. ROSTER_HTTP__MAX_BODY_BYTES)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        settings = settings
            .set_override_option("server.port", env.get("PORT").cloned())
            .and_then(|s| s.set_override_option("database.url", env.get("DATABASE_URL").cloned()))
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "listen port is required (set PORT)".to_string(),
            ));
        }

        if self.database.url.trim().is_empty() {
            return Err(ServerError::Config(
                "database URL is required (set DATABASE_URL)".to_string(),
            ));
        }

        if self.http.max_body_bytes == 0 {
            return Err(ServerError::Config(
                "http.max_body_bytes must be greater than zero".to_string(),
            ));
        }

        self.bind_addr()?;

        Ok(())
    }

    /// Socket address the listener binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(format!("invalid host {:?}: {}", self.server.host, e)))?;

        Ok(SocketAddr::new(ip, self.server.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_secs)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.database.max_connections,
            acquire_timeout: Duration::from_secs(self.database.acquire_timeout_secs),
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: 0,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_database() -> DatabaseSettings {
    DatabaseSettings {
        url: String::new(),
        max_connections: default_max_connections(),
        acquire_timeout_secs: default_acquire_timeout_secs(),
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_http() -> HttpSettings {
    HttpSettings {
        max_body_bytes: default_max_body_bytes(),
        request_timeout_secs: default_request_timeout_secs(),
    }
}

fn default_max_body_bytes() -> usize {
    1_048_576
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            database: default_database(),
            http: default_http(),
        }
    }
}
