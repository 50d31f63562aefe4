use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::documents::Layout;

/// Environment variable holding the generation API key. The key is a
/// secret and is never read from config.toml.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub generator: GeneratorConfig,

    pub documents: DocumentsConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (0 = number of CPU cores)
    pub worker_threads: usize,

    pub max_db_connections: u32,

    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/lexgt.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,

    /// Session cookie expires after this many minutes of inactivity.
    pub session_minutes: i64,

    /// When true, cases are stamped with the session username on creation
    /// and listings only return the caller's cases. When false the owner
    /// column stays NULL and every session sees every case.
    pub scope_cases_to_owner: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7050,
            cors_allowed_origins: vec![
                "http://localhost:7050".to_string(),
                "http://127.0.0.1:7050".to_string(),
            ],
            session_minutes: 60,
            scope_cases_to_owner: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub base_url: String,

    pub model: String,

    /// Transport timeout for the generation round-trip; there is no retry.
    pub request_timeout_seconds: u64,

    /// Populated from the environment, never from the config file.
    #[serde(skip)]
    pub api_key: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: crate::clients::gemini::DEFAULT_BASE_URL.to_string(),
            model: crate::clients::gemini::DEFAULT_MODEL.to_string(),
            request_timeout_seconds: 60,
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.generator.api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("config.toml"),
            PathBuf::from("/etc/lexgt/config.toml"),
        ]
    }

    /// Fatal-at-startup checks. The generation API key is the one required
    /// secret; without it no document can be drafted, so refuse to serve.
    pub fn validate(&self) -> Result<()> {
        if self.generator.api_key.is_empty() {
            bail!("API key not configured. Set {API_KEY_ENV} in the environment or .env");
        }
        if self.general.min_db_connections > self.general.max_db_connections {
            bail!("min_db_connections must not exceed max_db_connections");
        }
        Ok(())
    }
}
