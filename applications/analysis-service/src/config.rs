/// Service configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use userhub_directory_client::ClientConfig;

use crate::services::analysis::DEFAULT_PUBLIC_PROVIDERS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_directory")]
    pub directory: DirectorySettings,

    #[serde(default = "default_analysis")]
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectorySettings {
    /// Base URL of the directory service
    #[serde(default = "default_directory_url")]
    pub url: String,

    /// Bound on each call to the directory
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisSettings {
    /// Domain substrings treated as public mail providers
    #[serde(default = "default_public_providers")]
    pub public_providers: Vec<String>,
}

impl DirectorySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.url.clone()).with_timeout(self.timeout())
    }
}

impl ServiceConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; without one, `config.toml` in the
    /// working directory is used when present. Environment variables
    /// prefixed with `ANALYSIS_` override both, e.g. `ANALYSIS_DIRECTORY__URL`
    /// or `ANALYSIS_ANALYSIS__PUBLIC_PROVIDERS=gmail,yahoo`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ANALYSIS")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("analysis.public_providers")
                .try_parsing(true),
        );

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
                "Port must be non-zero (set ANALYSIS_SERVER__PORT)".to_string(),
            ));
        }

        if self.directory.url.trim().is_empty() {
            return Err(ServerError::Config(
                "Directory URL is required (set ANALYSIS_DIRECTORY__URL)".to_string(),
            ));
        }

        if self.directory.timeout_secs == 0 {
            return Err(ServerError::Config(
                "Directory timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_directory() -> DirectorySettings {
    DirectorySettings {
        url: default_directory_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_directory_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_analysis() -> AnalysisSettings {
    AnalysisSettings {
        public_providers: default_public_providers(),
    }
}

fn default_public_providers() -> Vec<String> {
    DEFAULT_PUBLIC_PROVIDERS
        .iter()
        .map(|p| (*p).to_string())
        .collect()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            directory: default_directory(),
            analysis: default_analysis(),
        }
    }
}
