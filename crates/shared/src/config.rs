//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Object storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Object storage configuration.
///
/// `bucket` is required for issuing upload URLs; a missing bucket leaves the
/// service running but every upload request fails server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Target bucket name. Required for issuing upload URLs.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Storage region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3-compatible endpoint URL (empty for AWS S3 proper).
    #[serde(default)]
    pub endpoint: String,
    /// Access key ID for the storage provider.
    #[serde(default)]
    pub access_key_id: String,
    /// Secret access key for the storage provider.
    #[serde(default)]
    pub secret_access_key: String,
    /// Local filesystem root (development only, used when no bucket is set).
    #[serde(default)]
    pub local_root: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            bucket: None,
            region: default_region(),
            endpoint: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            local_root: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PHOTODROP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
