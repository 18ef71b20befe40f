//! Storage configuration types.

use photodrop_shared::StorageSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: AWS S3, Cloudflare R2, Supabase, DigitalOcean Spaces
    S3 {
        /// S3 endpoint URL (empty for AWS S3 proper).
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Storage region.
        region: String,
    },
    /// Local filesystem (development only)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageProvider {
    /// Create S3-compatible provider (AWS S3, Cloudflare R2, Supabase).
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create local filesystem provider (development only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Resolve the provider from process-wide settings.
    ///
    /// A configured bucket selects S3; otherwise a configured local root
    /// selects the filesystem backend. Returns `None` when neither is set,
    /// leaving upload issuing unavailable.
    #[must_use]
    pub fn from_settings(settings: &StorageSettings) -> Option<Self> {
        if let Some(bucket) = &settings.bucket {
            return Some(Self::s3(
                settings.endpoint.clone(),
                bucket.clone(),
                settings.access_key_id.clone(),
                settings.secret_access_key.clone(),
                settings.region.clone(),
            ));
        }

        settings
            .local_root
            .as_ref()
            .map(|root| Self::local_fs(root.clone()))
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
        }
    }
}

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Presigned PUT URL TTL in seconds (default: 300 = 5 minutes).
    pub presign_put_ttl_secs: u64,
}

impl StorageConfig {
    /// Default presigned PUT TTL: 5 minutes.
    pub const DEFAULT_PUT_TTL: u64 = 300;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            presign_put_ttl_secs: Self::DEFAULT_PUT_TTL,
        }
    }

    /// Set presigned PUT URL TTL.
    #[must_use]
    pub fn with_put_ttl(mut self, secs: u64) -> Self {
        self.presign_put_ttl_secs = secs;
        self
    }
}
