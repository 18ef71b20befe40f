//! Upload error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Upload ticket issuing errors.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Required storage configuration is absent.
    #[error("upload storage is not configured: {0}")]
    NotConfigured(String),

    /// Storage signing failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl UploadError {
    /// Create a not-configured error.
    #[must_use]
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }
}
