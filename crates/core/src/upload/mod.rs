//! Upload ticket issuing.
//!
//! This module provides the business logic for direct-to-storage uploads:
//! - Collision-resistant object key generation
//! - Presigned PUT URL issuing with a fixed expiry
//! - Content-type defaulting

mod error;
mod service;
mod types;

pub use error::UploadError;
pub use service::{UploadService, UploadSigner};
pub use types::{DEFAULT_CONTENT_TYPE, PHOTO_EXTENSION, UploadContext, UploadTicket};
