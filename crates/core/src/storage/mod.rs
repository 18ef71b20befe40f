//! Object storage via Apache OpenDAL.
//!
//! This module provides vendor-agnostic presigned upload URLs with support
//! for:
//! - S3-compatible: AWS S3, Cloudflare R2, Supabase Storage, DigitalOcean Spaces
//! - Local filesystem (development only)
//!
//! The service wraps a single long-lived [`opendal::Operator`] constructed at
//! startup and shared read-only across invocations.

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{PresignedUpload, StorageService};
