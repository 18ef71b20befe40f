//! Core business logic for Photodrop.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//!
//! # Modules
//!
//! - `storage` - Vendor-agnostic object storage and presigned URL generation
//! - `upload` - Upload ticket issuing (unique keys, fixed-expiry signed URLs)

pub mod storage;
pub mod upload;
