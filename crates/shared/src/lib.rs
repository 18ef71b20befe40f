//! Shared configuration for Photodrop.
//!
//! This crate provides the process-wide configuration read once at startup
//! and injected into every other crate.

pub mod config;

pub use config::{AppConfig, ServerConfig, StorageSettings};
