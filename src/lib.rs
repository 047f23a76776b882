//! ubeat - artist lookups against the ubeat music catalog
//!
//! This library fetches artist metadata from the catalog HTTP API and hands
//! back the first matching record.

/// Client modules for interacting with the catalog service
pub mod clients;
/// Client configuration resolved from explicit values, environment and defaults
pub mod config;

pub use clients::errors::{Error, Result};
