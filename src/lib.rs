//! Synsync: S3-to-Synapse Catalog Synchronization
//!
//! Library backing four command-line tools that register S3-backed storage
//! with the Synapse catalog and index S3 objects as catalog entities.

pub mod checksum;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mirror;
pub mod ops;
pub mod sanitize;
pub mod types;
pub mod uri;
