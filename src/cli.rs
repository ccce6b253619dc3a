//! Shared CLI plumbing for the synsync binaries.

use crate::client::SynapseClient;
use crate::config::{ConfigLoader, SynapseConfig};
use crate::error::ApiError;
use crate::logging::init_logging;
use clap::Args;
use std::path::PathBuf;

/// Arguments every utility accepts.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file path (else SYNAPSE_AUTH_TOKEN must be set)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Load configuration, apply CLI logging overrides, and initialize logging.
pub fn bootstrap(args: &CommonArgs) -> Result<SynapseConfig, ApiError> {
    let mut config = ConfigLoader::load(args.config.as_deref())?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &args.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &args.log_output {
        config.logging.output = output.clone();
    }
    if let Some(file) = &args.log_file {
        config.logging.file = Some(file.clone());
    }
    init_logging(Some(&config.logging))?;
    Ok(config)
}

/// Bootstrap and open an authenticated catalog session in one step.
pub fn bootstrap_client(args: &CommonArgs) -> Result<(SynapseConfig, SynapseClient), ApiError> {
    let config = bootstrap(args)?;
    let client = SynapseClient::new(&config)?;
    Ok((config, client))
}
