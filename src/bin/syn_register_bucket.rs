//! syn-register-bucket: register an S3 bucket/prefix as an external storage
//! location and print the allocated identifier.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::process;
use synsync::cli::{bootstrap_client, CommonArgs};
use synsync::ops::register::register_bucket;

/// Register an S3 bucket as a catalog storage location
#[derive(Parser)]
#[command(name = "syn-register-bucket")]
#[command(about = "Register an S3 bucket/prefix as a Synapse storage location")]
struct Cli {
    /// S3 bucket name
    #[arg(long)]
    bucket: String,

    /// Key prefix within the bucket
    #[arg(long = "base_key")]
    base_key: String,

    #[command(flatten)]
    common: CommonArgs,
}

async fn run(cli: &Cli) -> anyhow::Result<i64> {
    let (_config, client) = bootstrap_client(&cli.common)?;
    register_bucket(&client, &cli.bucket, &cli.base_key)
        .await
        .with_context(|| format!("Failed to register bucket {:?}", cli.bucket))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(storage_id) => {
            // No trailing newline: downstream tooling consumes the raw value.
            print!("{}", storage_id);
            let _ = std::io::stdout().flush();
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
