//! syn-index: index one S3 object as a catalog File entity.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use synsync::cli::{bootstrap_client, CommonArgs};
use synsync::ops::index::{index_object, IndexRequest};
use synsync::uri::S3Uri;

/// Index an S3 object as a catalog File entity
#[derive(Parser)]
#[command(name = "syn-index")]
#[command(about = "Index an S3 object as a Synapse File entity with a content checksum")]
struct Cli {
    /// Storage location id the object lives under
    #[arg(long = "storage_id")]
    storage_id: i64,

    /// Local copy of the object (checksum and display-name source)
    #[arg(long)]
    file: PathBuf,

    /// S3 URI of the object (s3://bucket/key)
    #[arg(long)]
    uri: String,

    /// Parent folder entity id
    #[arg(long = "parent_id")]
    parent_id: String,

    #[command(flatten)]
    common: CommonArgs,
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let (_config, client) = bootstrap_client(&cli.common)?;
    let uri: S3Uri = cli.uri.parse()?;
    let request = IndexRequest {
        storage_id: cli.storage_id,
        file: cli.file.clone(),
        uri,
        parent_id: cli.parent_id.clone(),
    };
    let outcome = index_object(&client, &request)
        .await
        .with_context(|| format!("Failed to index {}", cli.uri))?;
    Ok(format!("{},{}", outcome.uri, outcome.entity_id))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
