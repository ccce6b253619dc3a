//! syn-mirror: mirror an S3 "directory" hierarchy into catalog Folder
//! entities, printing the parent folder of every input object.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use synsync::cli::{bootstrap_client, CommonArgs};
use synsync::ops::mirror_run::mirror_object_list;

/// Mirror an S3 directory hierarchy into catalog folders
#[derive(Parser)]
#[command(name = "syn-mirror")]
#[command(about = "Mirror an S3 directory hierarchy into Synapse Folder entities")]
struct Cli {
    /// Newline-delimited list of object URIs
    #[arg(long)]
    objects: PathBuf,

    /// Root prefix shared by every object URI
    #[arg(long = "s3_prefix", alias = "outdir")]
    s3_prefix: String,

    /// Pre-existing folder entity id the tree is anchored under
    #[arg(long = "parent_id")]
    parent_id: String,

    #[command(flatten)]
    common: CommonArgs,
}

async fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let (_config, client) = bootstrap_client(&cli.common)?;
    let records = mirror_object_list(&client, &cli.objects, &cli.s3_prefix, &cli.parent_id)
        .await
        .with_context(|| format!("Failed to mirror {}", cli.objects.display()))?;
    Ok(records
        .into_iter()
        .map(|r| format!("{},{}", r.object_uri, r.folder_id))
        .collect())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
