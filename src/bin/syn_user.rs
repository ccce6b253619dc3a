//! syn-user: print the authenticated principal's numeric identifier.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::process;
use synsync::cli::{bootstrap_client, CommonArgs};
use synsync::ops::identity::resolve_user_id;

/// Resolve the authenticated catalog user id
#[derive(Parser)]
#[command(name = "syn-user")]
#[command(about = "Print the authenticated Synapse user's numeric identifier")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let (_config, client) = bootstrap_client(&cli.common)?;
    let user_id = resolve_user_id(&client)
        .await
        .context("Failed to resolve user profile")?;
    Ok(user_id)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(user_id) => {
            // No trailing newline: downstream tooling consumes the raw value.
            print!("{}", user_id);
            let _ = std::io::stdout().flush();
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
