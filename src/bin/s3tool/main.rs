// s3tool - A minimal single-bucket S3 listing and upload tool

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{execute_ls, execute_put};
use config::S3ToolConfig;
use s3tool::oss::AwsS3ObjectStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = S3ToolConfig::load(cli.config.as_deref())?;

    // Create the store session; credentials are validated lazily,
    // on the first backend call
    let bucket = config.store.bucket.clone();
    let default_prefix = config.store.prefix.clone();
    let store = AwsS3ObjectStore::new(config.store)?;

    // Execute command
    match &cli.command {
        Commands::Ls(args) => execute_ls(args, &store, &bucket, default_prefix.as_deref()).await?,
        Commands::Put(args) => execute_put(args, &store, &bucket).await?,
    }

    Ok(())
}
