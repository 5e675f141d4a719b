// CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "s3tool")]
#[command(version = "0.1.0")]
#[command(about = "A minimal single-bucket S3 listing and upload tool", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.s3tool/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List object keys in the bucket
    Ls(LsArgs),
    /// Upload a local file to the bucket
    Put(PutArgs),
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Key prefix (overrides the configured default prefix)
    pub prefix: Option<String>,

    /// Only print keys matching this regular expression (unanchored)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Long listing format (show details)
    #[arg(short, long)]
    pub long: bool,

    /// Human-readable sizes
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(Args, Debug)]
pub struct PutArgs {
    /// Local file to upload
    pub source: String,

    /// Destination key (a trailing '/' appends the source file name)
    pub key: String,

    /// Content type for the uploaded object
    #[arg(long)]
    pub content_type: Option<String>,
}
