//! Command-line interface for the Drop Four server.

use clap::Parser;
use std::path::PathBuf;

/// Drop Four - two-player Connect Four over HTTP
#[derive(Parser, Debug)]
#[command(name = "drop_four")]
#[command(about = "Two-player Connect Four with a server-rendered web front end", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to (falls back to $PORT, then 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory of static assets served under /static
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,
}
