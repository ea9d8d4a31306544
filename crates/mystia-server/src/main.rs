//! Mystia voice backend
//!
//! Serves account, channel and admin calls and mints join grants for the
//! external media server.

use clap::Parser;
use mystia_server::{ServerOverrides, run};

/// Command line interface for the Mystia server
#[derive(Parser, Debug)]
#[command(name = "mystia")]
#[command(about = "Mystia voice backend - accounts, channels and media grants")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// RPC server port (overrides `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Media server port (rewrites the port of `media.url`)
    #[arg(long = "media-port")]
    pub media_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(
        cli.config.as_deref(),
        ServerOverrides {
            port: cli.port,
            media_port: cli.media_port,
        },
    )
    .await
}
