//! Receipt Points Service Command Line Interface
//!
//! Usage:
//!   points                   - Serve on 0.0.0.0:8080
//!   points -p 3000           - Serve on an alternate port
//!   points --no-cors         - Serve without permissive CORS headers

use clap::Parser;
use points_api::{run_server, ApiConfig};
use points_core::MemoryScoreStore;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "points")]
#[command(about = "Receipt points HTTP service")]
#[command(version)]
struct Cli {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Disable permissive CORS headers
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = ApiConfig {
        host: cli.host,
        port: cli.port,
        enable_cors: !cli.no_cors,
    };

    // Scores live for the process lifetime only.
    let store = Arc::new(MemoryScoreStore::new());

    if let Err(e) = run_server(&config, store).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
