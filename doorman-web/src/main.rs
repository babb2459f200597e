//! Doorman Web Server
//!
//! A membership portal with role-gated pages, resolved per request from the
//! caller's user identifier.

use clap::Parser;
use doorman_web::server::DoormanServerBuilder;
use doorman_web::{init_logging, WebConfig};
use tracing::info;

/// Doorman Web Server - role-gated membership portal
#[derive(Parser)]
#[command(name = "doorman-web")]
#[command(about = "A role-gated membership portal")]
#[command(version)]
struct Args {
    /// Server host to bind to (overrides DOORMAN_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on (overrides DOORMAN_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Static files directory (overrides DOORMAN_STATIC_DIR)
    #[arg(long)]
    static_dir: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Environment configuration with flag overrides applied on top
    fn into_config(self) -> WebConfig {
        let mut config = WebConfig::from_env();
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.dev {
            config.dev_mode = true;
        }
        if self.static_dir.is_some() {
            config.static_dir = self.static_dir;
        }
        config
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var(
            "RUST_LOG",
            format!("doorman_web={},tower_http=debug", args.log_level),
        );
    }
    init_logging();

    // .env values participate in WebConfig::from_env below
    dotenvy::dotenv().ok();

    let config = args.into_config();
    info!("Configured to serve on http://{}", config.address());
    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir);
    }

    let server = DoormanServerBuilder::with_config(config).build();

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed: {}", e);
        std::process::exit(1);
    }
}
