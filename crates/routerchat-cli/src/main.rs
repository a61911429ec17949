//! CLI entry point - the composition root.
//!
//! Parses arguments, initializes logging, and hands off to the Axum
//! adapter. All wiring lives in `routerchat_axum::bootstrap`.

use std::path::PathBuf;

use clap::Parser;
use routerchat_axum::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "routerchat", version, about = "OpenRouter chat relay server")]
struct Cli {
    /// Port to serve on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Path to the directory containing built frontend assets
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable); all origins are allowed when unset
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,

    /// Override the upstream API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig::with_defaults();
        config.port = self.port;
        if let Some(static_dir) = &self.static_dir {
            config = config.with_static_dir(static_dir);
        }
        if !self.allow_origins.is_empty() {
            config = config.with_allowed_origins(self.allow_origins.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    routerchat_axum::start_server(cli.server_config()).await
}
