//! Emotion Analysis API
//!
//! A mock reflection analyser served over HTTP with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                  EMOTION API                     │
//!                    │                                                  │
//!   POST /analyze    │  ┌─────────┐    ┌──────────┐    ┌────────────┐   │
//!  ──────────────────┼─▶│  http   │───▶│ request  │───▶│ classifier │   │
//!                    │  │ server  │    │ validate │    │  (tables)  │   │
//!                    │  └─────────┘    └──────────┘    └─────┬──────┘   │
//!                    │                                       │          │
//!   JSON result      │  ┌──────────┐                         │          │
//!  ◀─────────────────┼──│ response │◀────────────────────────┘          │
//!                    │  └──────────┘                                    │
//!                    │                                                  │
//!                    │  config · observability · lifecycle              │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use emotion_api::config::{load_config, validate_config, ConfigError, ServiceConfig};
use emotion_api::http::{HttpServer, ANALYZE_PATH};
use emotion_api::lifecycle::Shutdown;
use emotion_api::observability::init_logging;

#[derive(Parser)]
#[command(name = "emotion-api")]
#[command(about = "Mock emotion analysis API", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability);

    tracing::info!("emotion-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        processing_delay_ms = config.analysis.processing_delay_ms,
        seeded = config.analysis.rng_seed.is_some(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    println!("🧠 Emotion Analysis API running on http://{}", local_addr);
    println!("📝 Available endpoint: POST {}", ANALYZE_PATH);
    println!("🔍 Send JSON: {{\"text\": \"your reflection here\"}}");
    println!("{}", "=".repeat(50));

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
