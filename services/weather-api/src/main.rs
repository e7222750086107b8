//! Airport weather API server.
//!
//! Serves the collector and query surfaces for the in-memory airport
//! weather registry on a single listener.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use weather_api::state::AppState;

/// Airport weather API server
#[derive(Parser, Debug)]
#[command(name = "weather-api")]
#[command(about = "In-memory airport weather collection and query server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:9090", env = "WEATHER_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "WEATHER_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("Starting airport weather API server");

    // All state is process-resident; startup re-seeds the default airports.
    let state = Arc::new(AppState::new());
    info!(airports = state.store.len(), "registry seeded");

    let app = weather_api::build_router(state);

    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");
    info!("Weather API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
