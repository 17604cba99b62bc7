//! WebServer entry point
//!
//! Opens the configured store and recommender, then serves the planner API
//! until Ctrl+C.

use std::net::SocketAddr;

use clap::Parser;
use tokio::signal;

use planner::config::{build_planner, PlanningArgs, RecommenderArgs, StoreArgs};
use shared::{logging, process_info, ProcessId};
use webserver::{build_router, AppState, WebServerError};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP API for daily and weekly outfit planning")]
struct Args {
    /// Address the HTTP server binds to
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(flatten)]
    store: StoreArgs,

    #[command(flatten)]
    recommender: RecommenderArgs,

    #[command(flatten)]
    planning: PlanningArgs,
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), "outfit planner API");

    let planner = build_planner(&args.store, &args.recommender, &args.planning).await?;
    let router = build_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", args.bind, e)))?;
    process_info!(ProcessId::current(), "🌐 Listening on http://{}", args.bind);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
