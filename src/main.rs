//! Novelty API entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use novelty_api::api::{create_router, AppState};
use novelty_api::config::Config;
use novelty_api::metrics;
use novelty_api::utils::shutdown_signal;

/// Novelty JSON endpoints with liveness/readiness probes.
#[derive(Parser, Debug)]
#[command(name = "novelty-api")]
#[command(about = "Serves random colors, cats, jokes and photos over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so LOG_FORMAT can take effect
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    init_tracing(&config, args.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("novelty_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let fmt_layer = if config.json_logs() {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("NOVELTY API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.ensure_valid() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(e.into());
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.host, config.port);
    println!("  Cat API: {}", config.cat_api_url);
    println!("  Joke API: {}", config.joke_api_url);
    match config.upstream_timeout_ms {
        Some(ms) => println!("  Upstream Timeout: {}ms", ms),
        None => println!("  Upstream Timeout: none"),
    }
    println!("  Pool Size: {}", config.http_pool_size);
    println!("  Log Format: {}", config.log_format);
    if config.metrics_enabled {
        println!("  Metrics: Enabled (port {})", config.metrics_port);
    } else {
        println!("  Metrics: Disabled");
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.ensure_valid() {
        error!("{}", e);
        return Err(e.into());
    }

    metrics::init_metrics();
    if config.metrics_enabled {
        let metrics_addr = SocketAddr::new(
            config.bind_addr()?.ip(),
            config.metrics_port,
        );
        metrics::install_exporter(metrics_addr)?;
    }

    info!("Cat API: {}", config.cat_api_url);
    info!("Joke API: {}", config.joke_api_url);
    if config.upstream_timeout_ms.is_none() {
        info!("No upstream timeout configured");
    }

    let app_state = AppState::from_config(&config)?;
    info!("Hostname: {}", app_state.hostname);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state.clone());
    app_state.set_ready(true);

    let shutdown_state = app_state.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            shutdown_state.set_ready(false);
        })
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
