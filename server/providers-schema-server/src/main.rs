use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use providers_schema_server::{
    create_app, schema::cached_providers_schema, SchemaServer, ServerConfig, ServerError,
};

/// Providers configuration JSON Schema server
#[derive(Parser, Debug)]
#[command(name = "providers-schema-server")]
#[command(about = "Serves the providers configuration JSON Schema over HTTP")]
#[command(version)]
struct Args {
    /// Server bind address
    #[arg(long, env = "SCHEMA_SERVER_HOST")]
    host: Option<String>,

    /// Server port
    #[arg(short, long, env = "SCHEMA_SERVER_PORT")]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit structured JSON logs
    #[arg(long, env = "SCHEMA_SERVER_JSON_LOGS")]
    json_logs: bool,

    /// Print the providers schema to stdout and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let dotenv_path = dotenvy::dotenv().ok();

    let args = Args::parse();

    if args.print_schema {
        let rendered = serde_json::to_string_pretty(cached_providers_schema())
            .context("Failed to render providers schema")?;
        println!("{rendered}");
        return Ok(());
    }

    init_tracing(args.verbose, args.json_logs)?;

    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "Loaded environment file");
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let addr = config.socket_addr()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %addr,
        "Starting providers schema server"
    );

    let app = create_app(SchemaServer::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!("Providers schema available at: http://{}/schema/providers.json", addr);
    info!("Health check available at: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received, draining connections");
}

fn init_tracing(verbose: bool, json_logs: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("providers_schema_server={},tower_http=info,hyper=info", level).into()
    });

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init()
            .context("Failed to initialize tracing")?;
    } else {
        let use_colors = std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_colors)
                    .with_level(true),
            )
            .try_init()
            .context("Failed to initialize tracing")?;
    }

    Ok(())
}
