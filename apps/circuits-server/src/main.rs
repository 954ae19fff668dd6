use anyhow::{Context, Result};
use axum::{extract::Request, ServiceExt};
use circuits_server::{logging, App, AppConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Circuits server - levels and retail REST API
#[derive(Parser, Debug)]
#[command(name = "circuits-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long, global = true)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Commands {
    /// Run the HTTP server (default)
    #[default]
    Serve,

    /// Apply database migrations and exit
    Migrate,

    /// Print the OpenAPI document as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    let command = cli.command.unwrap_or_default();
    if let Commands::Openapi = command {
        println!("{}", circuits_server::app::openapi().to_pretty_json()?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    let app = App::init(&config).await?;
    match command {
        Commands::Migrate => {
            app.migrate().await?;
            tracing::info!("Migrations applied");
            Ok(())
        }
        _ => serve(app, &config).await,
    }
}

async fn serve(app: App, config: &AppConfig) -> Result<()> {
    if config.database.auto_migrate {
        app.migrate().await?;
    }

    let router = app.router(&config.server);
    let addr = config.server.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "HTTP server listening");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(router))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
