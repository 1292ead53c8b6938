// newscheck - News snippet fact-checker backed by Gemini with Google Search grounding
// Author: kelexine (https://github.com/kelexine)

use anyhow::{Context, Result};
use clap::Parser;
use newscheck::cli::{Args, Command};
use newscheck::config::AppConfig;
use newscheck::error::EMPTY_INPUT_WARNING;
use newscheck::factcheck::{format_error, validate_input, FactChecker};
use newscheck::gemini::GeminiClient;
use newscheck::server::create_router;
use newscheck::utils::logging;
use std::io::{IsTerminal, Read};
use std::net::SocketAddr;
use std::process::ExitCode;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration, CLI flags win
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting newscheck v{}", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    // Phase 3: Build the Gemini client and handler
    let client = GeminiClient::new(&config.gemini)?;
    info!("Using model {} at {}", client.model(), client.endpoint());
    let checker = FactChecker::new(client);

    match args.command {
        Command::Check { text, json } => run_check(&checker, text, json).await,
        Command::Serve { .. } => {
            serve(&config, checker).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_check(checker: &FactChecker, text: Option<String>, json: bool) -> Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };

    // Caller-side check: blank input never reaches the API
    let text = match validate_input(&text) {
        Ok(text) => text,
        Err(_) => {
            eprintln!("⚠️ {}", EMPTY_INPUT_WARNING);
            return Ok(ExitCode::from(2));
        }
    };

    if json {
        let (output, code) = match checker.check(text).await {
            Ok(verdict) => (serde_json::to_string_pretty(&verdict)?, ExitCode::SUCCESS),
            Err(e) => (
                serde_json::to_string_pretty(&serde_json::json!({ "error": format_error(&e) }))?,
                ExitCode::FAILURE,
            ),
        };
        println!("{}", output);
        return Ok(code);
    }

    println!("{}", checker.fact_check(text).await);
    Ok(ExitCode::SUCCESS)
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste news snippet here, then press Ctrl+D:");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read snippet from stdin")?;
    Ok(text)
}

async fn serve(config: &AppConfig, checker: FactChecker) -> Result<()> {
    let app = create_router(checker);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
