//! chat-feed - entry point.
//!
//! Startup order:
//! 1. Load configuration from `.env` and environment variables.
//! 2. Initialise tracing (JSON in production, pretty in dev).
//! 3. Build the chat source, seeded from a file when configured.
//! 4. Build the Axum app and serve it with graceful shutdown.

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chat_feed::adapters::chat::InMemoryChatSource;
use chat_feed::adapters::http::{build_app, MessagesAppState};
use chat_feed::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_validated()?;

    init_tracing(&config.server);
    info!(version = env!("CARGO_PKG_VERSION"), "chat-feed starting");

    let chat_source = match &config.chat.seed_file {
        Some(path) => {
            let source = InMemoryChatSource::from_seed_file(path, config.chat.window_size).await?;
            info!(path = %path.display(), messages = source.len().await, "Loaded seed messages");
            source
        }
        None => InMemoryChatSource::new(config.chat.window_size),
    };

    let state = MessagesAppState::new(Arc::new(chat_source));
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chat-feed stopped");
    Ok(())
}

/// RUST_LOG wins over the configured filter; an unparseable value falls back to `info`.
fn init_tracing(server: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|e| {
            eprintln!(
                "WARN: log level '{}' is not a valid tracing filter ({}); falling back to 'info'",
                server.log_level, e
            );
            EnvFilter::new("info")
        });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if server.json_logs() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
