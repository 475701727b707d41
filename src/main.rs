//! # Prayer Night Bot Main Entry Point
//!
//! Initializes logging, loads configuration, builds the prayer-times client
//! and session store, then runs the Telegram dispatcher next to the health
//! server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prayer_night_bot::bot::commands::Command;
use prayer_night_bot::bot::controller::Conversation;
use prayer_night_bot::bot::handlers::BotHandler;
use prayer_night_bot::config::Config;
use prayer_night_bot::services::health::HealthService;
use prayer_night_bot::services::prayer_times::AladhanProvider;
use prayer_night_bot::services::session_store::SessionStore;
use prayer_night_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prayer_night_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Prayer Night Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Prayer API: {} (method {}), HTTP Port: {}",
        config.prayer_api_base_url, config.calculation_method, config.http_port
    );

    let store = SessionStore::new();
    let provider = Arc::new(AladhanProvider::from_config(&config)?);
    let conversation = Conversation::new(store.clone(), provider);

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }
    let handler = BotHandler::new(conversation);
    info!("Telegram bot initialized successfully");

    let health_service = HealthService::new(store);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .default_handler(|upd| async move {
                tracing::debug!("Unhandled update: {:?}", upd.kind);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
