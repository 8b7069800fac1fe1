//! Wires config, Telegram adapter, places client and handler chain, then runs the dispatcher.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use placebot_core::{init_tracing, Bot};
use placebot_telegram::{run_dispatcher, TelegramBotAdapter};
use places_client::{mask_token, GooglePlacesClient, PlacesClient};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::config::BotConfig;
use crate::handlers::{ConversationHandler, LoggingHandler};
use crate::session::SessionStore;

/// Builds the chain: LoggingHandler first, ConversationHandler as the terminal handler.
/// Tests pass a mock [`Bot`] and a places client pointed at a local server.
pub fn build_handler_chain(
    config: &BotConfig,
    bot: Arc<dyn Bot>,
    places: Arc<dyn PlacesClient>,
    sessions: Arc<SessionStore>,
    catalog: Arc<Catalog>,
) -> HandlerChain {
    let conversation = ConversationHandler::new(bot, places, sessions, catalog)
        .with_radius_meters(config.radius_meters())
        .with_result_limit(config.result_limit());
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(conversation))
}

/// Main entry: validate config, init logging, build the chain, then run the dispatcher until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        places_api_url = %config.places_api_url(),
        places_api_key = %mask_token(config.places_api_key()),
        radius_meters = config.radius_meters(),
        result_limit = config.result_limit(),
        "Initializing bot"
    );

    let teloxide_bot = config
        .base()
        .telegram
        .build_bot()
        .context("Failed to build Telegram bot")?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let places: Arc<dyn PlacesClient> = Arc::new(GooglePlacesClient::with_base_url(
        config.places_api_key().to_string(),
        config.places_api_url().to_string(),
    ));
    let handler_chain = build_handler_chain(
        &config,
        bot,
        places,
        Arc::new(SessionStore::new()),
        Arc::new(Catalog::default()),
    );

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, handler_chain).await?;
    info!("Bot stopped");

    Ok(())
}
