//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes them to HandlerChain.
//! Updates are distributed by sender, so one user's updates run one after another across all their chats.
//! Inbound logging belongs to the chain. Stops on SIGINT / SIGTERM.

use handler_chain::HandlerChain;
use placebot_core::{Message as CoreMessage, ToCoreMessage};
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Update, UserId};
use tokio::signal;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Dispatcher queue key: the sender, or none for updates without one (those run concurrently).
fn sender_key(update: &Update) -> Option<UserId> {
    update.from().map(|user| user.id)
}

/// Runs the chain for one event; failures are logged and never stop the dispatcher.
async fn run_chain(chain: &HandlerChain, core_msg: CoreMessage) {
    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    run_chain(&chain, core_msg).await;
    Ok(())
}

async fn on_callback(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    run_chain(&chain, core_msg).await;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal, stopping dispatcher"),
        _ = terminate => info!("Received terminate signal, stopping dispatcher"),
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain and returns after a shutdown signal.
/// Messages and callback queries are converted to core::Message; other update kinds are logged and dropped.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> anyhow::Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Connected to Telegram"
        ),
        Err(e) => warn!(error = %e, "getMe failed; continuing"),
    }

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    let mut dispatcher = Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update kind");
        })
        .distribution_function(sender_key)
        .build();

    let shutdown_token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        match shutdown_token.shutdown() {
            Ok(stopped) => {
                stopped.await;
                info!("Dispatcher stopped");
            }
            Err(e) => warn!(error = ?e, "Dispatcher was not running"),
        }
    });

    info!("Dispatcher started");
    dispatcher.dispatch().await;

    Ok(())
}
