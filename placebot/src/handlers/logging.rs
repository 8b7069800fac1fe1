//! Logs every inbound event in before() and the final response in after(); never stops the chain.

use async_trait::async_trait;
use placebot_core::{Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let content = match &message.kind {
            MessageKind::Text(text) => text.clone(),
            MessageKind::Callback { data, .. } => data.clone(),
            MessageKind::Location(loc) => format!("{},{}", loc.latitude, loc.longitude),
            MessageKind::Unsupported => String::new(),
        };
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = message.kind_name(),
            message_content = %content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
