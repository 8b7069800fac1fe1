//! Wraps teloxide::Bot and implements [`placebot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use placebot_core::{
    parse_message_id, Bot as CoreBot, Chat, OutgoingMessage, ParseMode, PlacebotError, ReplyMarkup,
    Result,
};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup,
    KeyboardButton, KeyboardMarkup, MessageId,
};

/// Thin wrapper around teloxide::Bot that implements placebot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Converts a core keyboard to the teloxide representation.
pub fn to_teloxide_markup(markup: &ReplyMarkup) -> teloxide::types::ReplyMarkup {
    match markup {
        ReplyMarkup::InlineKeyboard(rows) => {
            let rows = rows.iter().map(|row| {
                row.iter()
                    .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.callback_data.clone()))
                    .collect::<Vec<_>>()
            });
            teloxide::types::ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows))
        }
        ReplyMarkup::ReplyKeyboard {
            rows,
            resize,
            one_time,
        } => {
            let rows = rows.iter().map(|row| {
                row.iter()
                    .map(|b| {
                        let button = KeyboardButton::new(b.text.clone());
                        if b.request_location {
                            button.request(ButtonRequest::Location)
                        } else {
                            button
                        }
                    })
                    .collect::<Vec<_>>()
            });
            let mut keyboard = KeyboardMarkup::new(rows);
            if *resize {
                keyboard = keyboard.resize_keyboard();
            }
            if *one_time {
                keyboard = keyboard.one_time_keyboard();
            }
            teloxide::types::ReplyMarkup::Keyboard(keyboard)
        }
    }
}

#[allow(deprecated)]
fn to_teloxide_parse_mode(mode: ParseMode) -> teloxide::types::ParseMode {
    match mode {
        ParseMode::Markdown => teloxide::types::ParseMode::Markdown,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, chat: &Chat, message: &OutgoingMessage) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), message.text.clone());
        if let Some(markup) = &message.markup {
            request = request.reply_markup(to_teloxide_markup(markup));
        }
        if let Some(mode) = message.parse_mode {
            request = request.parse_mode(to_teloxide_parse_mode(mode));
        }
        let sent = request
            .await
            .map_err(|e| PlacebotError::Bot(e.to_string()))?;
        Ok(sent.id.to_string())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| PlacebotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(|e| PlacebotError::Bot(e.to_string()))?;
        Ok(())
    }
}
