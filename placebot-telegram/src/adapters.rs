//! Adapters from Telegram (teloxide) types to placebot_core types.
//! Depends only on teloxide and placebot_core type definitions.

use placebot_core::{Chat, Location, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Wraps a teloxide Message (text, location, anything else) for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: self.0.chat.id.0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: core_chat(&self.0.chat),
            kind: self.kind(),
            created_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn kind(&self) -> MessageKind {
        if let Some(text) = self.0.text() {
            return MessageKind::Text(text.to_string());
        }
        if let Some(location) = self.0.location() {
            return MessageKind::Location(Location {
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }
        MessageKind::Unsupported
    }
}

/// Wraps a teloxide CallbackQuery (inline-button press) for conversion to core [`Message`].
///
/// The chat comes from the message carrying the keyboard; without it the user's private chat is assumed.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let origin = self.0.message.as_ref();
        let chat = origin.map(|m| core_chat(m.chat())).unwrap_or_else(|| Chat {
            id: user.id,
            chat_type: "private".to_string(),
        });
        Message {
            id: self.0.id.0.clone(),
            user,
            chat,
            kind: MessageKind::Callback {
                callback_id: self.0.id.0.clone(),
                data: self.0.data.clone().unwrap_or_default(),
                origin_message_id: origin.map(|m| m.id().to_string()),
            },
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> &'static str {
        r#"{"id":123,"is_bot":false,"first_name":"Test","last_name":"User","username":"testuser","language_code":"uz"}"#
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user: teloxide::types::User = serde_json::from_str(user_json()).unwrap();

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: A location message becomes MessageKind::Location with the shared coordinates.**
    #[test]
    fn test_location_message_to_core() {
        let json = format!(
            r#"{{"message_id":42,"date":1700000000,"chat":{{"id":123,"type":"private","first_name":"Test"}},"from":{},"location":{{"latitude":41.3111,"longitude":69.2797}}}}"#,
            user_json()
        );
        let msg: teloxide::types::Message = serde_json::from_str(&json).unwrap();

        let core_msg = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core_msg.id, "42");
        assert_eq!(core_msg.chat.id, 123);
        assert_eq!(core_msg.chat.chat_type, "private");
        assert_eq!(
            core_msg.kind,
            MessageKind::Location(Location {
                latitude: 41.3111,
                longitude: 69.2797,
            })
        );
    }

    /// **Test: A text message becomes MessageKind::Text.**
    #[test]
    fn test_text_message_to_core() {
        let json = format!(
            r#"{{"message_id":7,"date":1700000000,"chat":{{"id":123,"type":"private","first_name":"Test"}},"from":{},"text":"Kategoriyalar"}}"#,
            user_json()
        );
        let msg: teloxide::types::Message = serde_json::from_str(&json).unwrap();

        let core_msg = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core_msg.user.id, 123);
        assert_eq!(core_msg.text(), Some("Kategoriyalar"));
    }

    /// **Test: A callback without its origin message falls back to the user's private chat.**
    #[test]
    fn test_callback_without_message_to_core() {
        let json = format!(
            r#"{{"id":"4382bfdwdsb323b2d9","from":{},"chat_instance":"-77","data":"park"}}"#,
            user_json()
        );
        let query: teloxide::types::CallbackQuery = serde_json::from_str(&json).unwrap();

        let core_msg = TelegramCallbackWrapper(&query).to_core();

        assert_eq!(core_msg.chat.id, 123);
        assert_eq!(
            core_msg.kind,
            MessageKind::Callback {
                callback_id: "4382bfdwdsb323b2d9".to_string(),
                data: "park".to_string(),
                origin_message_id: None,
            }
        );
    }
}
