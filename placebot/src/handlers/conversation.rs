//! Runs the place-search conversation for one inbound event.
//!
//! The handler takes the user's turn lock, loads state and session, applies the pure transition (or its
//! recovery), stores the outcome, and executes the emitted actions through [`Bot`] and [`PlacesClient`].
//! A search action is executed here and its outcome is fed back into the transition as the next event.
//! Results that cannot be delivered (Telegram rejecting the Markdown, for one) turn into a failed search.

use std::sync::Arc;

use async_trait::async_trait;
use placebot_core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use places_client::{LatLng, PlacesClient};
use tracing::{error, info, instrument, warn};

use crate::catalog::Catalog;
use crate::conversation::{recover, transition, Action, ConvContext, ConvState, Event, TransitionResult};
use crate::formatter::DEFAULT_RESULT_LIMIT;
use crate::session::{Session, SessionStore};

/// Default search radius around the shared location.
pub const DEFAULT_RADIUS_METERS: u32 = 2000;

/// Terminal handler of the chain. Replies with the last text sent in the turn, or ignores messages the
/// conversation does not understand.
pub struct ConversationHandler {
    bot: Arc<dyn Bot>,
    places: Arc<dyn PlacesClient>,
    sessions: Arc<SessionStore>,
    catalog: Arc<Catalog>,
    radius_meters: u32,
    result_limit: usize,
}

impl ConversationHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        places: Arc<dyn PlacesClient>,
        sessions: Arc<SessionStore>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            bot,
            places,
            sessions,
            catalog,
            radius_meters: DEFAULT_RADIUS_METERS,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_radius_meters(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn with_result_limit(mut self, result_limit: usize) -> Self {
        self.result_limit = result_limit;
        self
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    fn step(&self, user_id: i64, state: &ConvState, session: &Session, event: &Event) -> TransitionResult {
        let ctx = ConvContext {
            catalog: &self.catalog,
            result_limit: self.result_limit,
        };
        match transition(state, session, event, &ctx) {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    user_id = user_id,
                    event = event.name(),
                    state = ?state,
                    error = %e,
                    "Transition rejected, recovering"
                );
                recover(&e, state, session, event, &ctx)
            }
        }
    }

    /// Executes one action. Returns the follow-up event for a search or for undelivered results.
    async fn execute(
        &self,
        chat: &Chat,
        action: Action,
        last_sent: &mut Option<String>,
    ) -> Result<Option<Event>> {
        match action {
            Action::Send(outgoing) => {
                self.bot.send(chat, &outgoing).await?;
                *last_sent = Some(outgoing.text);
                Ok(None)
            }
            Action::SendResults(outgoing) => match self.bot.send(chat, &outgoing).await {
                Ok(_) => {
                    *last_sent = Some(outgoing.text);
                    Ok(None)
                }
                Err(e) => {
                    error!(error = %e, chat_id = chat.id, "Failed to deliver search results");
                    Ok(Some(Event::SearchFailed {
                        error: e.to_string(),
                    }))
                }
            },
            Action::AnswerCallback { callback_id } => {
                if let Err(e) = self.bot.answer_callback(&callback_id).await {
                    warn!(error = %e, callback_id = %callback_id, "Failed to answer callback query");
                }
                Ok(None)
            }
            Action::DeleteMessage { message_id } => {
                if let Err(e) = self.bot.delete_message(chat, &message_id).await {
                    warn!(error = %e, chat_id = chat.id, message_id = %message_id, "Failed to delete menu message");
                }
                Ok(None)
            }
            Action::Search {
                location,
                type_code,
            } => {
                info!(
                    chat_id = chat.id,
                    category = %type_code,
                    latitude = location.latitude,
                    longitude = location.longitude,
                    radius_meters = self.radius_meters,
                    "step: searching nearby places"
                );
                let point = LatLng {
                    lat: location.latitude,
                    lng: location.longitude,
                };
                match self
                    .places
                    .search_nearby(point, &type_code, self.radius_meters)
                    .await
                {
                    Ok(places) => {
                        info!(
                            category = %type_code,
                            result_count = places.len(),
                            "step: search completed"
                        );
                        Ok(Some(Event::SearchCompleted { places }))
                    }
                    Err(e) => {
                        error!(error = %e, category = %type_code, "Place search failed");
                        Ok(Some(Event::SearchFailed {
                            error: e.to_string(),
                        }))
                    }
                }
            }
        }
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(mut event) = Event::from_message(message) else {
            return Ok(HandlerResponse::Ignore);
        };

        let user_id = message.user.id;
        let _turn = self.sessions.begin_turn(user_id).await;
        let (mut state, mut session) = self.sessions.load(user_id).await;
        let mut last_sent = None;

        loop {
            info!(
                user_id = user_id,
                event = event.name(),
                state = ?state,
                "step: ConversationHandler applying event"
            );
            let previous = state.clone();
            let result = self.step(user_id, &state, &session, &event);
            state = result.state;
            session = result.session;
            self.sessions
                .store(user_id, state.clone(), session.clone())
                .await;

            let mut next = None;
            for action in result.actions {
                let delivers_results = matches!(action, Action::SendResults(_));
                if let Some(follow_up) = self.execute(&message.chat, action, &mut last_sent).await? {
                    next = Some(follow_up);
                    if delivers_results {
                        // Replay the failure from the searching state; the shortcut is not sent.
                        state = previous.clone();
                        break;
                    }
                }
            }

            match next {
                Some(follow_up) => event = follow_up,
                None => break,
            }
        }

        info!(user_id = user_id, state = ?state, "step: ConversationHandler done");
        Ok(last_sent.map_or(HandlerResponse::Stop, HandlerResponse::Reply))
    }
}
