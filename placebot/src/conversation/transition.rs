//! Transition function and error recovery.

use placebot_core::{HandlerError, OutgoingMessage, ReplyButton, ReplyMarkup};

use super::action::Action;
use super::event::Event;
use super::state::ConvState;
use super::texts;
use crate::catalog::Catalog;
use crate::formatter;
use crate::session::Session;

/// Read-only inputs a transition needs besides state and event.
#[derive(Debug, Clone, Copy)]
pub struct ConvContext<'a> {
    pub catalog: &'a Catalog,
    pub result_limit: usize,
}

/// New state and session plus the actions to execute, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    pub state: ConvState,
    pub session: Session,
    pub actions: Vec<Action>,
}

impl TransitionResult {
    pub fn new(state: ConvState, session: Session) -> Self {
        Self {
            state,
            session,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

fn menu(ctx: &ConvContext<'_>, intro: &str) -> Action {
    Action::Send(OutgoingMessage::text(intro).with_markup(ctx.catalog.menu_markup()))
}

fn location_keyboard() -> ReplyMarkup {
    ReplyMarkup::ReplyKeyboard {
        rows: vec![vec![ReplyButton::location(texts::SEND_LOCATION_BUTTON)]],
        resize: true,
        one_time: true,
    }
}

fn menu_shortcut() -> Action {
    Action::Send(
        OutgoingMessage::text(texts::MENU_SHORTCUT_PROMPT).with_markup(ReplyMarkup::ReplyKeyboard {
            rows: vec![vec![ReplyButton::text(texts::MENU_COMMAND)]],
            resize: true,
            one_time: true,
        }),
    )
}

/// Computes the next state, session and actions for `event`.
///
/// Menu commands are accepted from any state and never touch the session. A category press is accepted
/// from any state and overwrites the selection. A location needs a selection. Search outcomes are only
/// valid while `Searching`.
pub fn transition(
    state: &ConvState,
    session: &Session,
    event: &Event,
    ctx: &ConvContext<'_>,
) -> Result<TransitionResult, HandlerError> {
    match (state, event) {
        (_, Event::Start) => Ok(TransitionResult::new(ConvState::AwaitingCategory, session.clone())
            .with_action(menu(ctx, texts::WELCOME))),

        (_, Event::OpenMenu) => Ok(TransitionResult::new(ConvState::AwaitingCategory, session.clone())
            .with_action(menu(ctx, texts::PICK_CATEGORY))),

        (
            _,
            Event::CategorySelected {
                callback_id,
                payload,
                menu_message_id,
            },
        ) => {
            let category = ctx.catalog.find(payload)?;
            let session = Session {
                selected_category: Some(category.type_code.clone()),
            };
            let prompt = OutgoingMessage::text(texts::location_prompt(&category.display_name))
                .with_markup(location_keyboard());
            let mut result = TransitionResult::new(ConvState::AwaitingLocation, session)
                .with_action(Action::AnswerCallback {
                    callback_id: callback_id.clone(),
                })
                .with_action(Action::Send(prompt));
            if let Some(message_id) = menu_message_id {
                result = result.with_action(Action::DeleteMessage {
                    message_id: message_id.clone(),
                });
            }
            Ok(result)
        }

        (_, Event::LocationShared(location)) => {
            let type_code = session
                .selected_category
                .as_deref()
                .ok_or(HandlerError::MissingSelection)?;
            let category = ctx.catalog.find(type_code)?;
            Ok(TransitionResult::new(
                ConvState::Searching {
                    type_code: category.type_code.clone(),
                },
                session.clone(),
            )
            .with_action(Action::Search {
                location: *location,
                type_code: category.type_code.clone(),
            }))
        }

        (ConvState::Searching { type_code }, Event::SearchCompleted { places }) => {
            let category = ctx.catalog.find(type_code)?;
            let results = formatter::render_results(
                &category.display_name,
                &category.type_code,
                places,
                ctx.result_limit,
            );
            Ok(TransitionResult::new(ConvState::AwaitingCategory, session.clone())
                .with_action(Action::SendResults(results))
                .with_action(menu_shortcut()))
        }

        (ConvState::Searching { .. }, Event::SearchFailed { .. }) => Ok(TransitionResult::new(
            ConvState::AwaitingLocation,
            session.clone(),
        )
        .with_action(Action::Send(OutgoingMessage::text(texts::SEARCH_FAILED)))),

        (state, event @ (Event::SearchCompleted { .. } | Event::SearchFailed { .. })) => {
            Err(HandlerError::InvalidTransition(format!(
                "{} while {:?}",
                event.name(),
                state
            )))
        }
    }
}

/// User-visible recovery for a failed transition.
///
/// Missing selection: prompt to pick a category and show the menu. Unknown category: answer the press,
/// say so, and show the menu again; the stored selection is kept. Invalid transition: nothing is sent
/// and the state is kept.
pub fn recover(
    error: &HandlerError,
    state: &ConvState,
    session: &Session,
    event: &Event,
    ctx: &ConvContext<'_>,
) -> TransitionResult {
    match error {
        HandlerError::MissingSelection => {
            TransitionResult::new(ConvState::AwaitingCategory, session.clone())
                .with_action(menu(ctx, texts::SELECT_CATEGORY_FIRST))
        }
        HandlerError::UnknownCategory(_) => {
            let mut result = TransitionResult::new(ConvState::AwaitingCategory, session.clone());
            if let Event::CategorySelected { callback_id, .. } = event {
                result = result.with_action(Action::AnswerCallback {
                    callback_id: callback_id.clone(),
                });
            }
            result.with_action(menu(ctx, texts::UNKNOWN_CATEGORY))
        }
        HandlerError::InvalidTransition(_) => TransitionResult::new(state.clone(), session.clone()),
    }
}
