//! Conversation state machine.
//!
//! Pure transitions: `(state, session, event) → (state, session, actions)`. The handler executes the
//! actions against the transport and the places client and feeds search outcomes back as events.

mod action;
mod event;
mod state;
pub mod texts;
mod transition;

pub use action::Action;
pub use event::Event;
pub use state::ConvState;
pub use transition::{recover, transition, ConvContext, TransitionResult};
