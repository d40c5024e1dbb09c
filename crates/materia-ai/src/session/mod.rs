//! Conversation sessions.
//!
//! A [`SessionStore`] holds every session of the run and tracks the active
//! one. [`ChatController`] pairs the store with the pending input buffer and
//! drives submissions through an [`InferenceClient`](crate::InferenceClient).

mod chat;
mod input;
mod manager;
mod types;


pub use chat::ChatController;
pub use input::PendingInput;
pub use manager::{Session, SessionStore};
pub use types::{ChatError, ChatTurn, Sender, Submission};
