//! Session value types and errors.

use materia_common::SessionId;
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One message of a conversation. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub message: String,
}

impl ChatTurn {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            message: message.into(),
        }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            message: message.into(),
        }
    }
}

/// Rejections of a chat operation. Shown to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Session {0} is waiting for a response")]
    SessionBusy(SessionId),
    #[error("No session with id {0}")]
    UnknownSession(SessionId),
}

/// A query that has been accepted and is waiting for its assistant turn.
///
/// Returned by `SessionStore::begin_submission` and handed back to
/// `SessionStore::complete_submission`. The target session is fixed at
/// creation, so the answer lands there even if the active session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub session: SessionId,
    pub prompt: String,
    /// Short id tying together the log lines of this submission.
    pub correlation: String,
}
