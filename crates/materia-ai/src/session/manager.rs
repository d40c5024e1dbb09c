//! Session store: the sessions of one run and the active-session pointer.

use std::collections::VecDeque;

use materia_common::{new_correlation_id, SessionId};
use tracing::debug;

use super::types::{ChatError, ChatTurn, Submission};

/// Characters of the first query shown in a session label.
const LABEL_CHARS: usize = 20;

/// One conversation.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    /// Submitted queries, most recent first.
    queries: VecDeque<String>,
    turns: Vec<ChatTurn>,
    /// Set by the first completed submission and never changed after.
    first_query: String,
    /// Streaming text not yet committed as a turn.
    partial: Option<String>,
    in_flight: bool,
}

impl Session {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            queries: VecDeque::new(),
            turns: Vec::new(),
            first_query: String::new(),
            partial: None,
            in_flight: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn first_query(&self) -> &str {
        &self.first_query
    }

    pub fn partial(&self) -> Option<&str> {
        self.partial.as_deref()
    }

    /// True while a submission on this session awaits its answer.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Short name for session lists.
    pub fn label(&self) -> String {
        let query = self.first_query.trim();
        if query.is_empty() {
            return format!("Session {}", self.id);
        }
        if query.chars().count() > LABEL_CHARS {
            let head: String = query.chars().take(LABEL_CHARS).collect();
            format!("{head}...")
        } else {
            query.to_string()
        }
    }
}

/// Every session of the run, in creation order, plus the active one.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Vec<Session>,
    /// Index into `sessions`. Always valid since sessions are never removed.
    active: usize,
    next_id: SessionId,
}

impl SessionStore {
    /// A store holding the start-up session, which is active.
    pub fn new() -> Self {
        Self {
            sessions: vec![Session::new(SessionId::FIRST)],
            active: 0,
            next_id: SessionId::FIRST.next(),
        }
    }

    /// Create an empty session and make it active.
    pub fn create_session(&mut self) -> SessionId {
        let id = self.next_id;
        self.next_id = id.next();
        self.sessions.push(Session::new(id));
        self.active = self.sessions.len() - 1;
        debug!(session = %id, "created session");
        id
    }

    /// Make `id` the active session. Unknown ids change nothing.
    pub fn select_session(&mut self, id: SessionId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active = index;
                debug!(session = %id, "selected session");
                true
            }
            None => {
                debug!(session = %id, "ignoring switch to unknown session");
                false
            }
        }
    }

    pub fn active_id(&self) -> SessionId {
        self.sessions[self.active].id
    }

    pub fn active(&self) -> &Session {
        &self.sessions[self.active]
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.index_of(id).map(|i| &self.sessions[i])
    }

    /// All sessions in creation order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Accept `text` for the active session and append its user turn.
    ///
    /// Blank text is rejected, as is a session that is still waiting for an
    /// earlier answer. In both cases nothing changes.
    pub fn begin_submission(&mut self, text: &str) -> Result<Submission, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        let session = &mut self.sessions[self.active];
        if session.in_flight {
            return Err(ChatError::SessionBusy(session.id));
        }

        session.in_flight = true;
        session.turns.push(ChatTurn::user(text));
        Ok(Submission {
            session: session.id,
            prompt: text.to_string(),
            correlation: new_correlation_id(),
        })
    }

    /// Append streamed text to the target session's partial buffer.
    pub fn append_partial(&mut self, id: SessionId, fragment: &str) -> Result<(), ChatError> {
        let session = self.session_mut(id)?;
        session
            .partial
            .get_or_insert_with(String::new)
            .push_str(fragment);
        Ok(())
    }

    /// Commit the assistant turn for `submission` and record the query.
    pub fn complete_submission(
        &mut self,
        submission: Submission,
        turn: ChatTurn,
    ) -> Result<(), ChatError> {
        let session = self.session_mut(submission.session)?;
        session.turns.push(turn);
        if session.first_query.is_empty() {
            session.first_query = submission.prompt.clone();
        }
        session.queries.push_front(submission.prompt);
        session.partial = None;
        session.in_flight = false;
        Ok(())
    }

    fn index_of(&self, id: SessionId) -> Option<usize> {
        self.sessions.iter().position(|s| s.id == id)
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut Session, ChatError> {
        match self.index_of(id) {
            Some(index) => Ok(&mut self.sessions[index]),
            None => Err(ChatError::UnknownSession(id)),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
