//! Chat controller: submissions from input to committed turns.

use materia_common::SessionId;
use tracing::{debug, info, info_span, Instrument};

use crate::inference::InferenceClient;

use super::input::PendingInput;
use super::manager::SessionStore;
use super::types::{ChatError, ChatTurn};

/// Owns the sessions and the pending input of one chat front end.
#[derive(Debug, Default)]
pub struct ChatController {
    store: SessionStore,
    input: PendingInput,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn input(&self) -> &PendingInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut PendingInput {
        &mut self.input
    }

    pub fn create_session(&mut self) -> SessionId {
        self.store.create_session()
    }

    pub fn select_session(&mut self, id: SessionId) -> bool {
        self.store.select_session(id)
    }

    /// Submit `text` to the active session and wait for the answer.
    ///
    /// Returns the assistant turn that was appended. Backend failures are
    /// part of that turn; only rejected input is an error.
    pub async fn submit_query(
        &mut self,
        client: &InferenceClient,
        text: &str,
    ) -> Result<ChatTurn, ChatError> {
        let submission = self.store.begin_submission(text)?;
        let span = info_span!(
            "submission",
            session = %submission.session,
            correlation = %submission.correlation
        );
        info!(parent: &span, backend = client.backend_name(), "query submitted");

        let turn = client
            .fetch_completion(&submission.prompt)
            .instrument(span.clone())
            .await;

        debug!(parent: &span, chars = turn.message.len(), "assistant turn committed");
        self.store.complete_submission(submission, turn.clone())?;
        self.input.clear();
        Ok(turn)
    }

    /// Submit whatever is in the pending input buffer.
    pub async fn submit_pending(&mut self, client: &InferenceClient) -> Result<ChatTurn, ChatError> {
        let text = self.input.as_str().to_string();
        self.submit_query(client, &text).await
    }

    /// Streaming variant of [`submit_query`](Self::submit_query).
    ///
    /// Fragments go to the session's partial buffer and to `on_fragment`
    /// as they arrive; the folded text is committed when the stream ends.
    pub async fn submit_query_streaming<F>(
        &mut self,
        client: &InferenceClient,
        text: &str,
        mut on_fragment: F,
    ) -> Result<ChatTurn, ChatError>
    where
        F: FnMut(&str),
    {
        let submission = self.store.begin_submission(text)?;
        let span = info_span!(
            "submission",
            session = %submission.session,
            correlation = %submission.correlation
        );
        info!(parent: &span, backend = client.backend_name(), "streaming query submitted");

        let target = submission.session;
        let store = &mut self.store;
        let turn = client
            .stream_completion(&submission.prompt, |fragment| {
                if let Err(e) = store.append_partial(target, fragment) {
                    debug!(error = %e, "dropping fragment");
                }
                on_fragment(fragment);
            })
            .instrument(span.clone())
            .await;

        debug!(parent: &span, chars = turn.message.len(), "streamed turn committed");
        self.store.complete_submission(submission, turn.clone())?;
        self.input.clear();
        Ok(turn)
    }
}
