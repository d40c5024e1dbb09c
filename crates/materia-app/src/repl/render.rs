//! Plain-text rendering of chat state.

use materia_ai::{ChatTurn, Sender, Session, SessionStore};

pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Assistant => "Assistant",
    }
}

pub fn turn(turn: &ChatTurn) -> String {
    format!("{}: {}", sender_label(turn.sender), turn.message)
}

/// Every turn of a session, one per line.
pub fn transcript(session: &Session) -> String {
    if session.turns().is_empty() {
        return format!("Session {} has no messages yet.", session.id());
    }
    session
        .turns()
        .iter()
        .map(turn)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Session list with the active session marked.
pub fn session_list(store: &SessionStore) -> String {
    let active = store.active_id();
    store
        .sessions()
        .iter()
        .map(|s| {
            let marker = if s.id() == active { '*' } else { ' ' };
            format!(
                "{marker} {:>3}  {}  ({} messages)",
                s.id().get(),
                s.label(),
                s.turns().len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn history(session: &Session) -> String {
    let lines: Vec<String> = session
        .queries()
        .enumerate()
        .map(|(i, q)| format!("{:>3}. {}", i + 1, q))
        .collect();
    if lines.is_empty() {
        "No queries yet.".to_string()
    } else {
        lines.join("\n")
    }
}

/// What is left to print after a streamed answer whose fragments were
/// already shown. Anything past the streamed text (an error marker) is
/// returned; a stream that showed nothing gets the whole turn.
pub fn stream_tail(shown: &str, committed: &ChatTurn) -> String {
    let shown = shown.trim();
    if shown.is_empty() {
        return turn(committed);
    }
    committed
        .message
        .strip_prefix(shown)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_turn_with_sender() {
        assert_eq!(turn(&ChatTurn::user("hi")), "You: hi");
        assert_eq!(turn(&ChatTurn::assistant("hello")), "Assistant: hello");
    }

    #[test]
    fn session_list_marks_active() {
        let mut store = SessionStore::new();
        store.create_session();
        let list = session_list(&store);
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    1  Session 1"));
        assert!(lines[1].starts_with("*   2  Session 2"));
    }

    #[test]
    fn empty_history_and_transcript() {
        let store = SessionStore::new();
        assert_eq!(history(store.active()), "No queries yet.");
        assert_eq!(transcript(store.active()), "Session 1 has no messages yet.");
    }

    #[test]
    fn history_is_numbered_newest_first() {
        let mut store = SessionStore::new();
        for q in ["first", "second"] {
            let sub = store.begin_submission(q).unwrap();
            store
                .complete_submission(sub, ChatTurn::assistant("ok"))
                .unwrap();
        }
        assert_eq!(history(store.active()), "  1. second\n  2. first");
    }

    #[test]
    fn stream_tail_after_clean_stream_is_empty() {
        let committed = ChatTurn::assistant("Hello world");
        assert_eq!(stream_tail(" Hello world\n", &committed), "");
    }

    #[test]
    fn stream_tail_carries_error_marker() {
        let committed =
            ChatTurn::assistant("Hello\n[Error: stream interrupted: connection reset]");
        assert_eq!(
            stream_tail("Hello", &committed),
            "\n[Error: stream interrupted: connection reset]"
        );
    }

    #[test]
    fn stream_tail_without_fragments_is_whole_turn() {
        let committed = ChatTurn::assistant("Error: No response received from the server.");
        assert_eq!(
            stream_tail("", &committed),
            "Assistant: Error: No response received from the server."
        );
    }
}
