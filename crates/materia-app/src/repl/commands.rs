//! Slash commands of the interactive chat.

use materia_common::SessionId;

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Quit,
    /// Start a new session and make it active.
    New,
    Switch(SessionId),
    /// List all sessions.
    Sessions,
    /// Show the active session's queries, newest first.
    History,
    /// Unknown command or bad arguments; carries the message to show.
    Unknown(String),
}

/// Parse a line as a slash command. `None` when it is ordinary chat text.
pub fn parse(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (trimmed, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Command::Help,
        "/quit" | "/exit" | "/q" => Command::Quit,
        "/new" => Command::New,
        "/sessions" | "/ls" => Command::Sessions,
        "/history" => Command::History,
        "/switch" | "/s" => match arg.parse::<SessionId>() {
            Ok(id) => Command::Switch(id),
            Err(_) if arg.is_empty() => Command::Unknown("/switch requires a session id".into()),
            Err(_) => Command::Unknown(format!("'{arg}' is not a session id")),
        },
        other => Command::Unknown(format!(
            "Unknown command: {other}. Type /help for available commands."
        )),
    };
    Some(command)
}

pub fn help_text() -> &'static str {
    "Available commands:
  /new            Start a new session
  /switch <id>    Switch to session <id>
  /sessions       List sessions
  /history        Show queries of the active session
  /help           Show this help message
  /quit           Exit

End a line with \\ to continue typing on the next line."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_help_and_quit() {
        assert_eq!(parse("/help"), Some(Command::Help));
        assert_eq!(parse("/?"), Some(Command::Help));
        assert_eq!(parse("/quit"), Some(Command::Quit));
        assert_eq!(parse("  /EXIT  "), Some(Command::Quit));
    }

    #[test]
    fn parse_session_commands() {
        assert_eq!(parse("/new"), Some(Command::New));
        assert_eq!(parse("/sessions"), Some(Command::Sessions));
        assert_eq!(parse("/history"), Some(Command::History));
        assert_eq!(parse("/switch 3"), Some(Command::Switch(SessionId::new(3))));
        assert_eq!(parse("/s  2 "), Some(Command::Switch(SessionId::new(2))));
    }

    #[test]
    fn switch_needs_numeric_id() {
        assert_eq!(
            parse("/switch"),
            Some(Command::Unknown("/switch requires a session id".into()))
        );
        assert_eq!(
            parse("/switch two"),
            Some(Command::Unknown("'two' is not a session id".into()))
        );
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("a/b"), None);
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(parse("/foo"), Some(Command::Unknown(msg)) if msg.contains("/foo")));
    }

    #[test]
    fn help_lists_every_command() {
        for name in ["/new", "/switch", "/sessions", "/history", "/help", "/quit"] {
            assert!(help_text().contains(name));
        }
    }
}
