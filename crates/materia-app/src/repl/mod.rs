//! Line-oriented interactive chat.

mod commands;
mod render;

use std::io::Write;

use materia_ai::{ChatController, ChatError};
use materia_common::MateriaError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::backend::ChatBackend;
use commands::Command;

/// Run the chat until `/quit` or end of input.
pub async fn run<R, W>(backend: &ChatBackend, input: R, out: &mut W) -> Result<(), MateriaError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut chat = ChatController::new();
    let mut lines = input.lines();

    writeln!(
        out,
        "Materia chat ({}). Type /help for commands.",
        backend.client.backend_name()
    )?;

    loop {
        write!(out, "{}", prompt(&chat))?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        // Commands are only recognized at the start of an entry.
        if chat.input().is_empty() {
            if let Some(command) = commands::parse(&line) {
                if !handle_command(&mut chat, command, out)? {
                    break;
                }
                continue;
            }
        }

        if let Some(head) = line.strip_suffix('\\') {
            chat.input_mut().push_line(head);
            continue;
        }
        chat.input_mut().push_line(&line);
        submit(backend, &mut chat, out).await?;
    }

    info!("Chat ended ({} sessions)", chat.store().len());
    Ok(())
}

/// Submit a single prompt and print the answer.
pub async fn run_once<W: Write>(
    backend: &ChatBackend,
    prompt: &str,
    out: &mut W,
) -> Result<(), MateriaError> {
    if prompt.trim().is_empty() {
        return Err(MateriaError::Other(ChatError::EmptyInput.to_string()));
    }
    let mut chat = ChatController::new();
    chat.input_mut().set(prompt);
    submit(backend, &mut chat, out).await
}

fn prompt(chat: &ChatController) -> String {
    if chat.input().is_empty() {
        format!("[{}]> ", chat.store().active_id())
    } else {
        "... ".to_string()
    }
}

/// Returns `false` when the chat should end.
fn handle_command<W: Write>(
    chat: &mut ChatController,
    command: Command,
    out: &mut W,
) -> Result<bool, MateriaError> {
    match command {
        Command::Quit => return Ok(false),
        Command::Help => writeln!(out, "{}", commands::help_text())?,
        Command::New => {
            let id = chat.create_session();
            writeln!(out, "Started session {id}.")?;
        }
        Command::Switch(id) => {
            if chat.select_session(id) {
                writeln!(out, "Switched to session {id}.")?;
                writeln!(out, "{}", render::transcript(chat.store().active()))?;
            } else {
                writeln!(out, "{}", ChatError::UnknownSession(id))?;
            }
        }
        Command::Sessions => writeln!(out, "{}", render::session_list(chat.store()))?,
        Command::History => writeln!(out, "{}", render::history(chat.store().active()))?,
        Command::Unknown(message) => writeln!(out, "{message}")?,
    }
    Ok(true)
}

/// Submit the pending input and print the assistant turn.
async fn submit<W: Write>(
    backend: &ChatBackend,
    chat: &mut ChatController,
    out: &mut W,
) -> Result<(), MateriaError> {
    let text = chat.input().as_str().to_string();

    let result = if backend.streaming {
        let mut shown = String::new();
        let result = chat
            .submit_query_streaming(&backend.client, &text, |fragment| {
                if shown.is_empty() {
                    let _ = write!(out, "Assistant: ");
                }
                shown.push_str(fragment);
                let _ = write!(out, "{fragment}");
                let _ = out.flush();
            })
            .await;
        result.map(|turn| render::stream_tail(&shown, &turn))
    } else {
        chat.submit_pending(&backend.client)
            .await
            .map(|turn| render::turn(&turn))
    };

    match result {
        Ok(rendered) => writeln!(out, "{rendered}")?,
        Err(e) => {
            writeln!(out, "{e}")?;
            chat.input_mut().clear();
        }
    }
    Ok(())
}
