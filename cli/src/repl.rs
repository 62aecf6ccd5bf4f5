//! Line parsing and message rendering for the interactive chat loop.

use wire::Role;

use crate::conversation::{Message, MessageKind, Mode};

pub const HELP: &str = "commands: /text, /image, /mode (toggle), /history, /help, /quit";

/// One line of interactive input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Send(String),
    SetMode(Mode),
    ToggleMode,
    History,
    Help,
    Quit,
    Unknown(String),
}

/// Interpret a raw input line. Anything not starting with `/` is a message.
#[must_use]
pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.trim().strip_prefix('/') else {
        return ReplCommand::Send(line.to_owned());
    };
    match command.trim().to_ascii_lowercase().as_str() {
        "text" => ReplCommand::SetMode(Mode::Text),
        "image" => ReplCommand::SetMode(Mode::Image),
        "mode" => ReplCommand::ToggleMode,
        "history" => ReplCommand::History,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_owned()),
    }
}

/// Render a message for the terminal.
#[must_use]
pub fn render(message: &Message) -> String {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    match message.kind {
        MessageKind::Text => format!("[{who}] {}", message.content),
        MessageKind::Image if message.role == Role::User => format!("[{who}:image] {}", message.content),
        MessageKind::Image => match &message.revised_prompt {
            Some(prompt) => format!("[{who}:image] {}\n  prompt: {prompt}", message.content),
            None => format!("[{who}:image] {}", message.content),
        },
        MessageKind::Error => format!("[error] {}", message.content),
    }
}

#[must_use]
pub fn prompt_label(mode: Mode) -> String {
    format!("{}> ", mode.as_str())
}

#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;
