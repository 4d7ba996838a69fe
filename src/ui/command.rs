//! Command parsing for the TUI command deck
//!
//! Supports:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Toggle help
//! - `@notes.txt` → Load a text file
//! - `@@` → Load clipboard
//! - `:d N` / `:display N`, `:p N` / `:pad N` → Word counts
//! - `:rate X`, `:pitch X`, `:vol X` / `:volume X` → Speech sliders
//! - `:voice NAME` or `:voice none` → Voice selection
//! - `:s` / `:speak`, `:r` / `:reset`, `:e` / `:edit`

use crate::app::AppEvent;
use crate::speech::Slider;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    DisplayCount(String),
    PadCount(String),
    Slider(Slider, String),
    Voice(Option<String>),
    Speak,
    Reset,
    Edit,
    Unknown(String),
}

/// Parse command deck input string into a Command
///
/// Arguments are passed through as typed; range and number checks happen
/// where the value is stored so the user sees the same message either way.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match (name, arg) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("s" | "speak", "") => Command::Speak,
            ("r" | "reset", "") => Command::Reset,
            ("e" | "edit", "") => Command::Edit,
            ("d" | "display", arg) if !arg.is_empty() => Command::DisplayCount(arg.to_string()),
            ("p" | "pad", arg) if !arg.is_empty() => Command::PadCount(arg.to_string()),
            ("rate", arg) if !arg.is_empty() => Command::Slider(Slider::Rate, arg.to_string()),
            ("pitch", arg) if !arg.is_empty() => Command::Slider(Slider::Pitch, arg.to_string()),
            ("vol" | "volume", arg) if !arg.is_empty() => {
                Command::Slider(Slider::Volume, arg.to_string())
            }
            ("voice", "" | "none") => Command::Voice(None),
            ("voice", name) => Command::Voice(Some(name.to_string())),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::DisplayCount(value) => AppEvent::SetDisplayCount(value),
        Command::PadCount(value) => AppEvent::SetPadCount(value),
        Command::Slider(slider, value) => AppEvent::SetSlider(slider, value),
        Command::Voice(name) => AppEvent::SelectVoice(name),
        Command::Speak => AppEvent::Speak,
        Command::Reset => AppEvent::Reset,
        Command::Edit => AppEvent::StartEditing,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
