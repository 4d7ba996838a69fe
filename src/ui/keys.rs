//! Key bindings per mode.

use crate::app::{AppEvent, AppMode};
use crate::speech::Slider;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into an application event for the current mode.
pub fn key_to_event(mode: AppMode, key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Reading => reading_key(key.code),
        AppMode::Editing => match key.code {
            KeyCode::Esc => AppEvent::StopEditing,
            KeyCode::Enter => AppEvent::InsertChar('\n'),
            KeyCode::Tab => AppEvent::InsertChar('\t'),
            KeyCode::Backspace => AppEvent::DeleteChar,
            KeyCode::Char(c) => AppEvent::InsertChar(c),
            _ => AppEvent::None,
        },
        AppMode::Command => match key.code {
            KeyCode::Esc => AppEvent::CancelCommand,
            KeyCode::Enter => AppEvent::SubmitCommand,
            KeyCode::Backspace => AppEvent::CommandBackspace,
            KeyCode::Char(c) => AppEvent::CommandChar(c),
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}

fn reading_key(code: KeyCode) -> AppEvent {
    match code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => AppEvent::Advance,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('b') => AppEvent::Retreat,
        KeyCode::Home | KeyCode::Char('r') => AppEvent::Reset,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => AppEvent::Speak,

        KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::StepDisplayCount(1),
        KeyCode::Char('-') => AppEvent::StepDisplayCount(-1),
        KeyCode::Char(']') => AppEvent::StepPadCount(1),
        KeyCode::Char('[') => AppEvent::StepPadCount(-1),

        KeyCode::Char('.') => AppEvent::NudgeSlider(Slider::Rate, 1),
        KeyCode::Char(',') => AppEvent::NudgeSlider(Slider::Rate, -1),
        KeyCode::Char('\'') => AppEvent::NudgeSlider(Slider::Pitch, 1),
        KeyCode::Char(';') => AppEvent::NudgeSlider(Slider::Pitch, -1),
        KeyCode::Char('0') => AppEvent::NudgeSlider(Slider::Volume, 1),
        KeyCode::Char('9') => AppEvent::NudgeSlider(Slider::Volume, -1),
        KeyCode::Char('v') => AppEvent::NextVoice,
        KeyCode::Char('V') => AppEvent::PreviousVoice,

        KeyCode::Char('i') | KeyCode::Char('e') => AppEvent::StartEditing,
        KeyCode::Char(':') => AppEvent::OpenCommand(Some(':')),
        KeyCode::Char('@') => AppEvent::OpenCommand(Some('@')),
        KeyCode::Char('?') => AppEvent::Help,
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        _ => AppEvent::None,
    }
}
