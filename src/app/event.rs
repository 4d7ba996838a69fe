use crate::speech::Slider;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Advance,
    Retreat,
    Reset,
    Speak,

    SetDisplayCount(String),
    SetPadCount(String),
    StepDisplayCount(i64),
    StepPadCount(i64),

    SetSlider(Slider, String),
    NudgeSlider(Slider, i32),
    SelectVoice(Option<String>),
    NextVoice,
    PreviousVoice,

    StartEditing,
    InsertChar(char),
    DeleteChar,
    StopEditing,

    OpenCommand(Option<char>),
    CommandChar(char),
    CommandBackspace,
    SubmitCommand,
    CancelCommand,

    LoadFile(String),
    LoadClipboard,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
