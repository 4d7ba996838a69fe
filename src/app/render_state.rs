use crate::app::mode::AppMode;
use crate::app::Status;
use crate::speech::{Field, SpeechSettings};

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub text: String,
    pub lead: String,
    pub focus: String,
    pub trail: String,
    pub position: usize,
    pub word_count: usize,
    pub display_count: usize,
    pub pad_count: usize,
    pub settings: SpeechSettings,
    /// Field-level validation messages, in field order
    pub errors: Vec<(Field, String)>,
    pub voice_count: usize,
    pub voices_loading: bool,
    pub speech_available: bool,
    pub auto_speak: bool,
    pub command_input: String,
    pub status: Option<Status>,
    pub show_help: bool,
}

impl RenderState {
    /// `current / total` progress through the word list, counted in words.
    pub fn progress(&self) -> (usize, usize) {
        if self.word_count == 0 {
            return (0, 0);
        }
        (
            (self.position + self.display_count).min(self.word_count),
            self.word_count,
        )
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn voice_label(&self) -> String {
        match &self.settings.voice {
            Some(voice) => format!("{} ({})", voice.name, voice.lang),
            None if !self.speech_available => "unavailable".to_string(),
            None if self.voices_loading => "loading…".to_string(),
            None => "system default".to_string(),
        }
    }
}
