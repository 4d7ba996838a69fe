//! Speech output for the focused chunk.
//!
//! The synthesizer is reached through [`SpeechBackend`]. Hosts without one
//! get [`Speech::Unavailable`], and the reader behaves the same apart from
//! staying silent.

#[cfg(feature = "native-tts")]
pub mod native;
pub mod settings;
pub mod voice;

pub use settings::{Field, SettingsError, SettingsForm, Slider, SpeechSettings};
pub use voice::{load_voices, Voice, VoiceCatalog, VoiceRequest};

use crossbeam_channel::Receiver;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeechError {
    #[error("Speech backend error: {0}")]
    Backend(String),
}

/// A text-to-speech engine with a single utterance channel.
pub trait SpeechBackend {
    /// Voices the engine offers right now. May be empty until the engine
    /// has finished starting up.
    fn voices(&self) -> Vec<Voice>;

    /// Subscribe to the next change of the voice list.
    ///
    /// The receiver gets one message when voices become available. Engines
    /// whose list never changes return `None`.
    fn watch_voices(&mut self) -> Option<Receiver<()>> {
        None
    }

    /// Stop the current utterance, if any.
    fn cancel(&mut self) -> Result<(), SpeechError>;

    /// Start speaking `text` without waiting for it to finish.
    fn speak(&mut self, text: &str, settings: &SpeechSettings) -> Result<(), SpeechError>;
}

/// Speech capability of the host.
pub enum Speech {
    Available(Box<dyn SpeechBackend>),
    Unavailable,
}

impl Speech {
    /// Pick the best speech backend for this build and host.
    pub fn detect(enabled: bool) -> Self {
        if !enabled {
            tracing::info!("Speech disabled by configuration");
            return Speech::Unavailable;
        }
        Self::detect_native()
    }

    #[cfg(feature = "native-tts")]
    fn detect_native() -> Self {
        match native::NativeSpeech::new() {
            Ok(backend) => {
                tracing::debug!("Initialized native speech backend");
                Speech::Available(Box::new(backend))
            }
            Err(err) => {
                tracing::warn!("Failed to load speech backend: {}", err);
                Speech::Unavailable
            }
        }
    }

    #[cfg(not(feature = "native-tts"))]
    fn detect_native() -> Self {
        tracing::warn!("Built without a speech backend; speech is unavailable");
        Speech::Unavailable
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Speech::Available(_))
    }

    pub fn voices(&self) -> Vec<Voice> {
        match self {
            Speech::Available(backend) => backend.voices(),
            Speech::Unavailable => Vec::new(),
        }
    }

    pub fn cancel(&mut self) -> Result<(), SpeechError> {
        match self {
            Speech::Available(backend) => backend.cancel(),
            Speech::Unavailable => Ok(()),
        }
    }

    /// Speak the focused words, replacing anything still being spoken.
    ///
    /// Empty text only cancels. Does nothing when speech is unavailable.
    pub fn speak_focus(
        &mut self,
        text: &str,
        settings: &SpeechSettings,
    ) -> Result<(), SpeechError> {
        let Speech::Available(backend) = self else {
            return Ok(());
        };

        backend.cancel()?;
        if text.is_empty() {
            return Ok(());
        }
        tracing::debug!("Speaking: {:?}", text);
        backend.speak(text, settings)
    }
}

impl std::fmt::Debug for Speech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speech::Available(_) => write!(f, "Speech::Available"),
            Speech::Unavailable => write!(f, "Speech::Unavailable"),
        }
    }
}
