use crate::speech::Speech;
use crossbeam_channel::{Receiver, TryRecvError};
use serde::{Deserialize, Serialize};
use std::mem;

/// A synthesizer voice as reported by the speech backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    pub is_default: bool,
    pub is_local_only: bool,
    /// Backend-specific identifier used to select the voice again.
    pub id: String,
}

/// Voices available from the speech backend, in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self { voices }
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().find(|voice| voice.name == name)
    }

    fn index_of(&self, voice: Option<&Voice>) -> Option<usize> {
        voice.and_then(|v| self.voices.iter().position(|candidate| candidate == v))
    }

    /// The voice after `current`, wrapping around. No selection picks the first voice.
    pub fn next_after(&self, current: Option<&Voice>) -> Option<&Voice> {
        if self.voices.is_empty() {
            return None;
        }
        let index = match self.index_of(current) {
            Some(i) => (i + 1) % self.voices.len(),
            None => 0,
        };
        self.voices.get(index)
    }

    /// The voice before `current`, wrapping around. No selection picks the last voice.
    pub fn previous_before(&self, current: Option<&Voice>) -> Option<&Voice> {
        if self.voices.is_empty() {
            return None;
        }
        let index = match self.index_of(current) {
            Some(0) | None => self.voices.len() - 1,
            Some(i) => i - 1,
        };
        self.voices.get(index)
    }
}

/// Outstanding request for the voice catalog.
///
/// Resolves exactly once: either immediately, or on the first
/// "voices changed" notification from the backend. Dropping a pending
/// request drops its subscription.
#[derive(Debug)]
pub enum VoiceRequest {
    Ready(Vec<Voice>),
    Pending(Receiver<()>),
}

/// Start loading the voice catalog.
///
/// Unavailable speech resolves straight away to an empty catalog.
pub fn load_voices(speech: &mut Speech) -> VoiceRequest {
    match speech {
        Speech::Unavailable => VoiceRequest::Ready(Vec::new()),
        Speech::Available(backend) => {
            let voices = backend.voices();
            if !voices.is_empty() {
                return VoiceRequest::Ready(voices);
            }
            match backend.watch_voices() {
                Some(notify) => {
                    tracing::debug!("Voice catalog empty, waiting for backend notification");
                    VoiceRequest::Pending(notify)
                }
                None => VoiceRequest::Ready(voices),
            }
        }
    }
}

impl VoiceRequest {
    /// Check whether the catalog is available yet.
    ///
    /// Returns `Some` at most once per request; callers drop the request
    /// after it resolves.
    pub fn try_resolve(&mut self, speech: &Speech) -> Option<Vec<Voice>> {
        match self {
            VoiceRequest::Ready(voices) => Some(mem::take(voices)),
            VoiceRequest::Pending(notify) => match notify.try_recv() {
                Ok(()) => Some(speech.voices()),
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Speech backend dropped voice notification");
                    Some(speech.voices())
                }
                Err(TryRecvError::Empty) => None,
            },
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, VoiceRequest::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str) -> Voice {
        Voice {
            name: name.to_string(),
            lang: "en-US".to_string(),
            is_default: false,
            is_local_only: true,
            id: format!("voice:{}", name),
        }
    }

    #[test]
    fn test_catalog_find_by_name() {
        let catalog = VoiceCatalog::new(vec![voice("Alex"), voice("Samantha")]);
        assert_eq!(catalog.find("Samantha"), Some(&voice("Samantha")));
        assert!(catalog.find("Nobody").is_none());
    }

    #[test]
    fn test_catalog_cycles_forward() {
        let catalog = VoiceCatalog::new(vec![voice("a"), voice("b"), voice("c")]);
        assert_eq!(catalog.next_after(None), Some(&voice("a")));
        assert_eq!(catalog.next_after(Some(&voice("a"))), Some(&voice("b")));
        assert_eq!(catalog.next_after(Some(&voice("c"))), Some(&voice("a")));
    }

    #[test]
    fn test_catalog_cycles_backward() {
        let catalog = VoiceCatalog::new(vec![voice("a"), voice("b"), voice("c")]);
        assert_eq!(catalog.previous_before(None), Some(&voice("c")));
        assert_eq!(catalog.previous_before(Some(&voice("a"))), Some(&voice("c")));
        assert_eq!(catalog.previous_before(Some(&voice("c"))), Some(&voice("b")));
    }

    #[test]
    fn test_empty_catalog_has_no_voices_to_cycle() {
        let catalog = VoiceCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.next_after(None).is_none());
        assert!(catalog.previous_before(None).is_none());
    }

    #[test]
    fn test_unavailable_speech_resolves_empty() {
        let mut speech = Speech::Unavailable;
        let mut request = load_voices(&mut speech);
        assert!(!request.is_pending());
        assert_eq!(request.try_resolve(&speech), Some(Vec::new()));
    }
}
