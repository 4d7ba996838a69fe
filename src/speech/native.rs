//! Platform synthesizer backend built on the `tts` crate.

use super::{SpeechBackend, SpeechError, SpeechSettings, Voice};
use tts::{Features, Tts};

fn backend_error(err: tts::Error) -> SpeechError {
    SpeechError::Backend(err.to_string())
}

/// Map a rate or pitch factor (1.0 = normal) onto the engine's own scale.
fn scale_factor(factor: f32, normal: f32, min: f32, max: f32) -> f32 {
    (normal * factor).clamp(min, max)
}

/// Map a 0..=1 volume onto the engine's own scale.
fn scale_volume(volume: f32, min: f32, max: f32) -> f32 {
    min + volume.clamp(0.0, 1.0) * (max - min)
}

/// Id of the engine voice that should be active.
///
/// No committed voice means the voice the engine started with.
fn target_voice_id<'a>(
    wanted: Option<&'a Voice>,
    default_id: Option<&'a str>,
) -> Option<&'a str> {
    wanted.map(|voice| voice.id.as_str()).or(default_id)
}

pub struct NativeSpeech {
    tts: Tts,
    features: Features,
    default_voice_id: Option<String>,
}

impl NativeSpeech {
    pub fn new() -> Result<Self, SpeechError> {
        let tts = Tts::default().map_err(backend_error)?;
        let features = tts.supported_features();
        let default_voice_id = if features.voice {
            tts.voice().ok().flatten().map(|voice| voice.id())
        } else {
            None
        };
        Ok(Self {
            tts,
            features,
            default_voice_id,
        })
    }

    fn apply(&mut self, settings: &SpeechSettings) -> Result<(), SpeechError> {
        if self.features.rate {
            let rate = scale_factor(
                settings.rate,
                self.tts.normal_rate(),
                self.tts.min_rate(),
                self.tts.max_rate(),
            );
            self.tts.set_rate(rate).map_err(backend_error)?;
        }
        if self.features.pitch {
            let pitch = scale_factor(
                settings.pitch,
                self.tts.normal_pitch(),
                self.tts.min_pitch(),
                self.tts.max_pitch(),
            );
            self.tts.set_pitch(pitch).map_err(backend_error)?;
        }
        if self.features.volume {
            let volume =
                scale_volume(settings.volume, self.tts.min_volume(), self.tts.max_volume());
            self.tts.set_volume(volume).map_err(backend_error)?;
        }
        if !self.features.voice {
            return Ok(());
        }
        let Some(id) = target_voice_id(settings.voice.as_ref(), self.default_voice_id.as_deref())
        else {
            return Ok(());
        };
        let voices = self.tts.voices().map_err(backend_error)?;
        match voices.iter().find(|voice| voice.id() == id) {
            Some(voice) => self.tts.set_voice(voice).map_err(backend_error)?,
            None => tracing::warn!("Voice {} is no longer offered", id),
        }
        Ok(())
    }
}

impl SpeechBackend for NativeSpeech {
    fn voices(&self) -> Vec<Voice> {
        if !self.features.voice {
            return Vec::new();
        }
        let current = self.tts.voice().ok().flatten().map(|v| v.id());
        match self.tts.voices() {
            Ok(voices) => voices
                .into_iter()
                .map(|v| Voice {
                    is_default: current.as_deref() == Some(v.id().as_str()),
                    name: v.name(),
                    lang: v.language().to_string(),
                    is_local_only: true,
                    id: v.id(),
                })
                .collect(),
            Err(err) => {
                tracing::warn!("Failed to list voices: {}", err);
                Vec::new()
            }
        }
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        if !self.features.stop {
            return Ok(());
        }
        self.tts.stop().map(|_| ()).map_err(backend_error)
    }

    fn speak(&mut self, text: &str, settings: &SpeechSettings) -> Result<(), SpeechError> {
        self.apply(settings)?;
        self.tts
            .speak(text, false)
            .map(|_| ())
            .map_err(backend_error)
    }
}
