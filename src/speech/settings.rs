//! Speech settings and their validation schema.
//!
//! Every edit is validated as it happens. A rejected edit records a
//! field-level error and leaves the committed settings at their last valid
//! value, so speaking always uses settings that passed the schema.

use crate::speech::voice::{Voice, VoiceCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Inclusive numeric bounds for a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

pub const RATE_BOUNDS: Bounds = Bounds { min: 0.1, max: 3.0 };
pub const PITCH_BOUNDS: Bounds = Bounds { min: 0.1, max: 2.0 };
pub const VOLUME_BOUNDS: Bounds = Bounds { min: 0.0, max: 1.0 };

/// Slider increment.
pub const SLIDER_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slider {
    Rate,
    Pitch,
    Volume,
}

impl Slider {
    pub const ALL: [Slider; 3] = [Slider::Rate, Slider::Pitch, Slider::Volume];

    pub fn bounds(self) -> Bounds {
        match self {
            Slider::Rate => RATE_BOUNDS,
            Slider::Pitch => PITCH_BOUNDS,
            Slider::Volume => VOLUME_BOUNDS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slider::Rate => "Rate",
            Slider::Pitch => "Pitch",
            Slider::Volume => "Volume",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Voice,
    Slider(Slider),
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Voice => "Voice",
            Field::Slider(slider) => slider.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Expected number, received nan")]
    NotANumber,

    #[error("Number must be greater than or equal to {min}")]
    TooSmall { min: f32 },

    #[error("Number must be less than or equal to {max}")]
    TooBig { max: f32 },

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// `None` leaves voice choice to the backend.
    pub voice: Option<Voice>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            voice: None,
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Check a slider value against its bounds.
pub fn check_number(slider: Slider, value: f32) -> Result<f32, SettingsError> {
    let bounds = slider.bounds();
    if value.is_nan() {
        Err(SettingsError::NotANumber)
    } else if value < bounds.min {
        Err(SettingsError::TooSmall { min: bounds.min })
    } else if value > bounds.max {
        Err(SettingsError::TooBig { max: bounds.max })
    } else {
        Ok(value)
    }
}

impl SpeechSettings {
    pub fn get(&self, slider: Slider) -> f32 {
        match slider {
            Slider::Rate => self.rate,
            Slider::Pitch => self.pitch,
            Slider::Volume => self.volume,
        }
    }

    fn set(&mut self, slider: Slider, value: f32) {
        match slider {
            Slider::Rate => self.rate = value,
            Slider::Pitch => self.pitch = value,
            Slider::Volume => self.volume = value,
        }
    }

    /// Validate every field, collecting one error per failing field.
    pub fn validate(&self) -> Result<(), Vec<(Field, SettingsError)>> {
        let errors: Vec<(Field, SettingsError)> = Slider::ALL
            .iter()
            .filter_map(|&slider| {
                check_number(slider, self.get(slider))
                    .err()
                    .map(|err| (Field::Slider(slider), err))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Edit buffer for speech settings with per-field errors.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    committed: SpeechSettings,
    errors: BTreeMap<Field, SettingsError>,
}

impl SettingsForm {
    /// Start from settings that are already known to be valid.
    pub fn new(committed: SpeechSettings) -> Self {
        Self {
            committed,
            errors: BTreeMap::new(),
        }
    }

    /// The last settings that passed validation.
    pub fn committed(&self) -> &SpeechSettings {
        &self.committed
    }

    pub fn error(&self, field: Field) -> Option<&SettingsError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, &SettingsError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn record(
        &mut self,
        field: Field,
        result: Result<(), SettingsError>,
    ) -> Result<(), SettingsError> {
        match &result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                tracing::debug!(field = field.label(), error = %err, "Rejected settings edit");
                self.errors.insert(field, err.clone());
            }
        }
        result
    }

    pub fn set_number(&mut self, slider: Slider, value: f32) -> Result<(), SettingsError> {
        let result = check_number(slider, value).map(|value| self.committed.set(slider, value));
        self.record(Field::Slider(slider), result)
    }

    /// Validate a typed value. Text that is not a number is rejected as NaN.
    pub fn set_number_input(&mut self, slider: Slider, input: &str) -> Result<(), SettingsError> {
        let value = input.trim().parse::<f32>().unwrap_or(f32::NAN);
        self.set_number(slider, value)
    }

    /// Move a slider by whole steps, staying inside its bounds.
    pub fn nudge(&mut self, slider: Slider, steps: i32) -> Result<(), SettingsError> {
        let bounds = slider.bounds();
        let raw = self.committed.get(slider) + steps as f32 * SLIDER_STEP;
        let rounded = (raw * 10.0).round() / 10.0;
        self.set_number(slider, rounded.clamp(bounds.min, bounds.max))
    }

    /// Select a voice by name; `None` clears the selection.
    pub fn select_voice(
        &mut self,
        name: Option<&str>,
        catalog: &VoiceCatalog,
    ) -> Result<(), SettingsError> {
        let result = match name {
            None => {
                self.committed.voice = None;
                Ok(())
            }
            Some(name) => match catalog.find(name) {
                Some(voice) => {
                    self.committed.voice = Some(voice.clone());
                    Ok(())
                }
                None => Err(SettingsError::UnknownVoice(name.to_string())),
            },
        };
        self.record(Field::Voice, result)
    }

    pub fn next_voice(&mut self, catalog: &VoiceCatalog) {
        if let Some(voice) = catalog.next_after(self.committed.voice.as_ref()) {
            self.committed.voice = Some(voice.clone());
            self.errors.remove(&Field::Voice);
        }
    }

    pub fn previous_voice(&mut self, catalog: &VoiceCatalog) {
        if let Some(voice) = catalog.previous_before(self.committed.voice.as_ref()) {
            self.committed.voice = Some(voice.clone());
            self.errors.remove(&Field::Voice);
        }
    }
}
