// Configuration for the reader, speech output and logging.
// Everything has a default; a config file only needs the keys it changes.

use crate::cli::Args;
use crate::reading::{DISPLAY_COUNT_RANGE, PAD_COUNT_RANGE};
use crate::speech::settings::{check_number, Slider, SpeechSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Word window defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Words shown and spoken at once (1..=5, default 2)
    pub display_count: usize,

    /// Context words shown on each side (0..=5, default 2)
    pub pad_count: usize,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            display_count: 2,
            pad_count: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Use the speech backend at all
    pub enabled: bool,

    /// Speak the new chunk after every move
    pub auto_speak: bool,

    /// Preferred voice name, selected once the voice list has loaded
    pub voice: Option<String>,

    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        let settings = SpeechSettings::default();
        Self {
            enabled: true,
            auto_speak: false,
            voice: None,
            rate: settings.rate,
            pitch: settings.pitch,
            volume: settings.volume,
        }
    }
}

impl SpeechConfig {
    /// Initial speech settings. The voice is resolved later against the catalog.
    pub fn settings(&self) -> SpeechSettings {
        SpeechSettings {
            voice: None,
            rate: self.rate,
            pitch: self.pitch,
            volume: self.volume,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; no file means no logging (the terminal belongs to the UI)
    pub file: Option<PathBuf>,

    /// error, warn, info, debug or trace
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reading: ReadingConfig,
    pub speech: SpeechConfig,
    pub log: LogConfig,
}

impl Config {
    /// `<config dir>/tedious/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tedious").join("config.toml"))
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Load the default config file if there is one, otherwise use defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !DISPLAY_COUNT_RANGE.contains(&self.reading.display_count) {
            return Err(ConfigError::Invalid(format!(
                "reading.display_count must be in {}..={}, got {}",
                DISPLAY_COUNT_RANGE.start(),
                DISPLAY_COUNT_RANGE.end(),
                self.reading.display_count
            )));
        }
        if !PAD_COUNT_RANGE.contains(&self.reading.pad_count) {
            return Err(ConfigError::Invalid(format!(
                "reading.pad_count must be in {}..={}, got {}",
                PAD_COUNT_RANGE.start(),
                PAD_COUNT_RANGE.end(),
                self.reading.pad_count
            )));
        }

        let speech = &self.speech;
        for (slider, value) in [
            (Slider::Rate, speech.rate),
            (Slider::Pitch, speech.pitch),
            (Slider::Volume, speech.volume),
        ] {
            check_number(slider, value).map_err(|err| {
                ConfigError::Invalid(format!(
                    "speech.{}: {}",
                    slider.label().to_lowercase(),
                    err
                ))
            })?;
        }

        self.log.level.parse::<tracing::Level>().map_err(|_| {
            ConfigError::Invalid(format!("log.level: unknown level {:?}", self.log.level))
        })?;

        Ok(())
    }

    /// Apply command line overrides on top of the file settings.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(display) = args.display {
            self.reading.display_count = display as usize;
        }
        if let Some(pad) = args.pad {
            self.reading.pad_count = pad as usize;
        }
        if args.no_speech {
            self.speech.enabled = false;
        }
        if args.auto_speak {
            self.speech.auto_speak = true;
        }
        if let Some(voice) = &args.voice {
            self.speech.voice = Some(voice.clone());
        }
        if let Some(file) = &args.log_file {
            self.log.file = Some(file.clone());
        }
        if let Some(level) = &args.log_level {
            self.log.level = level.clone();
        }
    }
}
