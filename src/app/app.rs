use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::Config;
use crate::input::{self, LoadError, LoadedText};
use crate::reading::ReadingState;
use crate::speech::{load_voices, SettingsForm, Speech, VoiceCatalog, VoiceRequest};
use crate::ui::command::{command_to_app_event, parse_command};

/// One-line message shown under the controls
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Warning(String),
}

pub struct App {
    mode: AppMode,
    reading: ReadingState,
    speech: Speech,
    form: SettingsForm,
    catalog: VoiceCatalog,
    voice_request: Option<VoiceRequest>,
    preferred_voice: Option<String>,
    auto_speak: bool,
    command_input: String,
    status: Option<Status>,
    show_help: bool,
}

impl App {
    pub fn new(config: &Config, mut speech: Speech) -> Self {
        let voice_request = load_voices(&mut speech);

        Self {
            mode: AppMode::Reading,
            reading: ReadingState::new(config.reading.display_count, config.reading.pad_count),
            speech,
            form: SettingsForm::new(config.speech.settings()),
            catalog: VoiceCatalog::default(),
            voice_request: Some(voice_request),
            preferred_voice: config.speech.voice.clone(),
            auto_speak: config.speech.auto_speak,
            command_input: String::new(),
            status: None,
            show_help: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn reading(&self) -> &ReadingState {
        &self.reading
    }

    pub fn settings(&self) -> &SettingsForm {
        &self.form
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Poll the outstanding voice catalog request, once per event loop tick.
    pub fn tick(&mut self) {
        let Some(request) = self.voice_request.as_mut() else {
            return;
        };
        if let Some(voices) = request.try_resolve(&self.speech) {
            self.voice_request = None;
            self.apply_catalog(VoiceCatalog::new(voices));
        }
    }

    fn apply_catalog(&mut self, catalog: VoiceCatalog) {
        tracing::info!("Loaded {} voices", catalog.len());
        self.catalog = catalog;

        if let Some(name) = self.preferred_voice.take() {
            if let Err(err) = self.form.select_voice(Some(&name), &self.catalog) {
                tracing::warn!("Preferred voice not found: {}", err);
                self.status = Some(Status::Warning(err.to_string()));
            }
        }
    }

    /// Replace the text, e.g. from a file given on the command line.
    pub fn load_text(&mut self, loaded: LoadedText) {
        tracing::info!(
            "Loaded {} words from {}",
            loaded.text.split_whitespace().count(),
            loaded.source
        );
        self.reading.set_text(loaded.text);
        self.status = Some(Status::Info(format!("Loaded {}", loaded.source)));
    }

    fn load_result(&mut self, result: Result<LoadedText, LoadError>) {
        match result {
            Ok(loaded) => self.load_text(loaded),
            Err(err) => {
                tracing::warn!("Load failed: {}", err);
                self.status = Some(Status::Warning(err.to_string()));
            }
        }
    }

    fn speak(&mut self) {
        let focus = self.reading.window().focus_text();
        if let Err(err) = self.speech.speak_focus(&focus, self.form.committed()) {
            tracing::warn!("Failed to speak: {}", err);
            self.status = Some(Status::Warning(err.to_string()));
        }
    }

    fn after_move(&mut self) {
        if self.auto_speak {
            self.speak();
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Advance => {
                if self.reading.advance() {
                    self.after_move();
                }
            }
            AppEvent::Retreat => {
                if self.reading.retreat() {
                    self.after_move();
                }
            }
            AppEvent::Reset => {
                if self.reading.reset() {
                    self.after_move();
                }
            }
            AppEvent::Speak => self.speak(),

            AppEvent::SetDisplayCount(input) => {
                self.status = Some(match self.reading.set_display_count_input(&input) {
                    Ok(count) => Status::Info(format!("Display words: {}", count)),
                    Err(err) => Status::Warning(format!("Display words: {}", err)),
                });
            }
            AppEvent::SetPadCount(input) => {
                self.status = Some(match self.reading.set_pad_count_input(&input) {
                    Ok(count) => Status::Info(format!("Pad words: {}", count)),
                    Err(err) => Status::Warning(format!("Pad words: {}", err)),
                });
            }
            AppEvent::StepDisplayCount(delta) => {
                let count = self.reading.display_count() as i64 + delta;
                self.reading.set_display_count(count);
            }
            AppEvent::StepPadCount(delta) => {
                let count = self.reading.pad_count() as i64 + delta;
                self.reading.set_pad_count(count);
            }

            AppEvent::SetSlider(slider, input) => {
                // Errors stay on the form and render next to the field
                let _ = self.form.set_number_input(slider, &input);
            }
            AppEvent::NudgeSlider(slider, steps) => {
                let _ = self.form.nudge(slider, steps);
            }
            AppEvent::SelectVoice(name) => {
                let _ = self.form.select_voice(name.as_deref(), &self.catalog);
            }
            AppEvent::NextVoice => self.form.next_voice(&self.catalog),
            AppEvent::PreviousVoice => self.form.previous_voice(&self.catalog),

            AppEvent::StartEditing => {
                self.mode = AppMode::Editing;
                self.show_help = false;
            }
            AppEvent::InsertChar(c) => self.reading.insert_char(c),
            AppEvent::DeleteChar => self.reading.delete_last_grapheme(),
            AppEvent::StopEditing => self.mode = AppMode::Reading,

            AppEvent::OpenCommand(prefix) => {
                self.command_input.clear();
                if let Some(c) = prefix {
                    self.command_input.push(c);
                }
                self.mode = AppMode::Command;
            }
            AppEvent::CommandChar(c) => self.command_input.push(c),
            AppEvent::CommandBackspace => {
                self.command_input.pop();
            }
            AppEvent::SubmitCommand => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Reading;
                let event = command_to_app_event(parse_command(&input));
                tracing::debug!("Command {:?} -> {:?}", input, event);
                self.handle_event(event);
            }
            AppEvent::CancelCommand => {
                self.command_input.clear();
                self.mode = AppMode::Reading;
            }

            AppEvent::LoadFile(path) => {
                let result = input::file::load(&path);
                self.load_result(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.load_result(result);
            }
            AppEvent::Quit => {
                if let Err(err) = self.speech.cancel() {
                    tracing::warn!("Failed to stop speech: {}", err);
                }
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => self.show_help = !self.show_help,
            AppEvent::InvalidCommand(input) => {
                self.status = Some(Status::Warning(format!("Unknown command: {}", input)));
            }
            AppEvent::None => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let window = self.reading.window();

        RenderState {
            mode: self.mode,
            text: self.reading.text().to_string(),
            lead: window.lead_text(),
            focus: window.focus_text(),
            trail: window.trail_text(),
            position: self.reading.position(),
            word_count: self.reading.word_count(),
            display_count: self.reading.display_count(),
            pad_count: self.reading.pad_count(),
            settings: self.form.committed().clone(),
            errors: self
                .form
                .errors()
                .map(|(field, err)| (field, err.to_string()))
                .collect(),
            voice_count: self.catalog.len(),
            voices_loading: self.voice_request.is_some(),
            speech_available: self.speech.is_available(),
            auto_speak: self.auto_speak,
            command_input: self.command_input.clone(),
            status: self.status.clone(),
            show_help: self.show_help,
        }
    }
}
