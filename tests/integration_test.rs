use crossbeam_channel::{Receiver, Sender};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tedious::app::{App, AppEvent};
use tedious::config::Config;
use tedious::input;
use tedious::reading::ReadingState;
use tedious::speech::{SpeechBackend, SpeechError, SpeechSettings, Speech, Voice};

#[derive(Default)]
struct Shared {
    spoken: Vec<String>,
    voices: Vec<Voice>,
    notify: Option<Sender<()>>,
}

/// Backend whose voice list only shows up after a notification.
struct LateVoices(Rc<RefCell<Shared>>);

impl SpeechBackend for LateVoices {
    fn voices(&self) -> Vec<Voice> {
        self.0.borrow().voices.clone()
    }

    fn watch_voices(&mut self) -> Option<Receiver<()>> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.0.borrow_mut().notify = Some(tx);
        Some(rx)
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        Ok(())
    }

    fn speak(&mut self, text: &str, _settings: &SpeechSettings) -> Result<(), SpeechError> {
        self.0.borrow_mut().spoken.push(text.to_string());
        Ok(())
    }
}

#[test]
fn end_to_end_reading() {
    let test_file = std::env::temp_dir().join(format!("tedious-e2e-{}.txt", std::process::id()));
    let content = "The quick brown fox\njumps over the lazy dog.";
    fs::write(&test_file, content).unwrap();

    let loaded = input::file::load(&test_file).expect("Should load file successfully");
    assert_eq!(loaded.text, content);

    let mut state = ReadingState::new(3, 1);
    state.set_text(loaded.text);
    assert_eq!(state.word_count(), 9);
    assert_eq!(state.window().focus_text(), "The quick brown");
    assert_eq!(state.window().trail_text(), "fox");

    assert!(state.advance());
    assert_eq!(state.window().lead_text(), "brown");
    assert_eq!(state.window().focus_text(), "fox jumps over");

    assert!(state.advance());
    assert_eq!(state.window().focus_text(), "the lazy dog.");
    assert_eq!(state.window().trail_text(), "");

    // 6 + 3 = 9 is past the last index, so the step is refused
    assert!(!state.advance());
    assert_eq!(state.position(), 6);

    fs::remove_file(test_file).unwrap();
}

#[test]
fn voices_arrive_after_notification() {
    let shared = Rc::new(RefCell::new(Shared::default()));
    let mut app = App::new(
        &Config::default(),
        Speech::Available(Box::new(LateVoices(shared.clone()))),
    );

    app.tick();
    assert!(app.get_render_state().voices_loading);
    assert!(app.catalog().is_empty());

    shared.borrow_mut().voices.push(Voice {
        name: "Fiona".to_string(),
        lang: "en-scotland".to_string(),
        is_default: true,
        is_local_only: false,
        id: "com.apple.voice.Fiona".to_string(),
    });
    let notify = shared.borrow_mut().notify.take().unwrap();
    notify.send(()).unwrap();

    app.tick();
    let state = app.get_render_state();
    assert!(!state.voices_loading);
    assert_eq!(state.voice_count, 1);
}

#[test]
fn speaking_follows_navigation() {
    let shared = Rc::new(RefCell::new(Shared::default()));
    let mut app = App::new(
        &Config::default(),
        Speech::Available(Box::new(LateVoices(shared.clone()))),
    );
    app.handle_event(AppEvent::StartEditing);
    for c in "one two three four".chars() {
        app.handle_event(AppEvent::InsertChar(c));
    }
    app.handle_event(AppEvent::StopEditing);

    app.handle_event(AppEvent::Speak);
    app.handle_event(AppEvent::Advance);
    app.handle_event(AppEvent::Speak);

    assert_eq!(shared.borrow().spoken, vec!["one two", "three four"]);
}
