//! End-to-end translator tests with mock hardware sinks.
//!
//! Drives the controller through `poll()` the way the firmware loop
//! does, with recording tone/display mocks in place of the buzzer and
//! the real display.

use rust_morse_translator::hal::{DisplaySink, ToneSink};
use rust_morse_translator::{ButtonState, FaultState, InputController, Symbol, TimingConfig};

/// Recording buzzer: `true` for tone_on, `false` for tone_off.
#[derive(Default)]
struct MockTone {
    events: Vec<bool>,
}

impl ToneSink for MockTone {
    fn tone_on(&mut self) {
        self.events.push(true);
    }

    fn tone_off(&mut self) {
        self.events.push(false);
    }
}

/// Recording display: every render request, in order.
#[derive(Default)]
struct MockDisplay {
    codes: Vec<String>,
    phrases: Vec<String>,
}

impl DisplaySink for MockDisplay {
    fn show_code(&mut self, code: &[Symbol]) {
        self.codes.push(code.iter().map(|s| s.as_char()).collect());
    }

    fn show_phrase(&mut self, phrase: &str) {
        self.phrases.push(phrase.to_string());
    }
}

/// Test rig bundling controller and mocks with a virtual clock.
struct Rig<'a> {
    controller: InputController<'a>,
    tone: MockTone,
    display: MockDisplay,
    now_ms: u32,
}

impl<'a> Rig<'a> {
    fn new(fault: &'a FaultState) -> Self {
        Self {
            controller: InputController::new(TimingConfig::default(), fault),
            tone: MockTone::default(),
            display: MockDisplay::default(),
            now_ms: 0,
        }
    }

    fn poll(&mut self, buttons: ButtonState) {
        self.controller
            .poll(self.now_ms, buttons, &mut self.tone, &mut self.display);
    }

    /// One full entry-button press of the given duration.
    fn key_entry(&mut self, duration_ms: u32) {
        self.poll(ButtonState::from_pressed(true, false));
        self.now_ms += duration_ms;
        self.poll(ButtonState::IDLE);
        self.now_ms += 100;
    }

    /// Short commit press: decode the pending letter.
    fn commit_letter(&mut self) {
        self.poll(ButtonState::from_pressed(false, true));
        self.now_ms += 100;
        self.poll(ButtonState::IDLE);
        self.now_ms += 100;
    }

    /// Hold the commit button in 100ms polling steps until a word
    /// space has been inserted, then release.
    fn commit_word_space(&mut self) {
        self.poll(ButtonState::from_pressed(false, true));
        for _ in 0..12 {
            self.now_ms += 100;
            self.poll(ButtonState::from_pressed(false, true));
        }
        self.poll(ButtonState::IDLE);
        self.now_ms += 100;
    }
}

#[test]
fn test_keying_sos() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    // S
    for _ in 0..3 {
        rig.key_entry(100);
    }
    rig.commit_letter();

    // O
    for _ in 0..3 {
        rig.key_entry(400);
    }
    rig.commit_letter();

    // S
    for _ in 0..3 {
        rig.key_entry(100);
    }
    rig.commit_letter();

    assert_eq!(rig.controller.phrase(), "SOS");
    assert_eq!(
        rig.display.phrases,
        vec!["S".to_string(), "SO".to_string(), "SOS".to_string()]
    );
    assert!(!fault.is_active());
}

#[test]
fn test_in_progress_code_rendered_per_symbol() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    rig.key_entry(100);
    rig.key_entry(400);
    rig.key_entry(100);

    assert_eq!(
        rig.display.codes,
        vec![".".to_string(), ".-".to_string(), ".-.".to_string()]
    );
}

#[test]
fn test_tone_follows_every_press() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    rig.key_entry(100);
    rig.key_entry(400);

    // Strict on/off alternation, one pair per press.
    assert_eq!(rig.tone.events, vec![true, false, true, false]);
}

#[test]
fn test_commit_button_never_touches_tone() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    rig.key_entry(100);
    rig.commit_letter();
    rig.commit_word_space();

    assert_eq!(rig.tone.events, vec![true, false]);
}

#[test]
fn test_word_space_between_words() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    // "HI"
    for _ in 0..4 {
        rig.key_entry(100);
    }
    rig.commit_letter();
    for _ in 0..2 {
        rig.key_entry(100);
    }
    rig.commit_letter();

    // Word gap, then "U"
    rig.commit_word_space();
    for duration in [100, 100, 400] {
        rig.key_entry(duration);
    }
    rig.commit_letter();

    assert_eq!(rig.controller.phrase(), "HI U");
}

#[test]
fn test_space_only_hold_with_empty_buffer() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    rig.commit_word_space();

    // One trailing space, no decode attempted, no fault.
    assert_eq!(rig.controller.phrase(), " ");
    assert_eq!(rig.display.phrases, vec![" ".to_string()]);
    assert!(!fault.is_active());
}

#[test]
fn test_unknown_letter_shows_marker_and_recovers() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    // Seven dots: not a letter.
    for _ in 0..7 {
        rig.key_entry(100);
    }
    rig.commit_letter();
    assert_eq!(rig.controller.phrase(), "?");
    assert!(fault.is_active());
    fault.clear();

    // The buffer was cleared, so the next letter decodes normally.
    rig.key_entry(100);
    rig.commit_letter();
    assert_eq!(rig.controller.phrase(), "?E");
    assert!(!fault.is_active());
}

#[test]
fn test_idle_polling_produces_no_output() {
    let fault = FaultState::new();
    let mut rig = Rig::new(&fault);

    for _ in 0..50 {
        rig.now_ms += 100;
        rig.poll(ButtonState::IDLE);
    }

    assert!(rig.tone.events.is_empty());
    assert!(rig.display.codes.is_empty());
    assert!(rig.display.phrases.is_empty());
    assert_eq!(rig.controller.phrase(), "");
}
