//! Input controller finite state machine.
//!
//! Pure logic, no hardware dependencies. Consumes button snapshots
//! and millisecond timestamps, produces tone edges and render
//! requests. Fully testable on host.
//!
//! # Buttons
//!
//! - **Entry button**: press duration selects Dot or Dash; the tone
//!   follows the press exactly.
//! - **Commit button**: a press decodes the pending letter once; a
//!   hold past the word gap inserts exactly one space.
//!
//! A single physical commit press must produce two distinct outcomes
//! without double-firing while held across polling ticks. Two latches
//! guarantee that: decode fires only on the press edge, and a
//! separate `space_sent` flag (reset only on release) limits the hold
//! to one space.

use crate::button::ButtonState;
use crate::code::CodeBuffer;
use crate::config::TimingConfig;
use crate::fault::{FaultCode, FaultState};
use crate::hal::{DisplaySink, ToneSink};
use crate::phrase::PhraseAssembler;
use crate::symbol::{classify, Symbol};
use crate::table::{decode, UNKNOWN_MARKER};

/// Per-tick output of the controller.
///
/// Tone edges fire at most once per press/release; render requests
/// tell the caller which view changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlUpdate {
    /// Start the feedback tone (entry button went down).
    pub tone_on: bool,

    /// Stop the feedback tone (entry button came up).
    pub tone_off: bool,

    /// The in-progress symbol buffer changed and should be rendered.
    pub render_code: bool,

    /// The assembled phrase changed and should be rendered.
    pub render_phrase: bool,
}

/// Top-level polling state machine.
///
/// Owns the code buffer and the phrase; all button timing state lives
/// in fields of this instance, passed explicitly through the polling
/// loop.
///
/// # Example
///
/// ```
/// use rust_morse_translator::{ButtonState, FaultState, InputController, TimingConfig};
///
/// let fault = FaultState::new();
/// let mut controller = InputController::new(TimingConfig::default(), &fault);
///
/// // 100ms entry press: tone follows the press, a Dot lands in the buffer
/// let update = controller.tick(0, ButtonState::from_pressed(true, false));
/// assert!(update.tone_on);
///
/// let update = controller.tick(100, ButtonState::IDLE);
/// assert!(update.tone_off);
/// assert!(update.render_code);
/// assert_eq!(controller.code().len(), 1);
/// ```
pub struct InputController<'a> {
    config: TimingConfig,
    fault: &'a FaultState,

    code: CodeBuffer,
    phrase: PhraseAssembler,

    // Entry button state
    entry_down: bool,
    entry_start_ms: u32,

    // Commit button state
    commit_down: bool,
    commit_start_ms: u32,
    space_sent: bool,
}

impl<'a> InputController<'a> {
    /// Create a controller with the given timing configuration.
    pub fn new(config: TimingConfig, fault: &'a FaultState) -> Self {
        Self {
            config,
            fault,
            code: CodeBuffer::new(),
            phrase: PhraseAssembler::new(),
            entry_down: false,
            entry_start_ms: 0,
            commit_down: false,
            commit_start_ms: 0,
            space_sent: false,
        }
    }

    /// Get current configuration.
    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Read-only view of the in-progress symbol buffer.
    pub fn code(&self) -> &[Symbol] {
        self.code.as_symbols()
    }

    /// The assembled phrase so far.
    pub fn phrase(&self) -> &str {
        self.phrase.as_str()
    }

    /// Advance both button state machines by one polling tick.
    ///
    /// `now_ms` comes from a monotonic clock; elapsed durations are
    /// computed with wrapping subtraction, so timestamp wraparound is
    /// harmless. Never blocks, never fails: capacity overruns and
    /// unknown sequences are recorded on the shared [`FaultState`]
    /// and the offending input is dropped.
    pub fn tick(&mut self, now_ms: u32, buttons: ButtonState) -> ControlUpdate {
        let mut update = ControlUpdate::default();
        self.tick_entry(now_ms, buttons.entry(), &mut update);
        self.tick_commit(now_ms, buttons.commit(), &mut update);
        update
    }

    /// Run one tick and apply the resulting update to the sinks.
    pub fn poll<T: ToneSink, D: DisplaySink>(
        &mut self,
        now_ms: u32,
        buttons: ButtonState,
        tone: &mut T,
        display: &mut D,
    ) -> ControlUpdate {
        let update = self.tick(now_ms, buttons);

        if update.tone_on {
            tone.tone_on();
        }
        if update.tone_off {
            tone.tone_off();
        }
        if update.render_code {
            display.show_code(self.code.as_symbols());
        }
        if update.render_phrase {
            display.show_phrase(self.phrase.as_str());
        }

        update
    }

    // --- Private methods ---

    /// Entry button: Idle -> Pressed -> Idle.
    ///
    /// Press starts the tone and the timer; release classifies the
    /// elapsed duration and buffers the symbol.
    fn tick_entry(&mut self, now_ms: u32, pressed: bool, update: &mut ControlUpdate) {
        if pressed && !self.entry_down {
            self.entry_down = true;
            self.entry_start_ms = now_ms;
            update.tone_on = true;
        } else if !pressed && self.entry_down {
            self.entry_down = false;
            update.tone_off = true;

            let held_ms = now_ms.wrapping_sub(self.entry_start_ms);
            let symbol = classify(held_ms, self.config.symbol_threshold_ms);

            if self.code.append(symbol).is_err() {
                // Symbol dropped, buffer unchanged; operator re-enters.
                self.fault.set(FaultCode::BufferFull, self.code.len() as u32);
            }

            update.render_code = true;
        }
    }

    /// Commit button: Idle -> Pressed(decoded) -> Pressed(spaced) -> Idle.
    ///
    /// Decode fires on the press edge only. The space fires on the
    /// first tick past the word gap and is latched until release.
    fn tick_commit(&mut self, now_ms: u32, pressed: bool, update: &mut ControlUpdate) {
        if pressed && !self.commit_down {
            self.commit_down = true;
            self.commit_start_ms = now_ms;
            self.space_sent = false;

            // An empty buffer is a legal space-only hold: no decode,
            // no empty-letter artifact.
            if !self.code.is_empty() {
                self.commit_pending_letter(update);
            }
        } else if pressed && self.commit_down {
            if !self.space_sent {
                let held_ms = now_ms.wrapping_sub(self.commit_start_ms);
                if held_ms > self.config.word_gap_ms {
                    self.space_sent = true;
                    match self.phrase.commit_space() {
                        Ok(()) => update.render_phrase = true,
                        Err(_) => {
                            self.fault.set(FaultCode::PhraseFull, self.phrase.len() as u32);
                        }
                    }
                }
            }
        } else if !pressed && self.commit_down {
            self.commit_down = false;
            self.space_sent = false;
        }
    }

    /// Decode the buffered sequence and append the result (or the
    /// unknown marker) to the phrase. The buffer is cleared either
    /// way so a malformed letter cannot poison the next one.
    fn commit_pending_letter(&mut self, update: &mut ControlUpdate) {
        let character = match decode(self.code.as_symbols()) {
            Some(c) => c,
            None => {
                self.fault
                    .set(FaultCode::UnknownSequence, self.code.len() as u32);
                UNKNOWN_MARKER
            }
        };

        if self.phrase.commit_letter(character).is_err() {
            self.fault.set(FaultCode::PhraseFull, self.phrase.len() as u32);
        }

        self.code.clear();
        update.render_phrase = true;
    }
}
