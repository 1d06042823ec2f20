//! Hardware Abstraction Layer for RustMorseTranslator.
//!
//! Thin capability contracts around the peripherals the controller
//! needs. Business logic stays in the core modules; implementations
//! are just I/O (PWM buzzer, display, GPIO) and live in the firmware
//! entry point or in test mocks.

use crate::symbol::Symbol;

/// Audio feedback capability.
///
/// Fired exactly at entry-button press/release transitions.
pub trait ToneSink {
    fn tone_on(&mut self);
    fn tone_off(&mut self);
}

/// Display capability.
///
/// The controller issues render requests on every visible state
/// change; it does not manage pixel buffers or transport.
pub trait DisplaySink {
    /// Render the in-progress symbol sequence.
    fn show_code(&mut self, code: &[Symbol]);

    /// Render the full assembled phrase.
    fn show_phrase(&mut self, phrase: &str);
}

/// Button wiring configuration.
pub struct ButtonConfig {
    pub entry_pin: i32,
    pub commit_pin: i32,
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        // Reference board wiring: buttons on GPIO5/GPIO6, pulled up.
        Self {
            entry_pin: 5,
            commit_pin: 6,
            active_low: true,
        }
    }
}

/// Buzzer wiring configuration.
pub struct BuzzerConfig {
    pub pin: i32,
    pub freq_hz: u32,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            pin: 21,
            freq_hz: 1000,
        }
    }
}
