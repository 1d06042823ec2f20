//! # RustMorseTranslator
//!
//! Two-button Morse code translator with audio and display feedback.
//!
//! ## Architecture
//!
//! All decision logic lives in this library and is pure:
//! - [`InputController`] consumes button snapshots + timestamps, produces updates
//! - Hardware (GPIO, PWM tone, display) sits behind narrow capability traits
//! - No callbacks into hardware from the state machine, fully testable on host
//!
//! The firmware entry point (`src/main.rs`, espidf only) owns the polling
//! loop and the peripheral drivers.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod code;
pub mod config;
pub mod controller;
pub mod fault;
pub mod hal;
pub mod log_globals;
pub mod logging;
pub mod phrase;
pub mod symbol;
pub mod table;
pub mod uart_logger;

pub use button::ButtonState;
pub use code::{BufferFull, CodeBuffer, CODE_CAPACITY};
pub use config::TimingConfig;
pub use controller::{ControlUpdate, InputController};
pub use fault::{FaultCode, FaultState};
pub use log_globals::LOG_STREAM;
pub use phrase::{PhraseAssembler, PhraseFull, PHRASE_CAPACITY};
pub use symbol::{classify, Symbol};
pub use table::UNKNOWN_MARKER;
