//! Module: config
//!
//! Purpose: timing configuration for the translator.
//!
//! The thresholds are configuration, not per-instance state: the
//! controller takes a copy at construction and never mutates it.
//! Defaults match the reference hardware (299ms dot/dash boundary,
//! 1s word-gap hold, 100ms polling cadence).

/// Timing thresholds for classification and word segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Press duration boundary between Dot and Dash, in milliseconds.
    /// Presses of exactly this length classify as Dash.
    pub symbol_threshold_ms: u32,

    /// Commit-button hold duration after which a word space is
    /// inserted, in milliseconds.
    pub word_gap_ms: u32,

    /// Idle delay between polling iterations, in milliseconds.
    /// Bounds responsiveness, not correctness.
    pub poll_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            symbol_threshold_ms: 299,
            word_gap_ms: 1000,
            poll_interval_ms: 100,
        }
    }
}

impl TimingConfig {
    /// Create a config with a custom dot/dash boundary.
    pub fn with_symbol_threshold(symbol_threshold_ms: u32) -> Self {
        Self {
            symbol_threshold_ms,
            ..Default::default()
        }
    }
}
