//! Module: button
//!
//! Purpose: per-tick snapshot of both logical buttons.
//!
//! The polling loop reads the raw pins once per iteration and hands
//! the controller a single [`ButtonState`] byte. Stored as bit flags
//! so a snapshot is trivially `Copy` and comparable.

/// Instantaneous state of the two input buttons.
///
/// Bit layout:
/// - Bit 0: entry button (produces symbols)
/// - Bit 1: commit button (decodes letters / inserts spaces)
/// - Bits 2-7: reserved
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState(u8);

impl ButtonState {
    /// Entry button bit mask (bit 0).
    pub const ENTRY: u8 = 0x01;

    /// Commit button bit mask (bit 1).
    pub const COMMIT: u8 = 0x02;

    /// No buttons pressed.
    pub const IDLE: Self = Self(0);

    /// Both buttons pressed.
    pub const BOTH: Self = Self(Self::ENTRY | Self::COMMIT);

    /// Create a state from raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a state from two pressed flags.
    pub const fn from_pressed(entry: bool, commit: bool) -> Self {
        let mut bits = 0;
        if entry {
            bits |= Self::ENTRY;
        }
        if commit {
            bits |= Self::COMMIT;
        }
        Self(bits)
    }

    /// Get raw bits value.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if the entry button is pressed.
    pub const fn entry(&self) -> bool {
        (self.0 & Self::ENTRY) != 0
    }

    /// Check if the commit button is pressed.
    pub const fn commit(&self) -> bool {
        (self.0 & Self::COMMIT) != 0
    }

    /// Check if neither button is pressed.
    pub const fn is_idle(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        let idle = ButtonState::IDLE;
        assert!(!idle.entry());
        assert!(!idle.commit());
        assert!(idle.is_idle());
    }

    #[test]
    fn test_entry_only() {
        let state = ButtonState::from_bits(ButtonState::ENTRY);
        assert!(state.entry());
        assert!(!state.commit());
        assert!(!state.is_idle());
    }

    #[test]
    fn test_commit_only() {
        let state = ButtonState::from_bits(ButtonState::COMMIT);
        assert!(!state.entry());
        assert!(state.commit());
    }

    #[test]
    fn test_both() {
        assert!(ButtonState::BOTH.entry());
        assert!(ButtonState::BOTH.commit());
    }

    #[test]
    fn test_from_pressed_matches_bits() {
        assert_eq!(ButtonState::from_pressed(false, false), ButtonState::IDLE);
        assert_eq!(
            ButtonState::from_pressed(true, false),
            ButtonState::from_bits(ButtonState::ENTRY)
        );
        assert_eq!(
            ButtonState::from_pressed(false, true),
            ButtonState::from_bits(ButtonState::COMMIT)
        );
        assert_eq!(ButtonState::from_pressed(true, true), ButtonState::BOTH);
    }
}
