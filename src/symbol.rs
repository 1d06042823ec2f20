//! Morse symbol type and press-duration classification.
//!
//! Pure logic, no hardware dependencies. A press duration in
//! milliseconds maps to exactly one [`Symbol`]; grouping into letters
//! happens in [`crate::code`].

/// One atomic Morse unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Wire/display representation: `.` for Dot, `-` for Dash.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Parse a single pattern character.
    ///
    /// Returns `None` for anything other than `.` or `-`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Classify a button press duration into a symbol.
///
/// Durations below `threshold_ms` are a [`Symbol::Dot`], everything
/// else a [`Symbol::Dash`]. A press of exactly `threshold_ms` is a
/// Dash: the boundary must be deterministic, and the longer element is
/// the safer reading of a press the operator held to the limit.
///
/// No side effects; safe to call from any context.
#[inline]
pub const fn classify(duration_ms: u32, threshold_ms: u32) -> Symbol {
    if duration_ms < threshold_ms {
        Symbol::Dot
    } else {
        Symbol::Dash
    }
}
