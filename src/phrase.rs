//! Module: phrase
//!
//! Purpose: accumulates decoded letters and word spaces into the
//! output phrase.
//!
//! The phrase persists for the session and is owned exclusively by
//! the controller. Capacity overruns are explicit errors, never
//! silent drops: the caller records them so the operator can see
//! input went missing.

/// Maximum phrase length in characters.
pub const PHRASE_CAPACITY: usize = 100;

/// Error: the phrase is at capacity, the commit was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseFull;

/// Appendable, bounded sequence of decoded characters and spaces.
pub struct PhraseAssembler {
    buf: [u8; PHRASE_CAPACITY],
    len: usize,
}

impl PhraseAssembler {
    /// Create an empty phrase.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; PHRASE_CAPACITY],
            len: 0,
        }
    }

    /// Append one decoded character.
    ///
    /// Only ASCII is ever produced by the table, so the phrase stays a
    /// valid single-byte-per-char string.
    pub fn commit_letter(&mut self, character: char) -> Result<(), PhraseFull> {
        self.push_byte(character as u8)
    }

    /// Append a single word space.
    ///
    /// Idempotency against a held commit button is enforced by the
    /// controller's latch; this method appends unconditionally.
    pub fn commit_space(&mut self) -> Result<(), PhraseFull> {
        self.push_byte(b' ')
    }

    fn push_byte(&mut self, byte: u8) -> Result<(), PhraseFull> {
        if self.len >= PHRASE_CAPACITY {
            return Err(PhraseFull);
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Get the phrase as a string slice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Current phrase length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for PhraseAssembler {
    fn default() -> Self {
        Self::new()
    }
}
