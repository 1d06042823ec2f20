//! Module: code
//!
//! Purpose: bounded symbol buffer for the letter currently being
//! entered.
//!
//! The buffer is transient per-letter: the controller clears it after
//! every decode attempt, successful or not. Overflow is rejected with
//! an explicit error and never touches the stored symbols.

use crate::symbol::Symbol;

/// Maximum symbols per letter.
///
/// The longest code in the table is 5 symbols; the extra headroom
/// absorbs operator fumbling before the overflow error kicks in.
pub const CODE_CAPACITY: usize = 20;

/// Error: the code buffer is at capacity, the symbol was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferFull;

/// Ordered sequence of symbols for one letter, bounded capacity.
pub struct CodeBuffer {
    symbols: [Symbol; CODE_CAPACITY],
    len: usize,
}

impl CodeBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            symbols: [Symbol::Dot; CODE_CAPACITY],
            len: 0,
        }
    }

    /// Append one symbol.
    ///
    /// Fails with [`BufferFull`] when the buffer is at capacity; the
    /// stored symbols are unchanged in that case.
    pub fn append(&mut self, symbol: Symbol) -> Result<(), BufferFull> {
        if self.len >= CODE_CAPACITY {
            return Err(BufferFull);
        }
        self.symbols[self.len] = symbol;
        self.len += 1;
        Ok(())
    }

    /// Read-only view of the current symbols, for table lookup.
    #[inline]
    pub fn as_symbols(&self) -> &[Symbol] {
        &self.symbols[..self.len]
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of symbols currently buffered.
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

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}
