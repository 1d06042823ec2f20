//! Observable input-fault state.
//!
//! Dropped input must never be silent: when a symbol, letter, or
//! space cannot be committed, the controller records it here and the
//! loop keeps polling. Nothing in this module ever stops the
//! translator; a dropped element is simply re-entered by the
//! operator.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

/// Fault codes indicating which input was dropped and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FaultCode {
    /// No fault (normal operation).
    None = 0,

    /// Code buffer at capacity: the symbol was dropped, the buffered
    /// sequence is unchanged.
    BufferFull = 1,

    /// Phrase at capacity: the letter or space was dropped, the
    /// phrase is unchanged.
    PhraseFull = 2,

    /// The buffered sequence matched no table entry; the unknown
    /// marker was committed in its place.
    UnknownSequence = 3,
}

impl FaultCode {
    /// Convert from raw u8 value.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => FaultCode::BufferFull,
            2 => FaultCode::PhraseFull,
            3 => FaultCode::UnknownSequence,
            _ => FaultCode::None,
        }
    }
}

/// Thread-safe fault record.
///
/// Set from the polling context, readable from anywhere (e.g. a
/// diagnostics drain on another task). The counter accumulates for
/// the whole session so intermittent drops stay visible.
pub struct FaultState {
    /// True if the latest fault has not been acknowledged.
    active: AtomicBool,

    /// Fault code (reason input was dropped).
    code: AtomicU8,

    /// Additional data (e.g. buffer length at the time of the drop).
    data: AtomicU32,

    /// Total fault count since boot (never cleared).
    count: AtomicU32,
}

impl FaultState {
    /// Create new fault state (no fault).
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            code: AtomicU8::new(0),
            data: AtomicU32::new(0),
            count: AtomicU32::new(0),
        }
    }

    /// Record a fault.
    ///
    /// Atomically marks the fault active with the given code and data
    /// and increments the cumulative counter.
    #[inline]
    pub fn set(&self, code: FaultCode, data: u32) {
        self.code.store(code as u8, Ordering::Release);
        self.data.store(data, Ordering::Release);
        self.count.fetch_add(1, Ordering::Relaxed);
        self.active.store(true, Ordering::Release);
    }

    /// Check if an unacknowledged fault is pending.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Get fault code (only meaningful if `is_active()` is true).
    #[inline]
    pub fn code(&self) -> FaultCode {
        FaultCode::from_u8(self.code.load(Ordering::Acquire))
    }

    /// Get fault data (meaning depends on fault code).
    #[inline]
    pub fn data(&self) -> u32 {
        self.data.load(Ordering::Acquire)
    }

    /// Get total fault count since boot.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Acknowledge the pending fault.
    ///
    /// Clears the active flag but does NOT reset the counter; fault
    /// history is preserved for diagnostics.
    #[inline]
    pub fn clear(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Get a snapshot of the current fault state.
    #[inline]
    pub fn snapshot(&self) -> FaultSnapshot {
        FaultSnapshot {
            active: self.is_active(),
            code: self.code(),
            data: self.data(),
            count: self.count(),
        }
    }
}

impl Default for FaultState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of fault state at a point in time.
#[derive(Clone, Copy, Debug)]
pub struct FaultSnapshot {
    pub active: bool,
    pub code: FaultCode,
    pub data: u32,
    pub count: u32,
}
