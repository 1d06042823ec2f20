//! Global log stream instance.
//!
//! Single producer (the polling task), single consumer (the UART
//! drain). Both sides are lock-free, so sharing one static is safe.

use crate::logging::LogStream;

/// Log stream for the translator firmware.
pub static LOG_STREAM: LogStream = LogStream::new();
