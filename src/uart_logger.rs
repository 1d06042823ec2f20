//! UART log output.
//!
//! Drains [`LOG_STREAM`](crate::LOG_STREAM) and writes formatted
//! entries to a UART TX pin. Requires an external USB-UART adapter
//! (CH340, CP2102, etc).
//!
//! Entry formatting is pure and host-testable; the drain itself only
//! exists on the espidf target and is serviced from the polling loop
//! between iterations.

use crate::logging::LogEntry;

#[cfg(target_os = "espidf")]
use crate::LOG_STREAM;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// UART configuration for logging.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: 17,
        }
    }
}

/// Format log entry to string.
///
/// Format: `[timestamp_us] LEVEL: message\n`
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };

    let _ = write!(
        writer,
        "[{:10}] {}: {}\n",
        entry.timestamp_us,
        entry.level.as_str(),
        core::str::from_utf8(&entry.msg[..entry.len as usize]).unwrap_or("<invalid utf8>")
    );

    writer.pos
}

/// Initialize UART1 TX-only for logging output.
#[cfg(target_os = "espidf")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartLoggerConfig,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config =
        uart::config::Config::default().baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// UART log consumer.
///
/// Drains [`LOG_STREAM`](crate::LOG_STREAM) into the UART whenever
/// the polling loop has a moment; reports dropped messages
/// periodically.
#[cfg(target_os = "espidf")]
pub struct UartLogDrain<'d> {
    uart: UartTxDriver<'d>,
    last_dropped_report: i64,
}

#[cfg(target_os = "espidf")]
impl<'d> UartLogDrain<'d> {
    pub fn new(uart: UartTxDriver<'d>) -> Self {
        Self {
            uart,
            last_dropped_report: 0,
        }
    }

    /// Drain all pending entries and report drops every 10 seconds.
    pub fn drain(&mut self, now_us: i64) {
        let mut format_buf = [0u8; 256];

        while let Some(entry) = LOG_STREAM.drain() {
            let len = format_log_entry(&entry, &mut format_buf);
            let _ = self.uart.write(&format_buf[..len]);
        }

        if now_us - self.last_dropped_report > 10_000_000 {
            let dropped = LOG_STREAM.dropped();
            if dropped > 0 {
                let len = crate::logging::format_to_buffer(
                    &mut format_buf,
                    format_args!("[WARN] Dropped log messages: {}\n", dropped),
                );
                let _ = self.uart.write(&format_buf[..len]);

                LOG_STREAM.reset_dropped();
            }

            self.last_dropped_report = now_us;
        }
    }
}
