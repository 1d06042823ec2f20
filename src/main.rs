//! RustMorseTranslator - Firmware entry point
//!
//! Owns the peripherals and the polling loop:
//! 1. Configure button GPIOs (input, pull-up, active low)
//! 2. Configure LEDC PWM for the buzzer
//! 3. Poll both buttons, tick the controller, apply updates
//! 4. Drain the log stream to UART between iterations
//!
//! Everything here is I/O; the decision logic lives in the library
//! and never touches the hardware directly.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use esp_idf_svc::sys;

    use rust_morse_translator::hal::{ButtonConfig, BuzzerConfig, DisplaySink, ToneSink};
    use rust_morse_translator::uart_logger::{self, UartLogDrain, UartLoggerConfig};
    use rust_morse_translator::{
        rt_info, rt_warn, ButtonState, FaultState, InputController, Symbol, TimingConfig,
        CODE_CAPACITY, LOG_STREAM,
    };

    // PWM duty for the active tone, out of 256 (8-bit resolution).
    const TONE_DUTY: u32 = 180;

    static FAULT_STATE: FaultState = FaultState::new();

    /// Monotonic timestamp in microseconds.
    fn now_us() -> i64 {
        unsafe { sys::esp_timer_get_time() }
    }

    /// Monotonic timestamp in milliseconds, wrapping.
    fn now_ms() -> u32 {
        (now_us() / 1000) as u32
    }

    /// Buzzer on LEDC channel 0 / timer 0.
    struct PwmBuzzer;

    impl PwmBuzzer {
        fn init(config: &BuzzerConfig) -> Self {
            unsafe {
                let timer_cfg = sys::ledc_timer_config_t {
                    speed_mode: sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    duty_resolution: sys::ledc_timer_bit_t_LEDC_TIMER_8_BIT,
                    timer_num: sys::ledc_timer_t_LEDC_TIMER_0,
                    freq_hz: config.freq_hz,
                    ..Default::default()
                };
                sys::ledc_timer_config(&timer_cfg);

                let channel_cfg = sys::ledc_channel_config_t {
                    gpio_num: config.pin,
                    speed_mode: sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    channel: sys::ledc_channel_t_LEDC_CHANNEL_0,
                    timer_sel: sys::ledc_timer_t_LEDC_TIMER_0,
                    duty: 0,
                    ..Default::default()
                };
                sys::ledc_channel_config(&channel_cfg);
            }
            Self
        }

        fn set_duty(&mut self, duty: u32) {
            unsafe {
                sys::ledc_set_duty(
                    sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    sys::ledc_channel_t_LEDC_CHANNEL_0,
                    duty,
                );
                sys::ledc_update_duty(
                    sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    sys::ledc_channel_t_LEDC_CHANNEL_0,
                );
            }
        }
    }

    impl ToneSink for PwmBuzzer {
        fn tone_on(&mut self) {
            self.set_duty(TONE_DUTY);
        }

        fn tone_off(&mut self) {
            self.set_duty(0);
        }
    }

    /// Render requests go to the log stream; the UART drain carries
    /// them to whatever is watching the serial line.
    struct LogDisplay;

    impl DisplaySink for LogDisplay {
        fn show_code(&mut self, code: &[Symbol]) {
            let mut buf = [0u8; CODE_CAPACITY];
            for (slot, symbol) in buf.iter_mut().zip(code.iter()) {
                *slot = symbol.as_char() as u8;
            }
            let text = core::str::from_utf8(&buf[..code.len()]).unwrap_or("");
            rt_info!(LOG_STREAM, now_us(), "code: {}", text);
        }

        fn show_phrase(&mut self, phrase: &str) {
            rt_info!(LOG_STREAM, now_us(), "phrase: {}", phrase);
        }
    }

    /// Configure one button pin: input, pull-up enabled.
    unsafe fn init_button_pin(pin: i32) {
        sys::gpio_reset_pin(pin);
        sys::gpio_set_direction(pin, sys::gpio_mode_t_GPIO_MODE_INPUT);
        sys::gpio_pullup_en(pin);
    }

    /// Read one button, honoring active-low wiring.
    fn button_pressed(pin: i32, active_low: bool) -> bool {
        let level = unsafe { sys::gpio_get_level(pin) };
        if active_low {
            level == 0
        } else {
            level != 0
        }
    }

    #[no_mangle]
    fn main() {
        // Initialize ESP-IDF
        sys::link_patches();

        let buttons = ButtonConfig::default();
        let buzzer_cfg = BuzzerConfig::default();
        let timing = TimingConfig::default();

        unsafe {
            init_button_pin(buttons.entry_pin);
            init_button_pin(buttons.commit_pin);
        }

        let mut buzzer = PwmBuzzer::init(&buzzer_cfg);
        let mut display = LogDisplay;

        let mut log_drain = esp_idf_svc::hal::peripherals::Peripherals::take()
            .ok()
            .and_then(|p| {
                uart_logger::init_uart_logger(p.uart1, p.pins.gpio17, &UartLoggerConfig::default())
                    .ok()
            })
            .map(UartLogDrain::new);

        let mut controller = InputController::new(timing, &FAULT_STATE);

        rt_info!(
            LOG_STREAM,
            now_us(),
            "{} ready: entry button keys dots/dashes, commit button prints",
            env!("VERSION_STRING")
        );

        loop {
            let snapshot = ButtonState::from_pressed(
                button_pressed(buttons.entry_pin, buttons.active_low),
                button_pressed(buttons.commit_pin, buttons.active_low),
            );

            controller.poll(now_ms(), snapshot, &mut buzzer, &mut display);

            if FAULT_STATE.is_active() {
                let snap = FAULT_STATE.snapshot();
                rt_warn!(
                    LOG_STREAM,
                    now_us(),
                    "input dropped: {:?} (data={}, total={})",
                    snap.code,
                    snap.data,
                    snap.count
                );
                FAULT_STATE.clear();
            }

            if let Some(drain) = log_drain.as_mut() {
                drain.drain(now_us());
            }

            // One FreeRTOS tick is 10ms at the default 100Hz tick rate.
            unsafe {
                sys::vTaskDelay(timing.poll_interval_ms / 10);
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {}
