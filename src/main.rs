//! TriggerFreq Firmware — Main Entry Point
//!
//! Counts rising edges on SIG_IN over a fixed window and drives an
//! H-bridge forward, reverse or off depending on which target frequency
//! the count falls near.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  SignalInput        HBridgeDriver      LogEventSink      │
//! │  (EdgeCounterPort)  (ActuatorPort)     (EventSink)       │
//! │  WindowDelay (DelayNs)                                   │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ──────────────        │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        FrequencyService (pure logic)           │      │
//! │  │  reset · arm · wait · disarm · classify        │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use triggerfreq::adapters::log_sink::LogEventSink;
use triggerfreq::adapters::signal_input::SignalInput;
use triggerfreq::adapters::time::MonotonicClock;
use triggerfreq::app::ports::ActuatorPort;
use triggerfreq::app::service::FrequencyService;
use triggerfreq::config::FrequencyConfig;
use triggerfreq::control::classifier::ActuatorState;
use triggerfreq::drivers::gpio_out::GpioOutput;
use triggerfreq::drivers::h_bridge::HBridgeDriver;
use triggerfreq::drivers::watchdog::{timeout_for_window, Watchdog};
use triggerfreq::drivers::window_delay::WindowDelay;
use triggerfreq::drivers::hw_init;
use triggerfreq::error::Error;
use triggerfreq::pins;

/// Seconds between "still alive" log lines.
const HEARTBEAT_SECS: u64 = 60;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  TriggerFreq v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripherals (outputs low = bridge disabled) ─────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without GPIO there is nothing to drive — halt and let the
        // watchdog (if already armed by the bootloader) reset us.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    hw_init::init_isr_service().map_err(Error::from)?;

    // ── 3. Configuration ──────────────────────────────────────
    // `TRIGGERFREQ_CONFIG` JSON baked in at build time, or the defaults.
    let config = FrequencyConfig::from_startup(option_env!("TRIGGERFREQ_CONFIG"));
    let mut service = FrequencyService::new(config);

    // ── 4. Adapters ───────────────────────────────────────────
    let mut input = SignalInput::new();
    let mut bridge = HBridgeDriver::new(
        GpioOutput::new(pins::ENA_OUT_GPIO),
        GpioOutput::new(pins::DIR_OUT_GPIO),
    );
    // Hold the bridge off through the driver until the first window decides.
    bridge.apply(ActuatorState::Disabled).map_err(Error::from)?;
    let mut delay = WindowDelay::new();
    let mut sink = LogEventSink::new();
    let watchdog = Watchdog::new(timeout_for_window(service.window_ms()));
    let clock = MonotonicClock::new();
    let mut next_heartbeat = HEARTBEAT_SECS;

    // ── 5. Sample-classify-actuate, forever ───────────────────
    service.start(&mut sink);
    service.run_forever(&mut input, &mut delay, &mut bridge, &mut sink, |report| {
        watchdog.feed();
        let up = clock.uptime_secs();
        if up >= next_heartbeat {
            info!(
                "alive | uptime={}s windows={} last={:?} ({} pulses)",
                up,
                report.index + 1,
                report.state,
                report.pulse_count
            );
            next_heartbeat = up + HEARTBEAT_SECS;
        }
    })
}
