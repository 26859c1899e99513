//! One-shot hardware peripheral initialization.
//!
//! Configures the signal input, the two H-bridge outputs and the GPIO ISR
//! service using raw ESP-IDF sys calls. Called once from `main()` before
//! the sampling loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    IsrInstallFailed(i32),
    IsrHandlerAddFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc)    => write!(f, "GPIO config failed (rc={})", rc),
            Self::IsrInstallFailed(rc)    => write!(f, "GPIO ISR service install failed (rc={})", rc),
            Self::IsrHandlerAddFailed(rc) => write!(f, "GPIO ISR handler add failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the sampling loop; single-threaded.
    unsafe {
        init_gpio_input()?;
        init_gpio_outputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Input ────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_input() -> Result<(), HwInitError> {
    // Interrupt type is set here but the interrupt stays disabled until the
    // first window arms it.
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::SIG_IN_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_POSEDGE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    unsafe { gpio_intr_disable(pins::SIG_IN_GPIO) };

    info!("hw_init: SIG_IN (GPIO{}) configured, rising edge", pins::SIG_IN_GPIO);
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [
        pins::ENA_OUT_GPIO,
        pins::DIR_OUT_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        // Boot with the bridge disabled, direction forward.
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: ENA/DIR outputs configured (low)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Signal interrupt gate ─────────────────────────────────────

/// Unmask the SIG_IN rising-edge interrupt.
#[cfg(target_os = "espidf")]
pub fn signal_intr_enable() {
    // SAFETY: register write on a pin configured in init_gpio_input().
    unsafe { gpio_intr_enable(pins::SIG_IN_GPIO); }
}

#[cfg(not(target_os = "espidf"))]
pub fn signal_intr_enable() {}

/// Mask the SIG_IN interrupt.  No handler invocation starts after return.
#[cfg(target_os = "espidf")]
pub fn signal_intr_disable() {
    // SAFETY: register write on a pin configured in init_gpio_input().
    unsafe { gpio_intr_disable(pins::SIG_IN_GPIO); }
}

#[cfg(not(target_os = "espidf"))]
pub fn signal_intr_disable() {}

// ── GPIO ISR Service ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
use crate::sensors::edge_counter::signal_isr_handler;

#[cfg(target_os = "espidf")]
unsafe extern "C" fn signal_gpio_isr(_arg: *mut core::ffi::c_void) {
    signal_isr_handler();
}

/// Install the per-pin GPIO ISR service and register the SIG_IN handler.
/// The interrupt is left masked; the sampling loop unmasks it per window.
#[cfg(target_os = "espidf")]
pub fn init_isr_service() -> Result<(), HwInitError> {
    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable). The registered handler
    // is a static function that only touches an atomic.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK && ret != ESP_ERR_INVALID_STATE {
            return Err(HwInitError::IsrInstallFailed(ret));
        }

        gpio_set_intr_type(pins::SIG_IN_GPIO, gpio_int_type_t_GPIO_INTR_POSEDGE);
        let ret = gpio_isr_handler_add(
            pins::SIG_IN_GPIO,
            Some(signal_gpio_isr),
            core::ptr::null_mut(),
        );
        if ret != ESP_OK {
            return Err(HwInitError::IsrHandlerAddFailed(ret));
        }
        gpio_intr_disable(pins::SIG_IN_GPIO);

        info!("hw_init: ISR service installed (SIG_IN, masked)");
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}
