//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ FrequencyService (domain)
//! ```
//!
//! Driven adapters (signal input, H-bridge, event sinks) implement these
//! traits.  The [`FrequencyService`](super::service::FrequencyService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.  The window wait goes through `embedded_hal::delay::DelayNs`
//! rather than a port of its own.

use crate::control::classifier::ActuatorState;
use crate::error::ActuatorError;

// ───────────────────────────────────────────────────────────────
// Edge counter port (driven adapter: signal input → domain)
// ───────────────────────────────────────────────────────────────

/// Lifecycle control over the rising-edge counter.
///
/// The caller guarantees the order reset → arm → (wait) → disarm →
/// snapshot; `reset` and `snapshot` are only called while disarmed.
pub trait EdgeCounterPort {
    /// Zero the pulse count.
    fn reset(&mut self);

    /// Begin counting rising edges.
    fn arm(&mut self);

    /// Stop counting.  After return, no further edge is counted.
    fn disarm(&mut self);

    /// Count accumulated since the last reset.
    fn snapshot(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → H-bridge)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain commands the ENA/DIR outputs through this.
pub trait ActuatorPort {
    /// Drive the outputs for `state`.  `Disabled` only clears ENA.
    fn apply(&mut self, state: ActuatorState) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
