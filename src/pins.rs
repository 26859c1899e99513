//! GPIO pin assignments for the TriggerFreq board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Signal input
// ---------------------------------------------------------------------------

/// Conditioned audio pulse train.  Rising edges are counted by the ISR.
pub const SIG_IN_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// H-bridge control outputs
// ---------------------------------------------------------------------------

/// Digital output: HIGH = bridge enabled.
pub const ENA_OUT_GPIO: i32 = 3;
/// Digital output: LOW = forward, HIGH = reverse.
pub const DIR_OUT_GPIO: i32 = 4;
