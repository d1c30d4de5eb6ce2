//! Output channel assignments for the controller fan.
//!
//! Single source of truth for the shared fan-ratio table layout and the
//! simulator's pin map.

// ---------------------------------------------------------------------------
// Fan-ratio table (owned by the thermal manager)
// ---------------------------------------------------------------------------

/// Number of entries in the shared fan-ratio table.
pub const FAN_RATIO_CHANNELS: usize = 3;
/// Mirrors part/extruder fan 0.
pub const FAN_RATIO_EXTRUDER: usize = 0;
/// Mirrors the controller-fan duty.
pub const FAN_RATIO_CONTROLLER: usize = 2;

/// Part/extruder fans tracked by the thermal manager.
pub const EXTRUDER_FANS: usize = 3;

// ---------------------------------------------------------------------------
// Driver enable polarity
// ---------------------------------------------------------------------------

/// Stepper drivers are enabled by pulling EN low (A4988, TMC22xx, DRV8825).
pub const DRIVER_ENABLE_ACTIVE_LOW: bool = true;
