//! Port traits: the boundary between the fan controller and the rest of
//! the firmware.
//!
//! ```text
//!   DriverSensePort ──▶ ┌──────────────────────┐ ──▶ FanOutputPort
//!   ThermalPort     ──▶ │ ControllerFanService │ ──▶ ThermalPort (slots)
//!   ClockPort       ──▶ └──────────────────────┘ ──▶ EventSink
//! ```
//!
//! None of these operations can fail from the controller's point of view.
//! Adapters that sit on fallible hardware log and swallow the error.

use crate::sensors::DriverId;

// ───────────────────────────────────────────────────────────────
// Sensing (hardware → controller)
// ───────────────────────────────────────────────────────────────

/// Driver-enable reads.
pub trait DriverSensePort {
    /// `true` while the driver's power stage is enabled.
    fn is_enabled(&mut self, driver: DriverId) -> bool;
}

/// Monotonic millisecond clock.
pub trait ClockPort {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Temperature subsystem (read + shared slots)
// ───────────────────────────────────────────────────────────────

/// The thermal manager's view as seen by the controller fan.
pub trait ThermalPort {
    /// Current heated-bed soft-PWM amount (0 = not heating).
    fn bed_soft_pwm_amount(&self) -> u8;

    /// Speed of part/extruder fan 0, mirrored into fan-ratio channel 0.
    fn extruder_fan_speed(&self) -> u8;

    /// Soft-PWM slot the thermal manager cycles the controller fan from.
    fn set_soft_pwm_controller_speed(&mut self, speed: u8);

    /// Write one entry of the shared fan-ratio table.
    fn set_fan_ratio(&mut self, channel: usize, duty: u8);
}

// ───────────────────────────────────────────────────────────────
// Fan outputs (controller → hardware)
// ───────────────────────────────────────────────────────────────

/// Physical fan pin writes.  Each pin decides whether it is PWM-capable.
pub trait FanOutputPort {
    /// Primary controller-fan pin.
    fn write_primary(&mut self, duty: u8);

    /// Secondary pin.  Absent pins ignore the write.
    fn write_secondary(&mut self, duty: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink (controller → logging / telemetry)
// ───────────────────────────────────────────────────────────────

pub trait EventSink {
    fn emit(&mut self, event: &super::events::FanEvent);
}
