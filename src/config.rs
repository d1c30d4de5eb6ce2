//! Controller-fan configuration.
//!
//! Two layers:
//!
//! - [`ControllerFanSettings`]: the runtime-editable knobs (`M710`).
//! - [`ControllerFanConfig`]: the board profile (which drivers exist, the
//!   speed floor, kickstart shaping, PWM range).  Fixed for the lifetime of
//!   the service.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sensors::DriverId;

/// Upper bound on monitored stepper drivers (X, Y, Z, X2, Y2, Z2–Z4, E0–E7).
pub const MAX_DRIVERS: usize = 16;

/// Fixed-capacity set of monitored drivers.
pub type DriverSet = heapless::Vec<DriverId, MAX_DRIVERS>;

/// Runtime-editable fan behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerFanSettings {
    /// Run at `active_speed` while motors were on within `duration_secs`.
    pub auto_mode: bool,
    /// Seconds the fan keeps active speed after the last motor activity.
    pub duration_secs: u16,
    /// Speed while motors are (recently) active.
    pub active_speed: u8,
    /// Speed once the system has been idle for `duration_secs`.
    pub idle_speed: u8,
}

impl Default for ControllerFanSettings {
    fn default() -> Self {
        Self {
            auto_mode: true,
            duration_secs: 60,
            active_speed: 255,
            idle_speed: 0,
        }
    }
}

/// Startup boost applied when the fan spins up from rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickstartConfig {
    /// Boost window in milliseconds.  `0` disables kickstart.
    pub time_ms: u32,
    /// Raw duty written for the duration of the boost.
    pub power: u8,
}

impl KickstartConfig {
    pub const fn enabled(&self) -> bool {
        self.time_ms > 0
    }
}

impl Default for KickstartConfig {
    fn default() -> Self {
        Self {
            time_ms: 0,
            power: 180,
        }
    }
}

/// Duty range of the physical fan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmRange {
    /// Duty written when the fan is off.
    pub off: u8,
    /// Duty that speed `1` maps onto.
    pub min: u8,
    /// Duty that speed `255` maps onto.
    pub max: u8,
}

impl PwmRange {
    pub const FULL: Self = Self {
        off: 0,
        min: 0,
        max: 255,
    };
}

impl Default for PwmRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Board profile for the controller fan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerFanConfig {
    /// Any computed speed below this snaps to off.
    pub min_speed: u8,
    /// Evaluation gate (ms).  Stock firmware uses 2500.
    pub poll_interval_ms: u32,
    pub kickstart: KickstartConfig,
    pub pwm: PwmRange,
    /// Exclude Z drivers from the activity check.
    pub ignore_z: bool,
    /// Only Z drivers count as activity.
    pub z_only: bool,
    /// A heated bed exists and keeps the fan running while heating.
    pub has_heated_bed: bool,
    /// Publish the speed to the thermal manager's soft-PWM slot instead of
    /// writing the fan pins directly.
    pub soft_pwm: bool,
    /// Drivers whose enable line is sampled.
    pub drivers: DriverSet,
}

impl Default for ControllerFanConfig {
    fn default() -> Self {
        let mut drivers = DriverSet::new();
        for d in [DriverId::X, DriverId::Y, DriverId::Z, DriverId::E(0)] {
            // Capacity is far above four entries.
            let _ = drivers.push(d);
        }
        Self {
            min_speed: 0,
            poll_interval_ms: 2500,
            kickstart: KickstartConfig::default(),
            pwm: PwmRange::default(),
            ignore_z: false,
            z_only: false,
            has_heated_bed: true,
            soft_pwm: false,
            drivers,
        }
    }
}

impl ControllerFanConfig {
    /// Reject profiles the control loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.pwm.min > self.pwm.max {
            return Err(ConfigError::InvertedPwmRange {
                min: self.pwm.min,
                max: self.pwm.max,
            });
        }
        if self.kickstart.enabled() && self.kickstart.power == 0 {
            return Err(ConfigError::ZeroKickstartPower);
        }
        for (i, d) in self.drivers.iter().enumerate() {
            if self.drivers[..i].contains(d) {
                return Err(ConfigError::DuplicateDriver(*d));
            }
        }
        Ok(())
    }
}
