//! In-memory thermal-manager state.
//!
//! Stands in for the temperature subsystem: the bed's soft-PWM amount, the
//! part fan speeds, the controller-fan soft-PWM slot, and the shared
//! fan-ratio table.  The firmware's real thermal manager would implement
//! [`ThermalPort`] over its own tables the same way.

use log::warn;

use crate::app::ports::ThermalPort;
use crate::pins::{EXTRUDER_FANS, FAN_RATIO_CHANNELS, FAN_RATIO_EXTRUDER};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThermalState {
    /// Heated-bed soft-PWM amount (0 = idle).
    pub bed_soft_pwm_amount: u8,
    /// Part/extruder fan speeds.
    pub fan_speed: [u8; EXTRUDER_FANS],
    /// Controller fan speed cycled by soft PWM.
    pub soft_pwm_controller_speed: u8,
    /// Shared fan-ratio table.
    pub fan_ratio: [u8; FAN_RATIO_CHANNELS],
}

impl ThermalPort for ThermalState {
    fn bed_soft_pwm_amount(&self) -> u8 {
        self.bed_soft_pwm_amount
    }

    fn extruder_fan_speed(&self) -> u8 {
        self.fan_speed[FAN_RATIO_EXTRUDER]
    }

    fn set_soft_pwm_controller_speed(&mut self, speed: u8) {
        self.soft_pwm_controller_speed = speed;
    }

    fn set_fan_ratio(&mut self, channel: usize, duty: u8) {
        match self.fan_ratio.get_mut(channel) {
            Some(slot) => *slot = duty,
            None => warn!("fan ratio channel {} out of range", channel),
        }
    }
}
