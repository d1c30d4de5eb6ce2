//! Motor / heater activity sampler.

use crate::app::ports::{DriverSensePort, ThermalPort};
use crate::config::ControllerFanConfig;

use super::DriverId;

/// Activity observed during one evaluation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    /// At least one monitored, non-excluded driver is enabled.
    pub motors_active: bool,
    /// The heated bed is currently being driven.
    pub heater_active: bool,
}

impl Sample {
    /// Anything that should hold the fan at active speed.
    pub const fn any_active(&self) -> bool {
        self.motors_active || self.heater_active
    }
}

/// Reads driver-enable lines and the bed heater according to the profile's
/// exclusion rules.  Read-only.
#[derive(Debug, Clone, Copy)]
pub struct MotorSampler {
    ignore_z: bool,
    z_only: bool,
    has_heated_bed: bool,
}

impl MotorSampler {
    pub fn new(config: &ControllerFanConfig) -> Self {
        Self {
            ignore_z: config.ignore_z,
            z_only: config.z_only,
            has_heated_bed: config.has_heated_bed,
        }
    }

    /// Whether a driver participates in the activity check.
    pub fn monitors(&self, driver: DriverId) -> bool {
        if driver.is_z() {
            !self.ignore_z
        } else {
            !self.z_only
        }
    }

    pub fn sample(
        &self,
        drivers: &[DriverId],
        sense: &mut impl DriverSensePort,
        thermal: &impl ThermalPort,
    ) -> Sample {
        // Short-circuits like the hardware check: later lines are not read
        // once one enabled driver is found.
        let motors_active = drivers
            .iter()
            .copied()
            .filter(|d| self.monitors(*d))
            .any(|d| sense.is_enabled(d));

        let heater_active = self.has_heated_bed && thermal.bed_soft_pwm_amount() > 0;

        Sample {
            motors_active,
            heater_active,
        }
    }
}
