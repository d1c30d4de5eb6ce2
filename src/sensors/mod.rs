//! Sensing side of the controller fan.
//!
//! [`DriverId`] names a stepper driver whose enable line can be sampled.
//! [`MotorSampler`] folds the enable lines and the bed heater into a single
//! [`Sample`] each evaluation tick.

pub mod sampler;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use sampler::{MotorSampler, Sample};

/// A stepper driver with an enable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverId {
    X,
    Y,
    Z,
    X2,
    Y2,
    Z2,
    Z3,
    Z4,
    /// Extruder driver by index.
    E(u8),
}

impl DriverId {
    /// Z and its duplicate drivers.
    pub const fn is_z(self) -> bool {
        matches!(self, Self::Z | Self::Z2 | Self::Z3 | Self::Z4)
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
            Self::X2 => write!(f, "X2"),
            Self::Y2 => write!(f, "Y2"),
            Self::Z2 => write!(f, "Z2"),
            Self::Z3 => write!(f, "Z3"),
            Self::Z4 => write!(f, "Z4"),
            Self::E(n) => write!(f, "E{}", n),
        }
    }
}
