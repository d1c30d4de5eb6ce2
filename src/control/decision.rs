//! Fan speed decision engine.
//!
//! Picks between idle and active speed from the time since the last motor
//! or heater activity, then applies the minimum-speed floor.

use crate::config::ControllerFanSettings;

/// Speed tier chosen for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanTier {
    /// Floor forced the fan off.
    Off,
    Idle,
    Active,
}

/// Outcome of one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Tier before the floor was applied.
    pub tier: FanTier,
    /// Speed after the floor (0–255).
    pub speed: u8,
}

/// Activity latch plus idle/active selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine {
    last_motor_on: Option<u64>,
}

impl DecisionEngine {
    pub const fn new() -> Self {
        Self {
            last_motor_on: None,
        }
    }

    /// Last tick (ms) at which a monitored motor or the bed was active.
    pub fn last_motor_on(&self) -> Option<u64> {
        self.last_motor_on
    }

    /// Evaluate one tick.
    pub fn decide(
        &mut self,
        now_ms: u64,
        active: bool,
        settings: &ControllerFanSettings,
        min_speed: u8,
    ) -> Decision {
        if active {
            self.last_motor_on = Some(now_ms);
        }

        let window_ms = u64::from(settings.duration_secs) * 1000;
        let within_window = settings.auto_mode
            && self
                .last_motor_on
                .is_some_and(|t| now_ms.saturating_sub(t) < window_ms);

        let (tier, target) = if within_window {
            (FanTier::Active, settings.active_speed)
        } else {
            (FanTier::Idle, settings.idle_speed)
        };

        let speed = apply_floor(target, min_speed);
        Decision {
            tier: if speed == 0 { FanTier::Off } else { tier },
            speed,
        }
    }
}

/// Speeds under the floor snap to zero; everything else passes through.
pub const fn apply_floor(speed: u8, min_speed: u8) -> u8 {
    if speed < min_speed { 0 } else { speed }
}
