//! Inbound commands to the controller-fan service.
//!
//! Produced by the G-code front end ([`crate::gcode`]) or any host bridge,
//! and interpreted by [`ControllerFanService`](super::service::ControllerFanService).

use crate::config::ControllerFanSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanCommand {
    /// Modify the runtime settings.
    Update(SettingsUpdate),
    /// Emit the current settings.
    Report,
}

/// Partial settings change.  `reset` is applied before the individual
/// fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub reset: bool,
    pub active_speed: Option<u8>,
    pub idle_speed: Option<u8>,
    pub auto_mode: Option<bool>,
    pub duration_secs: Option<u16>,
}

impl SettingsUpdate {
    /// Nothing would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, settings: &mut ControllerFanSettings) {
        if self.reset {
            *settings = ControllerFanSettings::default();
        }
        if let Some(v) = self.active_speed {
            settings.active_speed = v;
        }
        if let Some(v) = self.idle_speed {
            settings.idle_speed = v;
        }
        if let Some(v) = self.auto_mode {
            settings.auto_mode = v;
        }
        if let Some(v) = self.duration_secs {
            settings.duration_secs = v;
        }
    }
}
