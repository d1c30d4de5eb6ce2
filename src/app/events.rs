//! Outbound controller-fan events.
//!
//! Emitted through the [`EventSink`](super::ports::EventSink) port.  The
//! log adapter prints them; a host bridge could forward them.

use crate::config::ControllerFanSettings;
use crate::control::decision::FanTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FanEvent {
    /// The service was constructed and is ready for its first tick.
    Started(ControllerFanSettings),

    /// The output duty changed.
    SpeedChanged { from: u8, to: u8, tier: FanTier },

    /// A kickstart boost window opened.
    KickstartOpened { until_ms: u64 },

    /// The kickstart boost ended (expired or fan switched off).
    KickstartClosed,

    /// Runtime settings were modified.
    SettingsChanged(ControllerFanSettings),

    /// Current settings, in answer to a report request.
    Report(ControllerFanSettings),
}
