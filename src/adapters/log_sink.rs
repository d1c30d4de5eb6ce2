//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each [`FanEvent`] as one log line.

use log::info;

use crate::app::events::FanEvent;
use crate::app::ports::EventSink;
use crate::gcode;

/// Adapter that logs every [`FanEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &FanEvent) {
        match event {
            FanEvent::Started(s) => {
                info!("FAN | start | {}", gcode::format_report(s));
            }
            FanEvent::SpeedChanged { from, to, tier } => {
                info!("FAN | speed {} -> {} ({:?})", from, to, tier);
            }
            FanEvent::KickstartOpened { until_ms } => {
                info!("FAN | kickstart until {}ms", until_ms);
            }
            FanEvent::KickstartClosed => {
                info!("FAN | kickstart done");
            }
            FanEvent::SettingsChanged(s) => {
                info!("FAN | settings | {}", gcode::format_report(s));
            }
            FanEvent::Report(s) => {
                info!("{}", gcode::format_report(s));
            }
        }
    }
}
