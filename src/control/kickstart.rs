//! Kickstart shaper.
//!
//! A fan starting from rest gets full kick power for a short window to break
//! static friction.  The window is only checked when the controller
//! evaluates, so it can run up to one poll interval longer than configured.
//!
//! ```text
//!   speed > off          now >= until
//!  Idle ────────▶ Boosting ─────────▶ Spent
//!   ▲                │                  │
//!   └──── speed == off ─────────────────┘
//! ```

use crate::config::KickstartConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickstartState {
    /// Fan is off; the next nonzero request opens a window.
    Idle,
    /// Boost in effect until the deadline (ms).
    Boosting { until_ms: u64 },
    /// Window elapsed while the fan kept running.
    Spent,
}

/// Window transition produced by a shaping step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickstartEdge {
    Opened { until_ms: u64 },
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shaped {
    pub speed: u8,
    pub edge: Option<KickstartEdge>,
}

#[derive(Debug, Clone, Copy)]
pub struct KickstartShaper {
    config: KickstartConfig,
    state: KickstartState,
}

impl KickstartShaper {
    pub const fn new(config: KickstartConfig) -> Self {
        Self {
            config,
            state: KickstartState::Idle,
        }
    }

    pub fn state(&self) -> KickstartState {
        self.state
    }

    /// Deadline of the open boost window, if any.
    pub fn deadline(&self) -> Option<u64> {
        match self.state {
            KickstartState::Boosting { until_ms } => Some(until_ms),
            _ => None,
        }
    }

    /// Shape the duty for this tick.  `off` is the duty that means "fan off".
    pub fn shape(&mut self, duty: u8, off: u8, now_ms: u64) -> Shaped {
        if !self.config.enabled() {
            return Shaped { speed: duty, edge: None };
        }

        if duty <= off {
            let edge = matches!(self.state, KickstartState::Boosting { .. })
                .then_some(KickstartEdge::Closed);
            self.state = KickstartState::Idle;
            return Shaped { speed: duty, edge };
        }

        match self.state {
            KickstartState::Idle => {
                let until_ms = now_ms + u64::from(self.config.time_ms);
                self.state = KickstartState::Boosting { until_ms };
                Shaped {
                    speed: self.config.power,
                    edge: Some(KickstartEdge::Opened { until_ms }),
                }
            }
            KickstartState::Boosting { until_ms } if now_ms < until_ms => Shaped {
                speed: self.config.power,
                edge: None,
            },
            KickstartState::Boosting { .. } => {
                self.state = KickstartState::Spent;
                Shaped {
                    speed: duty,
                    edge: Some(KickstartEdge::Closed),
                }
            }
            KickstartState::Spent => Shaped { speed: duty, edge: None },
        }
    }
}
