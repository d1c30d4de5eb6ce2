//! Controller-fan service: the hexagonal core.
//!
//! [`ControllerFanService`] owns the settings and all controller state.
//! One call to [`update`](ControllerFanService::update) is one poll of the
//! main loop; the real work is gated to once per poll interval.
//!
//! ```text
//!  DriverSensePort ─┐
//!  ThermalPort ─────┼─▶ Sampler ─▶ Decision ─▶ PWM range ─▶ Kickstart ─┐
//!                   │                                                  │
//!  FanOutputPort ◀──┴──────────────── output routing ◀─────────────────┘
//! ```

use log::{debug, info};

use crate::config::{ControllerFanConfig, ControllerFanSettings};
use crate::control::decision::{DecisionEngine, FanTier};
use crate::control::kickstart::{KickstartEdge, KickstartShaper};
use crate::control::pwm;
use crate::error::ConfigError;
use crate::pins::{FAN_RATIO_CONTROLLER, FAN_RATIO_EXTRUDER};
use crate::sensors::MotorSampler;

use super::commands::FanCommand;
use super::events::FanEvent;
use super::ports::{ClockPort, DriverSensePort, EventSink, FanOutputPort, ThermalPort};

// ───────────────────────────────────────────────────────────────
// ControllerFanService
// ───────────────────────────────────────────────────────────────

pub struct ControllerFanService {
    config: ControllerFanConfig,
    settings: ControllerFanSettings,
    sampler: MotorSampler,
    engine: DecisionEngine,
    kickstart: KickstartShaper,
    /// Next tick (ms) at which evaluation is allowed.
    next_check_due: u64,
    /// Last duty written to the outputs.
    speed: u8,
    tier: FanTier,
}

impl ControllerFanService {
    /// Validate the profile and build a service with zeroed state.  The
    /// first `update` evaluates immediately.
    pub fn new(
        config: ControllerFanConfig,
        settings: ControllerFanSettings,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sampler: MotorSampler::new(&config),
            kickstart: KickstartShaper::new(config.kickstart),
            engine: DecisionEngine::new(),
            config,
            settings,
            next_check_due: 0,
            speed: 0,
            tier: FanTier::Off,
        })
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&FanEvent::Started(self.settings));
        info!(
            "controller fan started: {} drivers monitored, poll {} ms",
            self.config.drivers.len(),
            self.config.poll_interval_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one poll.  Returns `true` if the gate was open and the fan was
    /// re-evaluated.
    pub fn update(
        &mut self,
        clock: &impl ClockPort,
        hw: &mut (impl DriverSensePort + FanOutputPort),
        thermal: &mut impl ThermalPort,
        sink: &mut impl EventSink,
    ) -> bool {
        let now = clock.now_ms();
        if now < self.next_check_due {
            return false;
        }
        self.next_check_due = now + u64::from(self.config.poll_interval_ms);

        // 1. Sample drivers and bed heater
        let sample = self.sampler.sample(&self.config.drivers, hw, &*thermal);

        // 2. Idle/active selection and floor
        let decision = self
            .engine
            .decide(now, sample.any_active(), &self.settings, self.config.min_speed);

        // 3. Output duty range, then kickstart override
        let duty = pwm::scale(decision.speed, &self.config.pwm);
        let shaped = self.kickstart.shape(duty, self.config.pwm.off, now);
        match shaped.edge {
            Some(KickstartEdge::Opened { until_ms }) => {
                sink.emit(&FanEvent::KickstartOpened { until_ms });
            }
            Some(KickstartEdge::Closed) => sink.emit(&FanEvent::KickstartClosed),
            None => {}
        }

        debug!(
            "controller fan tick @{}ms: motors={} heater={} tier={:?} duty={}",
            now, sample.motors_active, sample.heater_active, decision.tier, shaped.speed
        );

        // 4. Outputs
        self.apply_outputs(shaped.speed, hw, thermal);

        if shaped.speed != self.speed {
            sink.emit(&FanEvent::SpeedChanged {
                from: self.speed,
                to: shaped.speed,
                tier: decision.tier,
            });
        }
        self.speed = shaped.speed;
        self.tier = decision.tier;
        true
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(&mut self, cmd: FanCommand, sink: &mut impl EventSink) {
        match cmd {
            FanCommand::Update(update) => {
                update.apply(&mut self.settings);
                sink.emit(&FanEvent::SettingsChanged(self.settings));
                info!("controller fan settings updated: {:?}", self.settings);
            }
            FanCommand::Report => sink.emit(&FanEvent::Report(self.settings)),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Last duty written to the fan outputs.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Tier chosen at the last evaluation.
    pub fn tier(&self) -> FanTier {
        self.tier
    }

    pub fn last_motor_on(&self) -> Option<u64> {
        self.engine.last_motor_on()
    }

    pub fn next_check_due(&self) -> u64 {
        self.next_check_due
    }

    /// Deadline of an open kickstart window.
    pub fn kickstart_deadline(&self) -> Option<u64> {
        self.kickstart.deadline()
    }

    pub fn settings(&self) -> &ControllerFanSettings {
        &self.settings
    }

    pub fn config(&self) -> &ControllerFanConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_outputs(
        &self,
        duty: u8,
        hw: &mut impl FanOutputPort,
        thermal: &mut impl ThermalPort,
    ) {
        if self.config.soft_pwm {
            thermal.set_soft_pwm_controller_speed(duty);
        } else {
            hw.write_primary(duty);
            hw.write_secondary(duty);
        }

        let extruder = thermal.extruder_fan_speed();
        thermal.set_fan_ratio(FAN_RATIO_EXTRUDER, extruder);
        thermal.set_fan_ratio(FAN_RATIO_CONTROLLER, duty);
    }
}
