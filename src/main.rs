//! Controller-fan host simulator.
//!
//! Drives the real [`ControllerFanService`] with simulated pins and a
//! manual clock through a scripted print: homing, a bed heat-up, a print,
//! a settings change, and a long idle.
//!
//! ```text
//! ctrlfan-sim [profile.json]
//! RUST_LOG=debug ctrlfan-sim      # per-tick decisions
//! ```

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use anyhow::{Context, Result};
use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};
use log::info;

use ctrlfan::adapters::hardware::HardwareAdapter;
use ctrlfan::adapters::log_sink::LogEventSink;
use ctrlfan::adapters::thermal::ThermalState;
use ctrlfan::adapters::time::ManualClock;
use ctrlfan::app::service::ControllerFanService;
use ctrlfan::config::{ControllerFanConfig, ControllerFanSettings};
use ctrlfan::drivers::enable::EnablePinBank;
use ctrlfan::drivers::fan::{FanPin, PwmFan};
use ctrlfan::error::Error;
use ctrlfan::gcode;
use ctrlfan::pins::DRIVER_ENABLE_ACTIVE_LOW;

// ── Simulated pins ────────────────────────────────────────────

/// EN line whose level is shared with the script.
struct SimEnable(Rc<Cell<bool>>);

impl DigitalErrorType for SimEnable {
    type Error = Infallible;
}

impl InputPin for SimEnable {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

/// 8-bit PWM channel.
struct SimPwm;

impl PwmErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Infallible> {
        Ok(())
    }
}

// ── Script ────────────────────────────────────────────────────

enum Step {
    Motors(bool),
    Bed(u8),
    Gcode(&'static str),
}

const SCRIPT: &[(u64, Step)] = &[
    (1_000, Step::Motors(true)),
    (12_000, Step::Bed(200)),
    (15_000, Step::Motors(false)),
    (90_000, Step::Bed(0)),
    (95_000, Step::Gcode("M710 I80 D30")),
    (96_000, Step::Gcode("M710")),
    (200_000, Step::Motors(true)),
    (205_000, Step::Motors(false)),
];

const SIM_END_MS: u64 = 300_000;
const LOOP_STEP_MS: u64 = 500;

fn load_profile() -> Result<ControllerFanConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading profile {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing profile {path}"))
        }
        None => Ok(ControllerFanConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_profile()?;
    let off_duty = config.pwm.off;

    // Every monitored driver shares one simulated EN level, starting disabled.
    let motors = Rc::new(Cell::new(DRIVER_ENABLE_ACTIVE_LOW));
    let mut enables = EnablePinBank::new(DRIVER_ENABLE_ACTIVE_LOW);
    for driver in &config.drivers {
        if enables.attach(*driver, SimEnable(motors.clone())).is_err() {
            anyhow::bail!("too many drivers in profile");
        }
    }

    let mut hw = HardwareAdapter::new(enables, PwmFan::new(SimPwm), Some(PwmFan::new(SimPwm)));
    hw.setup(off_duty);

    let mut service = ControllerFanService::new(config, ControllerFanSettings::default())
        .map_err(Error::from)?;
    let clock = ManualClock::new();
    let mut thermal = ThermalState::default();
    let mut sink = LogEventSink::new();
    service.start(&mut sink);

    let mut script = SCRIPT.iter().peekable();
    let mut now = 0;
    while now <= SIM_END_MS {
        clock.set(now);
        while let Some((_, step)) = script.next_if(|(at, _)| *at <= now) {
            match step {
                Step::Motors(on) => {
                    info!("SIM | @{}ms motors {}", now, if *on { "on" } else { "off" });
                    motors.set(*on != DRIVER_ENABLE_ACTIVE_LOW);
                }
                Step::Bed(amount) => {
                    info!("SIM | @{}ms bed soft-PWM {}", now, amount);
                    thermal.bed_soft_pwm_amount = *amount;
                }
                Step::Gcode(line) => {
                    info!("SIM | @{}ms > {}", now, line);
                    let cmd = gcode::parse_m710(line).map_err(Error::from)?;
                    service.handle_command(cmd, &mut sink);
                }
            }
        }
        service.update(&clock, &mut hw, &mut thermal, &mut sink);
        now += LOOP_STEP_MS;
    }

    info!(
        "SIM | done: fan duty {} (pin {}), ratio table {:?}",
        service.speed(),
        hw.primary().duty(),
        thermal.fan_ratio
    );
    Ok(())
}
