//! Controller-fan pin drivers.
//!
//! A fan header is either PWM-capable ([`PwmFan`]) or a plain switched
//! output ([`SwitchedFan`]).  Both implement [`FanPin`] so the hardware
//! adapter does not care which one a board provides.
//!
//! Pin errors are logged and swallowed.  The fan is not worth stopping the
//! control loop for.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

/// A fan output accepting an 8-bit duty.
pub trait FanPin {
    fn write(&mut self, duty: u8);

    /// Last duty successfully requested.
    fn duty(&self) -> u8;
}

// ── PWM ───────────────────────────────────────────────────────

pub struct PwmFan<P> {
    pin: P,
    duty: u8,
}

impl<P: SetDutyCycle> PwmFan<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, duty: 0 }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: SetDutyCycle> FanPin for PwmFan<P> {
    fn write(&mut self, duty: u8) {
        match self.pin.set_duty_cycle_fraction(u16::from(duty), 255) {
            Ok(()) => self.duty = duty,
            Err(e) => warn!("fan PWM write ({}) failed: {:?}", duty, e),
        }
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}

// ── Switched ──────────────────────────────────────────────────

/// On/off fan: any nonzero duty drives the pin high.
pub struct SwitchedFan<O> {
    pin: O,
    on: bool,
}

impl<O: OutputPin> SwitchedFan<O> {
    pub fn new(pin: O) -> Self {
        Self { pin, on: false }
    }

    pub fn release(self) -> O {
        self.pin
    }
}

impl<O: OutputPin> FanPin for SwitchedFan<O> {
    fn write(&mut self, duty: u8) {
        let on = duty > 0;
        let res = if on { self.pin.set_high() } else { self.pin.set_low() };
        match res {
            Ok(()) => self.on = on,
            Err(e) => warn!("fan GPIO write ({}) failed: {:?}", on, e),
        }
    }

    fn duty(&self) -> u8 {
        if self.on { 255 } else { 0 }
    }
}
