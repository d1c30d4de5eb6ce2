//! Hardware adapter: bridges pins to the controller's port traits.
//!
//! Owns the driver-enable bank and the fan pins, exposing them through
//! [`DriverSensePort`] and [`FanOutputPort`].  The secondary fan header is
//! optional; boards without one pass `None`.

use embedded_hal::digital::InputPin;
use log::info;

use crate::app::ports::{DriverSensePort, FanOutputPort};
use crate::drivers::enable::EnablePinBank;
use crate::drivers::fan::FanPin;
use crate::sensors::DriverId;

pub struct HardwareAdapter<P, A, B> {
    enables: EnablePinBank<P>,
    primary: A,
    secondary: Option<B>,
}

impl<P, A, B> HardwareAdapter<P, A, B>
where
    P: InputPin,
    A: FanPin,
    B: FanPin,
{
    pub fn new(enables: EnablePinBank<P>, primary: A, secondary: Option<B>) -> Self {
        Self {
            enables,
            primary,
            secondary,
        }
    }

    /// Drive every fan output to `off_duty` before the first tick.
    pub fn setup(&mut self, off_duty: u8) {
        self.write_primary(off_duty);
        self.write_secondary(off_duty);
        info!(
            "controller fan pins ready ({} enable lines, secondary={})",
            self.enables.len(),
            self.secondary.is_some()
        );
    }

    pub fn primary(&self) -> &A {
        &self.primary
    }

    pub fn secondary(&self) -> Option<&B> {
        self.secondary.as_ref()
    }
}

impl<P: InputPin, A, B> DriverSensePort for HardwareAdapter<P, A, B> {
    fn is_enabled(&mut self, driver: DriverId) -> bool {
        self.enables.read(driver)
    }
}

impl<P, A: FanPin, B: FanPin> FanOutputPort for HardwareAdapter<P, A, B> {
    fn write_primary(&mut self, duty: u8) {
        self.primary.write(duty);
    }

    fn write_secondary(&mut self, duty: u8) {
        if let Some(fan) = self.secondary.as_mut() {
            fan.write(duty);
        }
    }
}
