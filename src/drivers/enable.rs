//! Stepper driver enable-line bank.
//!
//! Reads back each driver's EN pin.  Most stepper drivers are enabled by
//! pulling EN low; the polarity is per bank.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::config::MAX_DRIVERS;
use crate::sensors::DriverId;

pub struct EnablePinBank<P> {
    pins: heapless::Vec<(DriverId, P), MAX_DRIVERS>,
    active_low: bool,
}

impl<P: InputPin> EnablePinBank<P> {
    pub fn new(active_low: bool) -> Self {
        Self {
            pins: heapless::Vec::new(),
            active_low,
        }
    }

    /// Attach the EN line of `driver`.  Hands the pin back if the bank is
    /// full.
    pub fn attach(&mut self, driver: DriverId, pin: P) -> Result<(), P> {
        self.pins.push((driver, pin)).map_err(|(_, pin)| pin)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// `true` if `driver` has an EN line here and it reads as enabled.
    /// Unattached drivers and read failures count as disabled.
    pub fn read(&mut self, driver: DriverId) -> bool {
        let Some((_, pin)) = self.pins.iter_mut().find(|(d, _)| *d == driver) else {
            return false;
        };
        let level = if self.active_low { pin.is_low() } else { pin.is_high() };
        level.unwrap_or_else(|e| {
            warn!("enable line {} read failed: {:?}", driver, e);
            false
        })
    }
}
