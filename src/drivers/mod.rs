//! embedded-hal backed pin drivers: fan outputs and driver-enable inputs.

pub mod enable;
pub mod fan;
