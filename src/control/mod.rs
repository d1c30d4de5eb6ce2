//! Speed shaping pipeline: decision → floor → PWM range → kickstart.

pub mod decision;
pub mod kickstart;
pub mod pwm;
