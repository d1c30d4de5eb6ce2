//! Application core: controller-fan logic, zero I/O.
//!
//! [`service::ControllerFanService`] runs the sampler, decision engine,
//! kickstart shaper, and output routing once per poll.  Everything outside
//! goes through the **port traits** in [`ports`], so the whole pipeline is
//! testable with mock adapters and a synthetic clock.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
