//! Controller cooling-fan regulator for a 3D-printer motion controller.
//!
//! Watches the stepper driver enable lines (and the heated bed), keeps the
//! electronics fan at active speed while anything was powered recently,
//! drops to idle speed afterwards, and optionally kickstarts the fan when
//! it spins up from rest.
//!
//! The pure logic lives in [`app`], [`control`], and [`sensors`]; pins and
//! subsystem state are reached through the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod gcode;
pub mod pins;
pub mod sensors;
