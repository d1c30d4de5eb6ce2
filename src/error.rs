//! Error types for the controller-fan crate.
//!
//! The polling tick itself is infallible.  Errors only arise at the edges:
//! loading a board profile and parsing `M710` commands.  All variants are
//! `Copy` so they can be returned from the command path without allocation.

use core::fmt;

use crate::sensors::DriverId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The board profile is unusable.
    Config(ConfigError),
    /// A G-code command could not be parsed.
    Gcode(GcodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Gcode(e) => write!(f, "gcode: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Profile validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The evaluation gate must advance time.
    ZeroPollInterval,
    /// `pwm.min` is above `pwm.max`.
    InvertedPwmRange { min: u8, max: u8 },
    /// Kickstart has a window but no power.
    ZeroKickstartPower,
    /// The same driver is listed twice.
    DuplicateDriver(DriverId),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPollInterval => write!(f, "poll interval must be nonzero"),
            Self::InvertedPwmRange { min, max } => {
                write!(f, "pwm min {} above max {}", min, max)
            }
            Self::ZeroKickstartPower => write!(f, "kickstart enabled with zero power"),
            Self::DuplicateDriver(d) => write!(f, "driver {} listed twice", d),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// G-code parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcodeError {
    /// Line does not start with the expected command word.
    UnknownCommand,
    /// Parameter letter is not understood by this command.
    UnknownParameter(char),
    /// Parameter value is missing or not a number.
    MalformedValue(char),
    /// Parameter value does not fit the target field.
    OutOfRange(char),
}

impl fmt::Display for GcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand => write!(f, "unknown command"),
            Self::UnknownParameter(c) => write!(f, "unknown parameter '{}'", c),
            Self::MalformedValue(c) => write!(f, "malformed value for '{}'", c),
            Self::OutOfRange(c) => write!(f, "value for '{}' out of range", c),
        }
    }
}

impl From<GcodeError> for Error {
    fn from(e: GcodeError) -> Self {
        Self::Gcode(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
