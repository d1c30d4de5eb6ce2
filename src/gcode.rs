//! `M710`: controller fan settings.
//!
//! ```text
//! M710 [S<active 0-255>] [I<idle 0-255>] [A<auto 0|1>] [D<seconds>] [R]
//! ```
//!
//! `R` restores defaults before the other parameters apply.  Without any
//! parameter the command reports the current settings in the same syntax.

use core::fmt::Write;

use crate::app::commands::{FanCommand, SettingsUpdate};
use crate::config::ControllerFanSettings;
use crate::error::GcodeError;

const COMMAND: &str = "M710";

/// Rendered report line, e.g. `M710 S255 I0 A1 D60`.
pub type Report = heapless::String<40>;

/// Parse one `M710` line.  Anything after `;` is a comment.
pub fn parse_m710(line: &str) -> Result<FanCommand, GcodeError> {
    let code = line.split(';').next().unwrap_or_default();
    let mut words = code.split_whitespace();

    match words.next() {
        Some(w) if w.eq_ignore_ascii_case(COMMAND) => {}
        _ => return Err(GcodeError::UnknownCommand),
    }

    let mut update = SettingsUpdate::default();
    for word in words {
        let mut chars = word.chars();
        let Some(letter) = chars.next().map(|c| c.to_ascii_uppercase()) else {
            continue;
        };
        let value = chars.as_str();
        match letter {
            'R' => update.reset = true,
            'S' => update.active_speed = Some(parse_value(letter, value)?),
            'I' => update.idle_speed = Some(parse_value(letter, value)?),
            'D' => update.duration_secs = Some(parse_value(letter, value)?),
            // A bare `A` switches auto mode on.
            'A' if value.is_empty() => update.auto_mode = Some(true),
            'A' => update.auto_mode = Some(parse_value::<u8>(letter, value)? != 0),
            other => return Err(GcodeError::UnknownParameter(other)),
        }
    }

    if update.is_empty() {
        Ok(FanCommand::Report)
    } else {
        Ok(FanCommand::Update(update))
    }
}

fn parse_value<T: TryFrom<u32>>(letter: char, value: &str) -> Result<T, GcodeError> {
    let n: u32 = value
        .parse()
        .map_err(|_| GcodeError::MalformedValue(letter))?;
    T::try_from(n).map_err(|_| GcodeError::OutOfRange(letter))
}

/// Format settings the way `M710` reports them.
pub fn format_report(settings: &ControllerFanSettings) -> Report {
    let mut out = Report::new();
    // 40 bytes covers the widest possible line ("M710 S255 I255 A1 D65535").
    let _ = write!(
        out,
        "{} S{} I{} A{} D{}",
        COMMAND,
        settings.active_speed,
        settings.idle_speed,
        u8::from(settings.auto_mode),
        settings.duration_secs
    );
    out
}
