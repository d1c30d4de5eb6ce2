//! Fan speed → output duty mapping.

use crate::config::PwmRange;

/// Map a logical speed onto the output's duty range.
///
/// `0` becomes `range.off`; `1..=255` is spread linearly over
/// `range.min..=range.max`.
pub fn scale(speed: u8, range: &PwmRange) -> u8 {
    if speed == 0 {
        return range.off;
    }
    if *range == PwmRange::FULL {
        return speed;
    }
    let span = u32::from(range.max.saturating_sub(range.min));
    let step = u32::from(speed - 1);
    (u32::from(range.min) + step * span / 254) as u8
}
