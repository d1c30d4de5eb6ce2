//! Integration tests for the sampler → decision → kickstart → outputs
//! pipeline, driven through `ControllerFanService::update` with a manual
//! clock.

use super::mock_hw::{MockHardware, RecordingSink};

use ctrlfan::adapters::thermal::ThermalState;
use ctrlfan::adapters::time::ManualClock;
use ctrlfan::app::events::FanEvent;
use ctrlfan::app::service::ControllerFanService;
use ctrlfan::config::{ControllerFanConfig, ControllerFanSettings, KickstartConfig, PwmRange};
use ctrlfan::control::decision::FanTier;
use ctrlfan::gcode;
use ctrlfan::pins::{FAN_RATIO_CONTROLLER, FAN_RATIO_EXTRUDER};
use ctrlfan::sensors::DriverId;

struct Rig {
    svc: ControllerFanService,
    clock: ManualClock,
    hw: MockHardware,
    thermal: ThermalState,
    sink: RecordingSink,
}

impl Rig {
    fn new(config: ControllerFanConfig, settings: ControllerFanSettings) -> Self {
        let mut svc = ControllerFanService::new(config, settings).unwrap();
        let mut sink = RecordingSink::new();
        svc.start(&mut sink);
        Self {
            svc,
            clock: ManualClock::new(),
            hw: MockHardware::with_secondary(),
            thermal: ThermalState::default(),
            sink,
        }
    }

    /// Poll at `ms`; returns the duty if the gate was open.
    fn poll_at(&mut self, ms: u64) -> Option<u8> {
        self.clock.set(ms);
        self.svc
            .update(&self.clock, &mut self.hw, &mut self.thermal, &mut self.sink)
            .then(|| self.svc.speed())
    }
}

fn print_settings(duration_secs: u16) -> ControllerFanSettings {
    ControllerFanSettings {
        auto_mode: true,
        duration_secs,
        active_speed: 255,
        idle_speed: 0,
    }
}

// ── Idle timeout ──────────────────────────────────────────────

#[test]
fn fan_runs_until_idle_timeout_then_stops() {
    let config = ControllerFanConfig {
        min_speed: 50,
        ..Default::default()
    };
    let mut rig = Rig::new(config, print_settings(30));

    rig.hw.enable(DriverId::X);
    assert_eq!(rig.poll_at(0), Some(255));
    rig.hw.disable_all();

    for t in (2_500..30_000).step_by(2_500) {
        assert_eq!(rig.poll_at(t), Some(255), "still active at {t}ms");
    }
    assert_eq!(rig.poll_at(30_000), Some(0));
    assert_eq!(rig.svc.tier(), FanTier::Off);
    assert_eq!(rig.poll_at(32_500), Some(0));
    assert_eq!(rig.svc.last_motor_on(), Some(0));
}

#[test]
fn output_holds_between_polls() {
    let mut rig = Rig::new(ControllerFanConfig::default(), print_settings(30));
    rig.hw.enable(DriverId::Y);
    rig.poll_at(0);
    rig.hw.disable_all();

    let writes = rig.hw.writes.len();
    assert_eq!(rig.poll_at(1_000), None);
    assert_eq!(rig.poll_at(2_499), None);
    assert_eq!(rig.hw.writes.len(), writes, "gated polls must not touch pins");
    assert_eq!(rig.svc.speed(), 255);
}

#[test]
fn renewed_activity_extends_window() {
    let mut rig = Rig::new(ControllerFanConfig::default(), print_settings(10));
    rig.hw.enable(DriverId::E(0));
    rig.poll_at(0);
    rig.poll_at(7_500);
    rig.hw.disable_all();
    assert_eq!(rig.svc.last_motor_on(), Some(7_500));
    assert_eq!(rig.poll_at(15_000), Some(255));
    assert_eq!(rig.poll_at(17_500), Some(0));
}

#[test]
fn manual_mode_always_idle_speed() {
    let settings = ControllerFanSettings {
        auto_mode: false,
        duration_secs: 60,
        active_speed: 255,
        idle_speed: 120,
    };
    let mut rig = Rig::new(ControllerFanConfig::default(), settings);
    rig.hw.enable(DriverId::X);
    assert_eq!(rig.poll_at(0), Some(120));
    assert_eq!(rig.svc.tier(), FanTier::Idle);
    rig.hw.disable_all();
    assert_eq!(rig.poll_at(100_000), Some(120));
}

#[test]
fn idle_speed_used_before_any_activity() {
    let settings = ControllerFanSettings {
        idle_speed: 70,
        ..print_settings(30)
    };
    let mut rig = Rig::new(ControllerFanConfig::default(), settings);
    assert_eq!(rig.poll_at(0), Some(70));
    assert_eq!(rig.svc.last_motor_on(), None);
}

// ── Sampler exclusions ────────────────────────────────────────

#[test]
fn ignore_z_leaves_timestamp_unchanged() {
    let config = ControllerFanConfig {
        ignore_z: true,
        ..Default::default()
    };
    let mut rig = Rig::new(config, print_settings(30));
    rig.hw.enable(DriverId::Z);
    assert_eq!(rig.poll_at(0), Some(0));
    assert_eq!(rig.svc.last_motor_on(), None);
    assert!(!rig.hw.reads.contains(&DriverId::Z), "Z must not be sampled");
}

#[test]
fn z_only_reacts_to_z() {
    let mut config = ControllerFanConfig {
        z_only: true,
        ..Default::default()
    };
    config.drivers.push(DriverId::Z2).unwrap();
    let mut rig = Rig::new(config, print_settings(30));

    rig.hw.enable(DriverId::X);
    assert_eq!(rig.poll_at(0), Some(0));
    rig.hw.enable(DriverId::Z2);
    assert_eq!(rig.poll_at(2_500), Some(255));
}

#[test]
fn heated_bed_counts_as_activity() {
    let mut rig = Rig::new(ControllerFanConfig::default(), print_settings(30));
    rig.thermal.bed_soft_pwm_amount = 90;
    assert_eq!(rig.poll_at(0), Some(255));
    assert_eq!(rig.svc.last_motor_on(), Some(0));
}

// ── Kickstart ─────────────────────────────────────────────────

fn kick_config(time_ms: u32, power: u8) -> ControllerFanConfig {
    ControllerFanConfig {
        kickstart: KickstartConfig { time_ms, power },
        ..Default::default()
    }
}

#[test]
fn kickstart_boosts_then_settles() {
    let settings = ControllerFanSettings {
        active_speed: 100,
        ..print_settings(60)
    };
    let mut rig = Rig::new(kick_config(3_000, 255), settings);
    rig.hw.enable(DriverId::X);

    assert_eq!(rig.poll_at(0), Some(255));
    assert_eq!(rig.svc.kickstart_deadline(), Some(3_000));
    assert_eq!(rig.poll_at(2_500), Some(255));
    // Window rounds up to the next evaluation.
    assert_eq!(rig.poll_at(5_000), Some(100));
    assert_eq!(rig.svc.kickstart_deadline(), None);
    assert_eq!(rig.poll_at(7_500), Some(100));

    assert_eq!(
        rig.sink.count(|e| matches!(e, FanEvent::KickstartOpened { .. })),
        1
    );
    assert_eq!(rig.sink.count(|e| *e == FanEvent::KickstartClosed), 1);
}

#[test]
fn kickstart_reopens_after_fan_stops() {
    let mut rig = Rig::new(kick_config(500, 200), print_settings(5));
    rig.hw.enable(DriverId::Y);
    assert_eq!(rig.poll_at(0), Some(200));
    rig.hw.disable_all();
    assert_eq!(rig.poll_at(2_500), Some(255));
    assert_eq!(rig.poll_at(5_000), Some(0));

    rig.hw.enable(DriverId::Y);
    assert_eq!(rig.poll_at(7_500), Some(200));
    assert_eq!(rig.svc.kickstart_deadline(), Some(8_000));
}

#[test]
fn kickstart_skipped_when_floor_forces_off() {
    let config = ControllerFanConfig {
        min_speed: 50,
        ..kick_config(1_000, 255)
    };
    let settings = ControllerFanSettings {
        auto_mode: false,
        idle_speed: 40,
        ..print_settings(30)
    };
    let mut rig = Rig::new(config, settings);
    assert_eq!(rig.poll_at(0), Some(0));
    assert_eq!(rig.svc.kickstart_deadline(), None);
}

// ── Output routing ────────────────────────────────────────────

#[test]
fn secondary_pin_mirrors_primary() {
    let mut rig = Rig::new(ControllerFanConfig::default(), print_settings(30));
    rig.hw.enable(DriverId::X);
    rig.poll_at(0);
    rig.hw.disable_all();
    rig.poll_at(30_000);
    assert_eq!(rig.hw.secondary_writes(), vec![255, 0]);
    assert_eq!(rig.hw.last_primary(), Some(0));
}

#[test]
fn soft_pwm_publishes_to_thermal_manager() {
    let config = ControllerFanConfig {
        soft_pwm: true,
        ..Default::default()
    };
    let mut rig = Rig::new(config, print_settings(30));
    rig.hw.enable(DriverId::X);
    rig.poll_at(0);
    assert!(rig.hw.writes.is_empty());
    assert_eq!(rig.thermal.soft_pwm_controller_speed, 255);
}

#[test]
fn ratio_table_tracks_both_fans() {
    let mut rig = Rig::new(ControllerFanConfig::default(), print_settings(30));
    rig.thermal.fan_speed[0] = 128;
    rig.hw.enable(DriverId::X);
    rig.poll_at(0);
    assert_eq!(rig.thermal.fan_ratio[FAN_RATIO_EXTRUDER], 128);
    assert_eq!(rig.thermal.fan_ratio[FAN_RATIO_CONTROLLER], 255);

    rig.thermal.fan_speed[0] = 0;
    rig.hw.disable_all();
    rig.poll_at(30_000);
    assert_eq!(rig.thermal.fan_ratio[FAN_RATIO_EXTRUDER], 0);
    assert_eq!(rig.thermal.fan_ratio[FAN_RATIO_CONTROLLER], 0);
}

#[test]
fn pwm_range_scales_output() {
    let config = ControllerFanConfig {
        pwm: PwmRange {
            off: 0,
            min: 80,
            max: 200,
        },
        ..Default::default()
    };
    let mut rig = Rig::new(config, print_settings(30));
    rig.hw.enable(DriverId::X);
    assert_eq!(rig.poll_at(0), Some(200));
}

// ── Events and commands ───────────────────────────────────────

#[test]
fn speed_change_events_only_on_change() {
    let mut rig = Rig::new(ControllerFanConfig::default(), print_settings(5));
    rig.hw.enable(DriverId::X);
    rig.poll_at(0);
    rig.poll_at(2_500);
    rig.hw.disable_all();
    rig.poll_at(5_000);
    rig.poll_at(7_500);
    rig.poll_at(10_000);

    let changes: Vec<_> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            FanEvent::SpeedChanged { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![(0, 255), (255, 0)]);
    assert!(matches!(rig.sink.events[0], FanEvent::Started(_)));
}

#[test]
fn m710_changes_apply_at_next_evaluation() {
    let mut rig = Rig::new(ControllerFanConfig::default(), ControllerFanSettings::default());
    assert_eq!(rig.poll_at(0), Some(0));

    let cmd = gcode::parse_m710("M710 I90").unwrap();
    rig.svc.handle_command(cmd, &mut rig.sink);
    assert_eq!(rig.svc.speed(), 0, "no re-evaluation on command");
    assert_eq!(rig.poll_at(1_000), None);
    assert_eq!(rig.poll_at(2_500), Some(90));

    let cmd = gcode::parse_m710("M710 R").unwrap();
    rig.svc.handle_command(cmd, &mut rig.sink);
    assert_eq!(*rig.svc.settings(), ControllerFanSettings::default());
    assert_eq!(rig.poll_at(5_000), Some(0));
}

#[test]
fn m710_report_event() {
    let mut rig = Rig::new(ControllerFanConfig::default(), ControllerFanSettings::default());
    let cmd = gcode::parse_m710("M710").unwrap();
    rig.svc.handle_command(cmd, &mut rig.sink);
    match rig.sink.events.last() {
        Some(FanEvent::Report(s)) => {
            assert_eq!(gcode::format_report(s).as_str(), "M710 S255 I0 A1 D60");
        }
        other => panic!("expected report, got {other:?}"),
    }
}

// ── Shipped profiles ──────────────────────────────────────────

#[test]
fn bundled_profile_loads_and_validates() {
    let json = include_str!("../../profiles/dual-z-kickstart.json");
    let config: ControllerFanConfig = serde_json::from_str(json).unwrap();
    assert!(config.validate().is_ok());
    assert!(config.drivers.contains(&DriverId::Z2));
    assert!(config.drivers.contains(&DriverId::E(1)));
    assert!(config.kickstart.enabled());

    let mut rig = Rig::new(config, ControllerFanSettings::default());
    rig.hw.enable(DriverId::E(1));
    assert_eq!(rig.poll_at(0), Some(255), "kickstart power");
    assert_eq!(rig.poll_at(2_500), Some(255), "active speed at top of range");
}
