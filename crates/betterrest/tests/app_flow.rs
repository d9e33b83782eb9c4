//! End-to-end flows through the app model, headless.

use std::fs;
use std::path::PathBuf;

use betterrest::app::{BetterRest, Focus, Variant};
use betterrest::cli::Cli;
use betterrest::config::AppConfig;
use clap::Parser;
use rest_core::event::{Event, KeyCode};
use rest_estimator::{ClockStyle, TimeOfDay};
use rest_runtime::{CmdRecord, ProgramSimulator};
use tempfile::TempDir;

/// Predicts half an hour less than the sleep goal, in hours.
const HALF_HOUR_SHORT: &str = r#"{
  "name": "HalfHourShort",
  "version": 1,
  "output": { "name": "actualSleep", "units": "hours" },
  "intercept": -0.5,
  "coefficients": { "wake": 0.0, "estimated_sleep": 1.0, "coffee": 0.0 }
}"#;

struct Fixture {
    _dir: TempDir,
    model: PathBuf,
}

impl Fixture {
    fn new(asset: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let model = dir.path().join("model.json");
        fs::write(&model, asset).expect("write asset");
        Self { _dir: dir, model }
    }

    fn simulator(&self, extra: &[&str]) -> ProgramSimulator<BetterRest> {
        let model = self.model.to_string_lossy().into_owned();
        let mut args = vec!["betterrest", "--model", model.as_str()];
        if !extra.contains(&"--clock") {
            args.extend_from_slice(&["--clock", "24h"]);
        }
        args.extend_from_slice(extra);
        let cli = Cli::try_parse_from(args).expect("parses");
        let config = AppConfig::resolve(cli, |_| None).expect("resolves");
        let mut sim = ProgramSimulator::new(BetterRest::from_config(&config));
        sim.init();
        sim
    }
}

fn key(code: KeyCode) -> Event {
    Event::key(code)
}

#[test]
fn toolbar_submit_opens_alert_and_enter_dismisses() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--variant", "toolbar"]);

    let frame = sim.capture_frame(64, 24);
    assert!(frame.contains_text("BetterRest"));
    assert!(frame.contains_text("[ Calculate ]"));
    assert!(frame.contains_text("When do you want to wake up?"));
    assert!(frame.contains_text("8 hours"));
    assert!(frame.contains_text("1 cup"));

    sim.inject(Event::char('c'));
    assert!(sim.model().is_alert_open());
    let frame = sim.capture_frame(64, 24);
    assert!(frame.contains_text("Your ideal bedtime is…"));
    assert!(frame.contains_text("23:30"));
    assert!(frame.contains_text("[ OK ]"));

    sim.inject(key(KeyCode::Enter));
    assert!(!sim.model().is_alert_open());
    assert!(!sim.capture_frame(64, 24).contains_text("[ OK ]"));
    assert_eq!(sim.logs(), ["Your ideal bedtime is… 23:30".to_string()]);
}

#[test]
fn sections_variant_uses_capsule_headings() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--variant", "sections"]);
    let frame = sim.capture_frame(64, 24);
    assert!(frame.contains_text("╭ Desired amount of sleep ╮"));
    assert!(frame.contains_text("╭ Daily coffee intake ╮"));
    assert!(frame.contains_text("07:00"));
}

#[test]
fn steppers_clamp_at_both_ends() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--variant", "toolbar"]);

    sim.inject(key(KeyCode::Tab));
    assert_eq!(sim.model().focus(), Focus::Sleep);
    sim.inject_events(&vec![key(KeyCode::Down); 40]);
    assert_eq!(sim.model().inputs().sleep.hours(), 4.0);
    sim.inject_events(&vec![Event::char('+'); 40]);
    assert_eq!(sim.model().inputs().sleep.hours(), 12.0);

    sim.inject(key(KeyCode::Tab));
    assert_eq!(sim.model().focus(), Focus::Coffee);
    sim.inject_events(&vec![key(KeyCode::Up); 30]);
    assert_eq!(sim.model().inputs().coffee.count(), 20);
    assert!(sim.capture_frame(64, 24).contains_text("20 cups"));
    sim.inject_events(&vec![key(KeyCode::Down); 30]);
    assert_eq!(sim.model().inputs().coffee.count(), 1);
}

#[test]
fn picker_wraps_past_midnight() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--wake", "23:59"]);
    sim.inject_events(&[key(KeyCode::Right), key(KeyCode::Up)]);
    assert_eq!(sim.model().inputs().wake_up, TimeOfDay::new(0, 0).expect("valid"));
    sim.inject(key(KeyCode::Down));
    assert_eq!(sim.model().inputs().wake_up, TimeOfDay::new(23, 59).expect("valid"));
}

#[test]
fn live_variant_relabels_after_each_change() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--variant", "live"]);
    assert!(sim.capture_frame(64, 24).contains_text("23:30"));
    assert!(!sim.capture_frame(64, 24).contains_text("[ Calculate ]"));

    sim.inject(key(KeyCode::Up));
    assert!(sim.capture_frame(64, 24).contains_text("00:30"));

    sim.inject_events(&[key(KeyCode::Tab), key(KeyCode::Down)]);
    assert_eq!(sim.model().inputs().sleep.hours(), 7.75);
    assert!(sim.capture_frame(64, 24).contains_text("00:45"));
    assert_eq!(sim.logs().len(), 3);
    assert!(!sim.model().is_alert_open());
}

#[test]
fn twelve_hour_clock_formats_result() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--variant", "live", "--clock", "12h"]);
    let frame = sim.capture_frame(64, 24);
    assert!(frame.contains_text("11:30 PM"));
    assert!(frame.contains_text("7:00 AM"));
    assert_eq!(
        sim.model().result().message(ClockStyle::TwelveHour),
        "11:30 PM"
    );
}

#[test]
fn twelve_hour_alert_after_calculate() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&["--variant", "toolbar", "--clock", "12h", "--wake", "6:15"]);
    assert!(sim.capture_frame(64, 24).contains_text("6:15 AM"));
    sim.inject(Event::char('c'));
    let frame = sim.capture_frame(64, 24);
    assert!(frame.contains_text("10:45 PM"));
    assert!(!frame.contains_text("22:45"));
}

#[test]
fn broken_asset_shows_error_alert() {
    let fixture = Fixture::new("{ \"name\": \"Broken\" }");
    let mut sim = fixture.simulator(&["--variant", "sections"]);
    sim.inject(Event::char('c'));
    assert_eq!(sim.model().result().title(), "Error");
    let frame = sim.capture_frame(64, 24);
    assert!(frame.contains_text("Error"));
    assert!(frame.contains_text("Sorry, there was a problem calculating your bedtime."));
}

#[test]
fn quit_stops_the_program() {
    let fixture = Fixture::new(HALF_HOUR_SHORT);
    let mut sim = fixture.simulator(&[]);
    assert_eq!(sim.model().variant(), Variant::Sections);
    sim.inject_events(&[Event::char('q'), key(KeyCode::Up)]);
    assert!(!sim.is_running());
    assert_eq!(sim.model().inputs().wake_up, TimeOfDay::default());
    assert_eq!(sim.command_log().last(), Some(&CmdRecord::Quit));
}
