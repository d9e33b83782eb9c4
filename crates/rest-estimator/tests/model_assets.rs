//! Loading model assets from disk through the estimator's configuration.

use std::fs;

use rest_estimator::{
    BedtimeEstimator, CachedProvider, AssetProvider, ClockStyle, EstimateInputs, ModelConfiguration,
    ModelProvider, ModelSource, ResultState, TimeOfDay,
};
use tempfile::TempDir;

const HOURS_MODEL: &str = r#"{
  "name": "HalfAnHourShort",
  "version": 1,
  "output": { "units": "hours" },
  "intercept": -0.5,
  "coefficients": { "wake": 0.0, "estimated_sleep": 1.0, "coffee": 0.0 }
}"#;

fn write_asset(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).expect("write asset");
    path
}

#[test]
fn file_model_drives_estimate() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_asset(&dir, "model.json", HOURS_MODEL);
    let estimator = BedtimeEstimator::from_config(ModelConfiguration::file(path));

    let state = estimator.estimate(&EstimateInputs::default());
    assert_eq!(state.title(), "Your ideal bedtime is…");
    assert_eq!(state.message(ClockStyle::TwentyFourHour), "23:30");
    assert_eq!(state.bedtime().map(|b| b.day_offset), Some(-1));
}

#[test]
fn invalid_asset_yields_error_state() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_asset(
        &dir,
        "broken.json",
        &HOURS_MODEL.replace(r#""version": 1"#, r#""version": 7"#),
    );
    let estimator = BedtimeEstimator::from_config(ModelConfiguration::file(path));

    let state = estimator.estimate(&EstimateInputs::default());
    assert_eq!(
        state,
        ResultState::Failed("Sorry, there was a problem calculating your bedtime.".into())
    );
    assert_eq!(state.title(), "Error");
}

#[test]
fn missing_asset_yields_error_state() {
    let dir = TempDir::new().expect("tempdir");
    let estimator =
        BedtimeEstimator::from_config(ModelConfiguration::file(dir.path().join("absent.json")));
    assert_eq!(estimator.estimate(&EstimateInputs::default()).title(), "Error");
}

#[test]
fn cached_provider_survives_asset_removal() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_asset(&dir, "model.json", HOURS_MODEL);
    let provider = CachedProvider::new(AssetProvider::new(ModelSource::File(path.clone())));
    assert!(provider.load().is_ok());

    fs::remove_file(&path).expect("remove asset");
    assert!(provider.load().is_ok());

    let uncached = AssetProvider::new(ModelSource::File(path));
    assert!(uncached.load().is_err());
}

#[test]
fn uncached_configuration_sees_asset_changes() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_asset(&dir, "model.json", HOURS_MODEL);
    let estimator = BedtimeEstimator::from_config(ModelConfiguration::file(&path));
    let inputs = EstimateInputs {
        wake_up: TimeOfDay::new(6, 0).expect("valid"),
        ..EstimateInputs::default()
    };
    assert_eq!(estimator.estimate(&inputs).message(ClockStyle::TwentyFourHour), "22:30");

    fs::write(&path, HOURS_MODEL.replace("-0.5", "0.0")).expect("rewrite");
    assert_eq!(estimator.estimate(&inputs).message(ClockStyle::TwentyFourHour), "22:00");
}
