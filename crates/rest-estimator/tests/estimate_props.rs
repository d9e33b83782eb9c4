//! Properties of `estimate_bedtime` over the whole input domain.

use proptest::prelude::*;
use rest_estimator::{
    CoffeeAmount, LinearSleepModel, ModelError, SleepAmount, SleepFeatures, SleepRegressor,
    TimeOfDay, estimate_bedtime,
};

/// Predicts exactly the desired sleep.
#[derive(Debug)]
struct Echo;

impl SleepRegressor for Echo {
    fn predict(&self, features: &SleepFeatures) -> rest_estimator::Result<f64> {
        Ok(features.estimated_sleep)
    }
}

#[derive(Debug)]
struct Failing;

impl SleepRegressor for Failing {
    fn predict(&self, _: &SleepFeatures) -> rest_estimator::Result<f64> {
        Err(ModelError::prediction("unavailable"))
    }
}

fn inputs() -> impl Strategy<Value = (TimeOfDay, SleepAmount, CoffeeAmount)> {
    (0u32..24, 0u32..60, 16u32..=48, 1u32..=20).prop_map(|(h, m, quarters, cups)| {
        (
            TimeOfDay::new(h, m).expect("valid time"),
            SleepAmount::new(f64::from(quarters) * 0.25),
            CoffeeAmount::new(cups),
        )
    })
}

#[test]
fn midnight_wrap() {
    let bedtime = estimate_bedtime(
        TimeOfDay::new(6, 0).expect("valid"),
        SleepAmount::new(8.0),
        CoffeeAmount::new(1),
        &Echo,
    )
    .expect("computes");
    assert_eq!(bedtime.time, TimeOfDay::new(22, 0).expect("valid"));
    assert_eq!(bedtime.day_offset, -1);
}

#[test]
fn boundary_inputs_are_accepted() {
    let model = LinearSleepModel::bundled().expect("bundled");
    let wake = TimeOfDay::default();
    for sleep in [4.0, 12.0] {
        for cups in [1, 20] {
            let result = estimate_bedtime(wake, SleepAmount::new(sleep), CoffeeAmount::new(cups), &model);
            assert!(result.is_ok(), "sleep={sleep} cups={cups}: {result:?}");
        }
    }
}

proptest! {
    #[test]
    fn succeeds_when_model_succeeds((wake, sleep, coffee) in inputs()) {
        let bedtime = estimate_bedtime(wake, sleep, coffee, &Echo).expect("echo never fails");
        let expected = (i64::from(wake.seconds_since_midnight()) - (sleep.hours() * 3600.0) as i64)
            .rem_euclid(86_400);
        prop_assert_eq!(i64::from(bedtime.time.seconds_since_midnight()), expected);
        prop_assert!(bedtime.day_offset == 0 || bedtime.day_offset == -1);
    }

    #[test]
    fn fails_when_model_fails((wake, sleep, coffee) in inputs()) {
        prop_assert!(estimate_bedtime(wake, sleep, coffee, &Failing).is_err());
    }

    #[test]
    fn bundled_model_is_deterministic((wake, sleep, coffee) in inputs()) {
        let model = LinearSleepModel::bundled().expect("bundled");
        let first = estimate_bedtime(wake, sleep, coffee, &model);
        let second = estimate_bedtime(wake, sleep, coffee, &model);
        prop_assert_eq!(first.ok(), second.ok());
    }
}
