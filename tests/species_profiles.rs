//! Species-profile configuration driving alternate evaluations.

use pondmon_core::config::{self, ConfigError};
use pondmon_core::{evaluate, EvalError, Parameter, Reading, RangeTable, Status};

fn reading(temp: f64, oxygen: f64, ph: f64, ammonia: f64) -> Reading {
    Reading::new()
        .with(Parameter::Temperature, temp)
        .with(Parameter::DissolvedOxygen, oxygen)
        .with(Parameter::Ph, ph)
        .with(Parameter::Ammonia, ammonia)
}

/// A warm-water profile: tolerates more heat, demands cleaner water.
const TILAPIA_PROFILE: &str = r#"
[ranges.temperature]
low = 27.0
high = 32.0

[ranges.dissolved_oxygen]
low = 4.0
high = 9.0

[ranges.ph]
low = 6.0
high = 9.0

[ranges.ammonia]
low = 0.0
high = 0.02
"#;

#[test]
fn profile_thresholds_change_the_classification() {
    let profile = config::load_from_str(TILAPIA_PROFILE).expect("profile should load");
    let default = RangeTable::default_freshwater();

    // 26 °C is safe under the default table but too cold for this profile.
    let snapshot = reading(26.0, 7.0, 7.2, 0.02);

    let under_default = evaluate(&default, &snapshot).expect("should evaluate");
    assert_eq!(
        under_default.status_of(Parameter::Temperature),
        Some(Status::Safe)
    );

    let under_profile = evaluate(&profile, &snapshot).expect("should evaluate");
    assert_eq!(
        under_profile.status_of(Parameter::Temperature),
        Some(Status::Low)
    );
    assert!(!under_profile.all_safe);
}

#[test]
fn profile_moves_ammonia_safe_ceiling_but_not_the_unsafe_boundary() {
    let profile = config::load_from_str(TILAPIA_PROFILE).expect("profile should load");

    // 0.03 mg/L: safe under the default ceiling (0.05), risky under 0.02.
    let slightly_elevated = evaluate(&profile, &reading(30.0, 7.0, 7.2, 0.03))
        .expect("should evaluate");
    assert_eq!(
        slightly_elevated.status_of(Parameter::Ammonia),
        Some(Status::Risky)
    );

    // The 0.1 unsafe boundary is a property of the rule, not the profile.
    let toxic = evaluate(&profile, &reading(30.0, 7.0, 7.2, 0.11)).expect("should evaluate");
    assert_eq!(toxic.status_of(Parameter::Ammonia), Some(Status::Unsafe));
}

#[test]
fn partial_profile_fails_evaluation_of_omitted_parameter() {
    let partial = config::load_from_str(
        r#"
        [ranges.temperature]
        low = 22.0
        high = 28.0

        [ranges.ph]
        low = 6.5
        high = 8.5
        "#,
    )
    .expect("partial profile should load");

    let result = evaluate(&partial, &reading(25.0, 7.0, 7.2, 0.02));
    assert_eq!(
        result,
        Err(EvalError::Configuration(Parameter::DissolvedOxygen)),
        "the first unconfigured parameter in reading order is named"
    );
}

#[test]
fn partial_profile_still_evaluates_readings_it_covers() {
    let partial = config::load_from_str(
        r#"
        [ranges.temperature]
        low = 22.0
        high = 28.0
        "#,
    )
    .expect("partial profile should load");

    let result = evaluate(
        &partial,
        &Reading::new().with(Parameter::Temperature, 25.0),
    )
    .expect("covered reading should evaluate");
    assert!(result.all_safe);
}

#[test]
fn inverted_profile_range_is_rejected_before_any_evaluation() {
    let result = config::load_from_str(
        r#"
        [ranges.dissolved_oxygen]
        low = 10.0
        high = 5.0
        "#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::InvalidRange {
            parameter: Parameter::DissolvedOxygen,
            ..
        })
    ));
}

#[test]
fn misspelled_parameter_key_is_rejected() {
    let result = config::load_from_str(
        r#"
        [ranges.disolved_oxygen]
        low = 5.0
        high = 10.0
        "#,
    );
    match result {
        Err(ConfigError::UnknownParameter(key)) => assert_eq!(key, "disolved_oxygen"),
        other => panic!("misspelled key should be rejected, got {:?}", other),
    }
}
