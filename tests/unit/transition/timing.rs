use super::*;

#[test]
fn linear_is_proportional_and_saturates() {
    let t = linear_timing(300.0);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(150.0), 0.5);
    assert_eq!(t.progress(300.0), 1.0);
    assert_eq!(t.progress(900.0), 1.0);
}

#[test]
fn zero_duration_is_complete() {
    assert_eq!(linear_timing(0.0).progress(0.0), 1.0);
    assert_eq!(eased_timing(0.0, NamedEasing::EaseIn).progress(0.0), 1.0);
}

#[test]
fn named_easings_follow_quadratic_blends() {
    let quarter = 75.0;
    let d = 300.0;
    assert_eq!(eased_timing(d, NamedEasing::Linear).progress(quarter), 0.25);
    assert!((eased_timing(d, NamedEasing::EaseIn).progress(quarter) - 0.0625).abs() < 1e-12);
    assert!((eased_timing(d, NamedEasing::EaseOut).progress(quarter) - 0.4375).abs() < 1e-12);
    assert!((eased_timing(d, NamedEasing::EaseInOut).progress(quarter) - 0.125).abs() < 1e-12);
    assert_eq!(
        eased_timing(d, NamedEasing::Ease).progress(quarter),
        eased_timing(d, NamedEasing::EaseInOut).progress(quarter)
    );
    assert!((eased_timing(d, NamedEasing::EaseInOut).progress(225.0) - 0.875).abs() < 1e-12);
}

#[test]
fn spring_timing_defaults_and_endpoints() {
    let t = spring_timing(None, None);
    assert_eq!(t.duration_ms(), 400.0);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(400.0), 1.0);
    let mid = t.progress(200.0);
    assert!(mid > 0.5 && mid < 1.5, "mid={mid}");
}

#[test]
fn overdamped_spring_timing_is_monotone() {
    let t = spring_timing(Some(500.0), Some(SpringConfig::SMOOTH));
    let mut last = 0.0;
    for ms in (0..500).step_by(25) {
        let p = t.progress(ms as f64);
        assert!(p >= last);
        last = p;
    }
}

#[test]
fn validate_rejects_negative_duration_and_bad_spring() {
    assert!(linear_timing(-1.0).validate().is_err());
    assert!(linear_timing(f64::NAN).validate().is_err());
    let bad = spring_timing(
        None,
        Some(SpringConfig {
            mass: 0.0,
            ..SpringConfig::DEFAULT
        }),
    );
    assert!(bad.validate().is_err());
    assert!(linear_timing(300.0).validate().is_ok());
}

#[test]
fn timing_deserializes_from_tagged_json() {
    let t: TransitionTiming =
        serde_json::from_str(r#"{"kind":"linear","duration_ms":250}"#).unwrap();
    assert_eq!(t, linear_timing(250.0));
}
