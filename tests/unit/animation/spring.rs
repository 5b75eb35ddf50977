use super::*;

const PRESETS: [SpringConfig; 5] = [
    SpringConfig::DEFAULT,
    SpringConfig::SMOOTH,
    SpringConfig::SNAPPY,
    SpringConfig::BOUNCY,
    SpringConfig::HEAVY,
];

#[test]
fn starts_at_from() {
    for cfg in PRESETS {
        let opts = SpringOptions {
            from: 3.0,
            to: 7.0,
            ..SpringOptions::with_config(cfg)
        };
        assert_eq!(spring(0.0, opts), 3.0);
    }
}

#[test]
fn negative_delta_and_delay_hold_from() {
    let opts = SpringOptions::default();
    assert_eq!(spring(-1.0, opts), 0.0);

    let delayed = SpringOptions {
        delay: 2.0,
        ..SpringOptions::default()
    };
    assert_eq!(spring(1.0, delayed), 0.0);
    assert_eq!(spring(2.0, delayed), 0.0);
    assert!(spring(3.0, delayed) > 0.0);
}

#[test]
fn settles_within_tolerance_at_reported_duration() {
    for cfg in PRESETS {
        let n = spring_duration(cfg);
        assert!(n < MAX_SETTLE_FRAGMENTS, "{cfg:?}");
        for k in n..n + 8 {
            let v = spring(f64::from(k), SpringOptions::with_config(cfg));
            assert!((v - 1.0).abs() <= SETTLE_EPSILON, "{cfg:?} at {k}: {v}");
        }
    }
}

#[test]
fn default_duration_matches_envelope_estimate() {
    // zeta * omega0 = 5 => ceil(ln(1000) / 5 / 0.5) = 3
    assert_eq!(spring_duration(SpringConfig::DEFAULT), 3);
    assert_eq!(spring_duration(SpringConfig::SNAPPY), 2);
    assert_eq!(spring_duration(SpringConfig::BOUNCY), 4);
}

#[test]
fn overdamped_duration_tracks_slow_pole() {
    let n = spring_duration(SpringConfig::SMOOTH);
    assert!(n > 1);
    let before = spring(f64::from(n - 1), SpringOptions::with_config(SpringConfig::SMOOTH));
    assert!((1.0 - before) > SETTLE_EPSILON);
}

#[test]
fn overdamped_and_critical_are_monotonic() {
    let critical = SpringConfig {
        mass: 1.0,
        damping: 20.0,
        stiffness: 100.0,
    };
    assert_eq!(critical.regime(), DampingRegime::Critical);
    for cfg in [SpringConfig::SMOOTH, critical] {
        let mut prev = spring(0.0, SpringOptions::with_config(cfg));
        for k in 1..=spring_duration(cfg) {
            let v = spring(f64::from(k), SpringOptions::with_config(cfg));
            assert!(v >= prev, "{cfg:?} at {k}");
            assert!(v <= 1.0);
            prev = v;
        }
    }
}

#[test]
fn underdamped_output_is_clamped_to_target() {
    for k in 0..20 {
        let v = spring(f64::from(k) * 0.25, SpringOptions::with_config(SpringConfig::BOUNCY));
        assert!(v <= 1.0);
    }
}

#[test]
fn regimes_classify_presets() {
    assert_eq!(SpringConfig::DEFAULT.regime(), DampingRegime::Underdamped);
    assert_eq!(SpringConfig::SMOOTH.regime(), DampingRegime::Overdamped);
    assert_eq!(SpringConfig::HEAVY.regime(), DampingRegime::Underdamped);
}

#[test]
fn duration_in_fragments_uses_normalized_curve() {
    let opts = SpringOptions {
        duration_in_fragments: Some(4.0),
        config: SpringConfig::SMOOTH,
        ..SpringOptions::default()
    };
    assert_eq!(spring(0.0, opts), 0.0);
    let half = spring(2.0, opts);
    let expected = normalized_spring_curve(0.5, SpringConfig::SMOOTH);
    assert_eq!(half, expected);
    // Past the span the ratio is capped at 1.
    assert_eq!(spring(10.0, opts), spring(4.0, opts));
}

#[test]
fn non_positive_duration_falls_back_to_physics() {
    let opts = SpringOptions {
        duration_in_fragments: Some(0.0),
        ..SpringOptions::default()
    };
    assert_eq!(spring(1.0, opts), spring(1.0, SpringOptions::default()));
}

#[test]
fn undamped_spring_never_settles() {
    let cfg = SpringConfig {
        damping: 0.0,
        ..SpringConfig::DEFAULT
    };
    assert_eq!(spring_duration(cfg), MAX_SETTLE_FRAGMENTS);
}

#[test]
fn config_fields_default_independently() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"damping": 200}"#).unwrap();
    assert_eq!(cfg, SpringConfig::SMOOTH);
    let preset: SpringPreset = serde_json::from_str(r#""heavy""#).unwrap();
    assert_eq!(SpringConfig::from(preset), SpringConfig::HEAVY);
}

#[test]
fn validate_accepts_presets_and_zero_damping() {
    for cfg in PRESETS {
        assert!(cfg.validate().is_ok());
    }
    let undamped = SpringConfig {
        damping: 0.0,
        ..SpringConfig::DEFAULT
    };
    assert!(undamped.validate().is_ok());
    let weightless = SpringConfig {
        mass: -1.0,
        ..SpringConfig::DEFAULT
    };
    assert!(weightless.validate().is_err());
}
