use super::*;
use crate::animation::ease::Curve;
use crate::foundation::error::DeckError;

fn right(policy: Extrapolate) -> InterpolateOptions {
    InterpolateOptions {
        extrapolate_right: policy,
        ..Default::default()
    }
}

#[test]
fn unit_range_is_identity_inside() {
    for i in 0..=10 {
        let x = f64::from(i) / 10.0;
        let y = interpolate(x, &[0.0, 1.0], &[0.0, 1.0], InterpolateOptions::default()).unwrap();
        assert!((y - x).abs() < 1e-12);
    }
}

#[test]
fn right_extrapolation_policies() {
    let clamp = interpolate(5.0, &[0.0, 1.0], &[0.0, 10.0], right(Extrapolate::Clamp)).unwrap();
    assert_eq!(clamp, 10.0);
    let ident = interpolate(5.0, &[0.0, 1.0], &[0.0, 10.0], right(Extrapolate::Identity)).unwrap();
    assert_eq!(ident, 5.0);
    let extend = interpolate(5.0, &[0.0, 1.0], &[0.0, 10.0], right(Extrapolate::Extend)).unwrap();
    assert_eq!(extend, 50.0);
}

#[test]
fn left_extrapolation_is_independent() {
    let opts = InterpolateOptions {
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Extend,
        easing: None,
    };
    assert_eq!(interpolate(-3.0, &[0.0, 2.0], &[4.0, 8.0], opts).unwrap(), 4.0);
    assert_eq!(interpolate(3.0, &[0.0, 2.0], &[4.0, 8.0], opts).unwrap(), 10.0);

    let extend_left = interpolate(-2.0, &[0.0, 2.0], &[4.0, 8.0], Default::default()).unwrap();
    assert_eq!(extend_left, 0.0);
}

#[test]
fn multi_segment_picks_bracketing_segment() {
    let input = [0.0, 1.0, 3.0];
    let output = [0.0, 10.0, 30.0];
    let y = interpolate(2.0, &input, &output, Default::default()).unwrap();
    assert!((y - 20.0).abs() < 1e-12);
    let y = interpolate(1.0, &input, &output, Default::default()).unwrap();
    assert!((y - 10.0).abs() < 1e-12);
}

#[test]
fn zero_width_segment_jumps_to_end_output() {
    let y = interpolate(1.0, &[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 5.0, 6.0], Default::default())
        .unwrap();
    assert_eq!(y, 1.0);
    let y = interpolate(1.0, &[1.0, 1.0], &[2.0, 7.0], Default::default()).unwrap();
    assert_eq!(y, 7.0);
}

#[test]
fn easing_reshapes_local_ratio() {
    let opts = InterpolateOptions::default().with_easing(Ease::In(Curve::Quad));
    let y = interpolate(0.5, &[0.0, 1.0], &[0.0, 100.0], opts).unwrap();
    assert!((y - 25.0).abs() < 1e-12);
}

#[test]
fn malformed_ranges_fail_fast() {
    let err = interpolate(0.0, &[0.0, 1.0], &[0.0], Default::default()).unwrap_err();
    assert!(matches!(
        err,
        DeckError::Range(RangeError::LengthMismatch { input: 2, output: 1 })
    ));

    let err = interpolate(0.0, &[0.0], &[0.0], Default::default()).unwrap_err();
    assert!(matches!(err, DeckError::Range(RangeError::TooFewPoints { len: 1 })));

    let err = interpolate(0.0, &[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], Default::default()).unwrap_err();
    assert!(matches!(err, DeckError::Range(RangeError::NotMonotonic { index: 2 })));
}

#[test]
fn nan_in_input_range_is_rejected() {
    let err = interpolate(0.5, &[0.0, f64::NAN, 1.0], &[0.0, 1.0, 2.0], Default::default())
        .unwrap_err();
    assert!(matches!(err, DeckError::Range(RangeError::NonFinite { index: 1 })));

    let err = Interpolation::new(vec![f64::INFINITY, 1.0], vec![0.0, 1.0], Default::default())
        .unwrap_err();
    assert!(matches!(err, DeckError::Range(RangeError::NonFinite { index: 0 })));
}

#[test]
fn prevalidated_interpolation_matches_free_function() {
    let interp = Interpolation::new(vec![0.0, 4.0], vec![1.0, 0.0], InterpolateOptions::clamped())
        .unwrap();
    for x in [-1.0, 0.0, 1.0, 2.5, 4.0, 9.0] {
        let direct =
            interpolate(x, &[0.0, 4.0], &[1.0, 0.0], InterpolateOptions::clamped()).unwrap();
        assert_eq!(interp.sample(x), direct);
    }
    assert!(Interpolation::new(vec![1.0], vec![1.0], Default::default()).is_err());
}
