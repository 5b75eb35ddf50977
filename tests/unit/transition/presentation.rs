use super::*;

#[test]
fn fade_blends_between_endpoints() {
    let p = TransitionPresentation::Fade {
        enter_from: 0.2,
        exit_to: 0.5,
    };
    assert_eq!(p.enter(0.0).opacity, Some(0.2));
    assert_eq!(p.enter(1.0).opacity, Some(1.0));
    assert_eq!(p.exit(0.0).opacity, Some(1.0));
    assert_eq!(p.exit(1.0).opacity, Some(0.5));
    assert_eq!(fade().enter(0.5).to_css(), "opacity: 0.5");
}

#[test]
fn slide_from_right_enters_from_positive_x() {
    let p = slide(SlideDirection::FromRight);
    assert_eq!(
        p.enter(0.25).transform,
        Some(LayerTransform::TranslatePercent(Vec2::new(75.0, 0.0)))
    );
    assert_eq!(
        p.exit(0.25).transform,
        Some(LayerTransform::TranslatePercent(Vec2::new(-25.0, 0.0)))
    );
    assert_eq!(p.exit(0.25).to_css(), "transform: translateX(-25%)");
}

#[test]
fn slide_vertical_directions_use_y_axis() {
    let top = slide(SlideDirection::FromTop);
    assert_eq!(top.enter(0.5).to_css(), "transform: translateY(-50%)");
    assert_eq!(top.exit(0.5).to_css(), "transform: translateY(50%)");
    let bottom = slide(SlideDirection::FromBottom);
    assert_eq!(bottom.enter(0.0).to_css(), "transform: translateY(100%)");
}

#[test]
fn wipe_reveals_entering_layer_from_one_edge() {
    let p = wipe(WipeDirection::Left);
    assert_eq!(p.enter(0.25).clip, Some(Insets::new(0.0, 0.0, 75.0, 0.0)));
    assert_eq!(p.exit(0.25).clip, Some(Insets::new(0.0, 0.0, 25.0, 0.0)));
    assert_eq!(
        p.enter(0.25).to_css(),
        "clip-path: inset(0% 75% 0% 0%)"
    );
    assert_eq!(
        wipe(WipeDirection::Down).enter(0.5).to_css(),
        "clip-path: inset(50% 0% 0% 0%)"
    );
    assert_eq!(
        wipe(WipeDirection::Up).enter(0.0).clip,
        Some(Insets::new(0.0, 0.0, 0.0, 100.0))
    );
}

#[test]
fn flip_rotates_through_ninety_degrees() {
    let p = flip(FlipAxis::Horizontal);
    let enter = p.enter(0.5);
    assert!(enter.backface_hidden);
    assert_eq!(
        enter.to_css(),
        "transform: perspective(1000px) rotateY(-45deg); backface-visibility: hidden"
    );
    assert_eq!(
        flip(FlipAxis::Vertical).exit(1.0).to_css(),
        "transform: perspective(1000px) rotateX(90deg); backface-visibility: hidden"
    );
}

#[test]
fn presentation_parses_with_field_defaults() {
    let p: TransitionPresentation = serde_json::from_str(r#"{"kind":"flip"}"#).unwrap();
    assert_eq!(p, flip(FlipAxis::Horizontal));
    let p: TransitionPresentation =
        serde_json::from_str(r#"{"kind":"slide","direction":"from-left"}"#).unwrap();
    assert_eq!(p, slide(SlideDirection::FromLeft));
}

#[test]
fn validate_rejects_out_of_range_fade_and_bad_perspective() {
    let bad = TransitionPresentation::Fade {
        enter_from: 1.5,
        exit_to: 0.0,
    };
    assert!(bad.validate().is_err());
    let bad = TransitionPresentation::Flip {
        direction: FlipAxis::Vertical,
        perspective_px: 0.0,
    };
    assert!(bad.validate().is_err());
    assert!(wipe(WipeDirection::Right).validate().is_ok());
}
