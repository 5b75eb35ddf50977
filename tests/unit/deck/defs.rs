use super::*;
use crate::DeckError;
use crate::transition::presentation::{SlideDirection, slide};

const SAMPLE: &str = r#"{
  "width": 1280,
  "height": 720,
  "items": [
    { "slide": { "name": "intro", "fragments": [
        { "animation": "slide-up" },
        { "spring": "snappy" },
        { "at": 4, "animation": "scale", "spring": { "damping": 5 } }
    ] } },
    { "transition": { "presentation": { "kind": "slide", "direction": "from-left" },
                      "timing": { "kind": "eased", "duration_ms": 450, "easing": "ease-out" } } },
    { "slide": { "fragment_count": 2 } },
    { "transition": { "presentation": { "kind": "flip" }, "timing": { "kind": "spring" } } },
    { "slide": {} }
  ]
}"#;

#[test]
fn sample_deck_assembles() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    assert_eq!(deck.canvas(), Canvas { width: 1280, height: 720 });
    assert_eq!(deck.fragment_counts().as_slice(), &[5, 2, 1]);

    let intro = &deck.slides()[0];
    assert_eq!(intro.name.as_deref(), Some("intro"));
    assert_eq!(intro.fragments[0].at, 0);
    assert_eq!(intro.fragments[1].at, 1);
    assert_eq!(intro.fragments[1].spring, SpringConfig::SNAPPY);
    assert_eq!(intro.fragments[2].spring.damping, 5.0);
    assert_eq!(intro.fragments[2].spring.stiffness, 100.0);

    let ts = deck.transitions();
    assert_eq!(ts[0].presentation, slide(SlideDirection::FromLeft));
    assert_eq!(ts[0].timing, eased_timing(450.0, NamedEasing::EaseOut));
    assert_eq!(ts[1].after_slide_index, 1);
    assert_eq!(ts[1].timing, spring_timing(None, None));
}

#[test]
fn canvas_defaults_when_omitted() {
    let def = DeckDef::from_json(r#"{"items":[{"slide":{}}]}"#).unwrap();
    assert_eq!((def.width, def.height), (1920, 1080));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Deck::from_json(r#"{"items":[{"bogus":{}}]}"#).unwrap_err();
    assert!(matches!(err, DeckError::Serde(_)));
}

#[test]
fn leading_transition_is_a_validation_error() {
    let err = Deck::from_json(r#"{"items":[{"transition":{"presentation":{"kind":"fade"}}}]}"#)
        .unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));
}

#[test]
fn definitions_survive_pretty_json() {
    let def = DeckDef::from_json(SAMPLE).unwrap();
    let again = DeckDef::from_json(&def.to_json_pretty().unwrap()).unwrap();
    assert_eq!(def, again);
}
