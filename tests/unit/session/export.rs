use super::*;
use crate::deck::builder::{DeckBuilder, SlideBuilder};
use crate::foundation::core::Canvas;
use crate::reveal::fragment::FragmentSpec;
use crate::transition::presentation::{WipeDirection, wipe};
use crate::transition::timing::linear_timing;

fn deck() -> Deck {
    DeckBuilder::new(Canvas::default())
        .slide(SlideBuilder::new().fragment(FragmentSpec::at(1)))
        .transition(wipe(WipeDirection::Left), Some(linear_timing(100.0)))
        .slide(SlideBuilder::new().fragment_count(2))
        .build()
        .unwrap()
}

#[test]
fn steps_walk_every_fragment_once() {
    let steps = export_steps(&deck());
    let pairs: Vec<_> = steps.iter().map(|s| (s.slide, s.fragment)).collect();
    assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(steps[0].fragments.len(), 1);
    assert!(!steps[0].fragments[0].visible);
    assert!(steps[1].fragments[0].visible);
    assert_eq!(steps[3].deck_progress, 1.0);
    assert_eq!(steps[3].step, 3);
}

#[test]
fn steps_are_identical_across_runs() {
    let d = deck();
    assert_eq!(export_steps(&d), export_steps(&d));
}

#[test]
fn transition_samples_until_settled() {
    let frames = sample_transition(&deck(), 0, 1, 25.0).unwrap();
    let progress: Vec<_> = frames.iter().map(|f| f.transition_progress).collect();
    assert_eq!(
        progress,
        vec![Some(0.0), Some(0.25), Some(0.5), Some(0.75), None]
    );
    assert_eq!(frames[0].layers.len(), 2);
    assert_eq!(frames.last().map(|f| f.layers.len()), Some(1));
    assert_eq!(frames.last().map(|f| f.time_ms), Some(100.0));
}

#[test]
fn transition_sampling_rejects_unknown_slides() {
    assert!(sample_transition(&deck(), 0, 9, 16.0).is_err());
}

#[test]
fn cut_yields_a_single_frame() {
    let d = DeckBuilder::new(Canvas::default())
        .slide(SlideBuilder::new())
        .slide(SlideBuilder::new())
        .build()
        .unwrap();
    let frames = sample_transition(&d, 1, 0, 16.0).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].transition_progress, None);
}
