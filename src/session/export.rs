use crate::deck::model::Deck;
use crate::foundation::error::{DeckError, DeckResult};
use crate::playback::navigation::Navigator;
use crate::reveal::fragment::FragmentStyle;
use crate::runtime::scheduler::VirtualScheduler;
use crate::session::frame::SessionFrame;
use crate::session::opts::SessionOpts;
use crate::session::player::{PlaybackSession, SessionEvent};
use crate::transition::engine::TransitionEvent;

/// Settled look of the deck at one navigation step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepSnapshot {
    /// Zero-based step number.
    pub step: usize,
    /// Slide at this step.
    pub slide: usize,
    /// Fragment at this step.
    pub fragment: usize,
    /// Position through the deck in `[0, 1]`.
    pub deck_progress: f64,
    /// Style of every fragment on the slide.
    pub fragments: Vec<FragmentStyle>,
}

/// Every step reachable by `next()` from `(0, 0)`, in order. Needs no clock.
#[tracing::instrument(skip(deck), fields(slides = deck.slides().len()))]
pub fn export_steps(deck: &Deck) -> Vec<StepSnapshot> {
    let config = deck.config();
    if config.is_empty() {
        return Vec::new();
    }
    let mut nav = Navigator::new(config, deck.fragment_counts());
    let snapshot = |step: usize, nav: &Navigator| {
        let s = nav.state();
        StepSnapshot {
            step,
            slide: s.slide,
            fragment: s.fragment,
            deck_progress: nav.progress(),
            fragments: deck.reveal(s.slide, s.fragment),
        }
    };

    let mut out = vec![snapshot(0, &nav)];
    while nav.next().is_changed() {
        out.push(snapshot(out.len(), &nav));
    }
    tracing::debug!(steps = out.len(), "steps exported");
    out
}

/// Frames of the change `from -> to`, sampled on virtual time every `frame_interval_ms` until the
/// transition settles. The first frame is taken right after the change, the last once idle.
#[tracing::instrument(skip(deck))]
pub fn sample_transition(
    deck: &Deck,
    from: usize,
    to: usize,
    frame_interval_ms: f64,
) -> DeckResult<Vec<SessionFrame>> {
    let slide_count = deck.config().slide_count;
    if from >= slide_count || to >= slide_count {
        return Err(DeckError::validation(format!(
            "slides {from} -> {to} out of range for a {slide_count}-slide deck"
        )));
    }

    let opts = SessionOpts {
        initial_slide: from,
        frame_interval_ms,
        ..SessionOpts::default()
    };
    let mut session = PlaybackSession::new(deck.clone(), opts, VirtualScheduler::new())?;
    session.go_to_slide(to as i64);

    let mut frames = vec![session.frame()];
    while session.engine().is_transitioning() {
        let Some(events) = session.pump(f64::INFINITY) else {
            break;
        };
        let sampled = events.iter().any(|e| {
            matches!(
                e,
                SessionEvent::Transition(TransitionEvent::Frame { .. } | TransitionEvent::Settled { .. })
            )
        });
        if sampled {
            frames.push(session.frame());
        }
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/session/export.rs"]
mod tests;
