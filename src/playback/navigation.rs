use crate::foundation::core::{FragmentCounts, PresentationConfig};
use crate::playback::state::PlaybackState;

/// Result of a navigation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The state was replaced.
    Changed {
        /// Before.
        from: PlaybackState,
        /// After.
        to: PlaybackState,
    },
    /// `next()` at the final fragment of the final slide without looping.
    Ended,
    /// Nothing happened: out of range, already there, or an empty deck.
    Unchanged,
}

impl NavOutcome {
    /// Whether the state was replaced.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// Whether the change moved to a different slide (not only a fragment step).
    pub fn slide_changed(&self) -> bool {
        match self {
            Self::Changed { from, to } => from.slide != to.slide,
            _ => false,
        }
    }
}

type SlideChangeFn = Box<dyn FnMut(usize, usize)>;
type EndFn = Box<dyn FnMut()>;

/// Discrete state machine over [`PlaybackState`].
///
/// Every operation is total. Out-of-range requests are ignored, an empty deck makes every
/// operation a no-op, and each state change fires `on_slide_change` exactly once.
pub struct Navigator {
    config: PresentationConfig,
    fragment_counts: FragmentCounts,
    state: PlaybackState,
    loop_playback: bool,
    on_slide_change: Vec<SlideChangeFn>,
    on_end: Vec<EndFn>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("config", &self.config)
            .field("fragment_counts", &self.fragment_counts)
            .field("state", &self.state)
            .field("loop_playback", &self.loop_playback)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Start at `(0, 0)`, not looping.
    pub fn new(config: PresentationConfig, fragment_counts: FragmentCounts) -> Self {
        Self {
            config,
            fragment_counts,
            state: PlaybackState::default(),
            loop_playback: false,
            on_slide_change: Vec::new(),
            on_end: Vec::new(),
        }
    }

    /// Start from a caller-supplied position. The slide is clamped to the last slide; the
    /// fragment is taken as given.
    pub fn with_initial(mut self, slide: usize, fragment: usize) -> Self {
        let slide = self.config.last_slide().map_or(0, |last| slide.min(last));
        self.state = PlaybackState::at(slide, fragment);
        self
    }

    /// Wrap to `(0, 0)` after the last step instead of ending.
    pub fn with_loop(mut self, loop_playback: bool) -> Self {
        self.loop_playback = loop_playback;
        self
    }

    /// Called with `(slide, fragment)` after every position change.
    pub fn on_slide_change(&mut self, f: impl FnMut(usize, usize) + 'static) {
        self.on_slide_change.push(Box::new(f));
    }

    /// Called when `next()` runs past the end without looping.
    pub fn on_end(&mut self, f: impl FnMut() + 'static) {
        self.on_end.push(Box::new(f));
    }

    /// Copy of the current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current metadata.
    pub fn config(&self) -> PresentationConfig {
        self.config
    }

    /// Registered step counts.
    pub fn fragment_counts(&self) -> &FragmentCounts {
        &self.fragment_counts
    }

    /// Step count of `slide`.
    pub fn fragment_count(&self, slide: usize) -> usize {
        self.fragment_counts.get(slide)
    }

    /// Whether playback wraps.
    pub fn loop_playback(&self) -> bool {
        self.loop_playback
    }

    /// Toggle wrapping in place.
    pub fn set_loop(&mut self, loop_playback: bool) {
        self.loop_playback = loop_playback;
    }

    /// Deck progress of the current slide.
    pub fn progress(&self) -> f64 {
        self.state.deck_progress(self.config.slide_count)
    }

    /// Next fragment, else fragment 0 of the next slide, else wrap or end.
    pub fn next(&mut self) -> NavOutcome {
        if self.config.is_empty() {
            return NavOutcome::Unchanged;
        }
        let s = self.state;
        let count = self.fragment_counts.get(s.slide);

        if s.fragment + 1 < count {
            return self.replace(PlaybackState {
                fragment: s.fragment + 1,
                ..s
            });
        }
        if s.slide + 1 < self.config.slide_count {
            return self.replace(PlaybackState {
                slide: s.slide + 1,
                fragment: 0,
                ..s
            });
        }
        if self.loop_playback {
            return self.replace(PlaybackState {
                slide: 0,
                fragment: 0,
                ..s
            });
        }

        tracing::debug!(slide = s.slide, fragment = s.fragment, "end of presentation");
        for f in &mut self.on_end {
            f();
        }
        NavOutcome::Ended
    }

    /// Previous fragment, else the last fragment of the previous slide. No wrap at the start.
    pub fn prev(&mut self) -> NavOutcome {
        if self.config.is_empty() {
            return NavOutcome::Unchanged;
        }
        let s = self.state;

        if s.fragment > 0 {
            return self.replace(PlaybackState {
                fragment: s.fragment - 1,
                ..s
            });
        }
        if s.slide > 0 {
            let slide = s.slide - 1;
            return self.replace(PlaybackState {
                slide,
                fragment: self.fragment_counts.last_fragment(slide),
                ..s
            });
        }
        NavOutcome::Unchanged
    }

    /// Jump to fragment 0 of `slide`.
    pub fn go_to_slide(&mut self, slide: i64) -> NavOutcome {
        self.go_to(slide, 0)
    }

    /// Jump to `(slide, fragment)`. Ignored unless `0 <= slide < slide_count`.
    ///
    /// `fragment` is not clamped to the slide's fragment count.
    pub fn go_to(&mut self, slide: i64, fragment: usize) -> NavOutcome {
        let Ok(slide) = usize::try_from(slide) else {
            return NavOutcome::Unchanged;
        };
        if slide >= self.config.slide_count {
            return NavOutcome::Unchanged;
        }
        self.replace(PlaybackState {
            slide,
            fragment,
            ..self.state
        })
    }

    /// Flip presenter mode without moving.
    pub fn toggle_presenter_mode(&mut self) -> NavOutcome {
        if self.config.is_empty() {
            return NavOutcome::Unchanged;
        }
        self.replace(PlaybackState {
            presenter_mode: !self.state.presenter_mode,
            ..self.state
        })
    }

    /// Record the step count a slide reports once mounted.
    pub fn register_fragment_count(&mut self, slide: usize, count: usize) {
        self.fragment_counts.register(slide, count);
    }

    /// Swap in re-derived metadata. A current slide that falls outside the new range moves to
    /// fragment 0 of the new last slide.
    pub fn replace_config(&mut self, config: PresentationConfig) -> NavOutcome {
        self.config = config;
        match config.last_slide() {
            Some(last) if self.state.slide > last => self.replace(PlaybackState {
                slide: last,
                fragment: 0,
                ..self.state
            }),
            _ => NavOutcome::Unchanged,
        }
    }

    fn replace(&mut self, next: PlaybackState) -> NavOutcome {
        let prev = self.state;
        if next == prev {
            return NavOutcome::Unchanged;
        }
        self.state = next;
        tracing::debug!(
            slide = next.slide,
            fragment = next.fragment,
            presenter = next.presenter_mode,
            "playback state replaced"
        );
        if (prev.slide, prev.fragment) != (next.slide, next.fragment) {
            for f in &mut self.on_slide_change {
                f(next.slide, next.fragment);
            }
        }
        NavOutcome::Changed {
            from: prev,
            to: next,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/navigation.rs"]
mod tests;
