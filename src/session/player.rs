use crate::deck::model::Deck;
use crate::foundation::error::{DeckError, DeckResult};
use crate::playback::autoplay::Autoplay;
use crate::playback::input::{Intent, Key};
use crate::playback::navigation::{NavOutcome, Navigator};
use crate::playback::state::PlaybackState;
use crate::runtime::scheduler::{Scheduler, Wake};
use crate::session::frame::{RenderedLayer, SessionFrame};
use crate::session::opts::SessionOpts;
use crate::transition::engine::{LayerRole, TransitionEngine, TransitionEvent};

/// Something observable that happened during a session call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Position or presenter mode changed.
    Navigated {
        /// Before.
        from: PlaybackState,
        /// After.
        to: PlaybackState,
    },
    /// `next()` at the end without looping.
    Ended,
    /// Engine event.
    Transition(TransitionEvent),
    /// Fullscreen toggled.
    Fullscreen {
        /// New value.
        active: bool,
    },
    /// Autoplay paused or resumed.
    Autoplay {
        /// New value.
        paused: bool,
    },
}

/// One running presentation: the deck, its navigator, the transition engine, and autoplay,
/// all driven by a single scheduler.
///
/// Every consumer reads state from here instead of from shared ambient context. Intents apply
/// synchronously; timed work (transition frames, autoplay ticks) runs only inside
/// [`PlaybackSession::run_until`] and [`PlaybackSession::pump`].
#[derive(Debug)]
pub struct PlaybackSession<S: Scheduler> {
    deck: Deck,
    navigator: Navigator,
    engine: TransitionEngine,
    autoplay: Option<Autoplay>,
    fullscreen: bool,
    exit_fragment: usize,
    scheduler: S,
}

impl<S: Scheduler> PlaybackSession<S> {
    /// Start a session. Fails on invalid `opts` or an initial slide outside a non-empty deck.
    #[tracing::instrument(skip(deck, scheduler), fields(slides = deck.slides().len()))]
    pub fn new(deck: Deck, opts: SessionOpts, mut scheduler: S) -> DeckResult<Self> {
        opts.validate()?;
        let slide_count = deck.slides().len();
        if slide_count > 0 && opts.initial_slide >= slide_count {
            return Err(DeckError::validation(format!(
                "initial slide {} out of range for a {slide_count}-slide deck",
                opts.initial_slide
            )));
        }
        let navigator = Navigator::new(deck.config(), deck.fragment_counts())
            .with_initial(opts.initial_slide, opts.initial_fragment)
            .with_loop(opts.loop_playback);
        let engine = TransitionEngine::new(deck.transitions().to_vec(), opts.initial_slide)
            .with_frame_interval(opts.frame_interval_ms);
        let autoplay = opts.autoplay_interval_ms.map(|ms| {
            let mut a = Autoplay::new(ms);
            a.resume(&mut scheduler);
            a
        });

        Ok(Self {
            deck,
            navigator,
            engine,
            autoplay,
            fullscreen: false,
            exit_fragment: opts.initial_fragment,
            scheduler,
        })
    }

    /// The deck being played.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current navigation state.
    pub fn state(&self) -> PlaybackState {
        self.navigator.state()
    }

    /// Navigation state machine.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Transition engine.
    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// Underlying scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Underlying scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Scheduler time.
    pub fn now_ms(&self) -> f64 {
        self.scheduler.now_ms()
    }

    /// Fullscreen flag.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// See [`Navigator::on_slide_change`].
    pub fn on_slide_change(&mut self, f: impl FnMut(usize, usize) + 'static) {
        self.navigator.on_slide_change(f);
    }

    /// See [`Navigator::on_end`].
    pub fn on_end(&mut self, f: impl FnMut() + 'static) {
        self.navigator.on_end(f);
    }

    /// Advance one step.
    pub fn next(&mut self) -> Vec<SessionEvent> {
        let outcome = self.navigator.next();
        self.apply(outcome)
    }

    /// Go back one step.
    pub fn prev(&mut self) -> Vec<SessionEvent> {
        let outcome = self.navigator.prev();
        self.apply(outcome)
    }

    /// Jump to `(slide, fragment)`; ignored when out of range.
    pub fn go_to(&mut self, slide: i64, fragment: usize) -> Vec<SessionEvent> {
        let outcome = self.navigator.go_to(slide, fragment);
        self.apply(outcome)
    }

    /// Jump to fragment 0 of `slide`.
    pub fn go_to_slide(&mut self, slide: i64) -> Vec<SessionEvent> {
        self.go_to(slide, 0)
    }

    /// Flip presenter mode.
    pub fn toggle_presenter_mode(&mut self) -> Vec<SessionEvent> {
        let outcome = self.navigator.toggle_presenter_mode();
        self.apply(outcome)
    }

    /// Set fullscreen; emits only on change.
    pub fn set_fullscreen(&mut self, active: bool) -> Vec<SessionEvent> {
        if self.fullscreen == active {
            return Vec::new();
        }
        self.fullscreen = active;
        vec![SessionEvent::Fullscreen { active }]
    }

    /// Apply an input intent.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<SessionEvent> {
        match intent {
            Intent::Next => self.next(),
            Intent::Prev => self.prev(),
            Intent::GoTo { slide, fragment } => self.go_to(slide, fragment),
            Intent::TogglePresenterMode => self.toggle_presenter_mode(),
            Intent::ToggleFullscreen => self.set_fullscreen(!self.fullscreen),
            Intent::ExitFullscreen => self.set_fullscreen(false),
        }
    }

    /// Map and apply a key press.
    pub fn handle_key(&mut self, key: Key) -> Vec<SessionEvent> {
        let slide_count = self.navigator.config().slide_count;
        match Intent::from_key(key, slide_count, self.fullscreen) {
            Some(intent) => self.dispatch(intent),
            None => Vec::new(),
        }
    }

    /// Map and apply a click at horizontal position `x`.
    pub fn handle_click(&mut self, x: f64) -> Vec<SessionEvent> {
        let width = f64::from(self.navigator.config().width);
        self.dispatch(Intent::from_click(x, width))
    }

    /// True when paused or when autoplay is off.
    pub fn is_autoplay_paused(&self) -> bool {
        self.autoplay.as_ref().is_none_or(Autoplay::is_paused)
    }

    /// Stop autoplay ticks. Transitions already running continue.
    pub fn pause(&mut self) -> Vec<SessionEvent> {
        match &mut self.autoplay {
            Some(a) if !a.is_paused() => {
                a.pause();
                vec![SessionEvent::Autoplay { paused: true }]
            }
            _ => Vec::new(),
        }
    }

    /// Restart autoplay ticks.
    pub fn resume(&mut self) -> Vec<SessionEvent> {
        match &mut self.autoplay {
            Some(a) if a.is_paused() => {
                a.resume(&mut self.scheduler);
                vec![SessionEvent::Autoplay { paused: false }]
            }
            _ => Vec::new(),
        }
    }

    /// Deliver the next wake due by `deadline_ms`. `None` once nothing more is due; time then
    /// stands at the deadline.
    pub fn pump(&mut self, deadline_ms: f64) -> Option<Vec<SessionEvent>> {
        let wake = self.scheduler.next_wake(deadline_ms)?;
        let events = match wake {
            Wake::TransitionFrame { generation } => self
                .engine
                .on_frame(generation, &mut self.scheduler)
                .map(SessionEvent::Transition)
                .into_iter()
                .collect(),
            Wake::AutoplayTick { generation } => {
                let fire = self
                    .autoplay
                    .as_mut()
                    .is_some_and(|a| a.on_tick(generation, &mut self.scheduler));
                if fire { self.next() } else { Vec::new() }
            }
        };
        Some(events)
    }

    /// Process every wake due by `deadline_ms`, in order.
    pub fn run_until(&mut self, deadline_ms: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Some(batch) = self.pump(deadline_ms) {
            events.extend(batch);
        }
        events
    }

    /// [`PlaybackSession::run_until`] `duration_ms` from now.
    pub fn run_for(&mut self, duration_ms: f64) -> Vec<SessionEvent> {
        let deadline = self.scheduler.now_ms() + duration_ms.max(0.0);
        self.run_until(deadline)
    }

    /// Run until the current transition settles or is replaced by a newer change. No-op while
    /// idle.
    pub fn settle(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let generation = self.engine.generation();
        while self.engine.is_transitioning() && self.engine.generation() == generation {
            match self.pump(f64::INFINITY) {
                Some(batch) => events.extend(batch),
                None => break,
            }
        }
        events
    }

    /// Snapshot of what should be on screen now.
    pub fn frame(&self) -> SessionFrame {
        let state = self.navigator.state();
        let layers = if self.deck.slides().is_empty() {
            Vec::new()
        } else {
            self.engine
                .layers()
                .into_iter()
                .map(|l| {
                    let fragment = match l.role {
                        LayerRole::Exiting => self.exit_fragment,
                        LayerRole::Entering | LayerRole::Current => state.fragment,
                    };
                    RenderedLayer {
                        slide: l.slide,
                        role: l.role,
                        z_index: l.z_index,
                        fragment,
                        style: l.style,
                        fragments: self.deck.reveal(l.slide, fragment),
                    }
                })
                .collect()
        };

        SessionFrame {
            time_ms: self.scheduler.now_ms(),
            state,
            fullscreen: self.fullscreen,
            transition_progress: self
                .engine
                .is_transitioning()
                .then(|| self.engine.progress()),
            layers,
        }
    }

    fn apply(&mut self, outcome: NavOutcome) -> Vec<SessionEvent> {
        match outcome {
            NavOutcome::Unchanged => Vec::new(),
            NavOutcome::Ended => vec![SessionEvent::Ended],
            NavOutcome::Changed { from, to } => {
                let mut events = vec![SessionEvent::Navigated { from, to }];
                if from.slide != to.slide {
                    self.exit_fragment = from.fragment;
                    events.extend(
                        self.engine
                            .observe(to.slide, &mut self.scheduler)
                            .into_iter()
                            .map(SessionEvent::Transition),
                    );
                }
                events
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
