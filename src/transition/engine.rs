use crate::runtime::scheduler::{CancelToken, Scheduler, Wake};
use crate::transition::descriptor::{TransitionDescriptor, find_transition};
use crate::transition::presentation::LayerStyle;

/// Frame period at 60 fps.
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Part a slide plays in the layer stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    /// The only layer while idle.
    Current,
    /// Slide being transitioned to.
    Entering,
    /// Slide being transitioned away from.
    Exiting,
}

/// One slide of the absolute-fill stack, with its z-order and transition style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionLayer {
    /// Slide index.
    pub slide: usize,
    /// Role in the stack.
    pub role: LayerRole,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
    /// Transition style at the current progress.
    pub style: LayerStyle,
}

/// Observable engine output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// A curve began at progress 0.
    Started {
        /// Slide being left.
        from: usize,
        /// Slide being entered.
        to: usize,
    },
    /// A frame was sampled.
    Frame {
        /// Slide being left.
        from: usize,
        /// Slide being entered.
        to: usize,
        /// Timing output at this frame.
        progress: f64,
    },
    /// Terminal: emitted exactly once per transition that runs to completion.
    Settled {
        /// Slide left.
        from: usize,
        /// Slide now current.
        to: usize,
    },
    /// A newer slide change replaced this transition before it settled.
    Interrupted {
        /// Slide being left.
        from: usize,
        /// Slide that was being entered.
        to: usize,
        /// Progress reached before the interruption.
        progress: f64,
    },
    /// Slide change with no descriptor for its boundary.
    Cut {
        /// Slide left.
        from: usize,
        /// Slide now current.
        to: usize,
    },
}

/// The transition currently running.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveTransition {
    /// Slide being left.
    pub from: usize,
    /// Slide being entered.
    pub to: usize,
    /// Effect and timing in use.
    pub descriptor: TransitionDescriptor,
    /// Scheduler time the curve started at.
    pub started_ms: f64,
    /// Last sampled progress.
    pub progress: f64,
}

impl ActiveTransition {
    /// Moving to a higher slide index.
    pub fn is_forward(&self) -> bool {
        self.to > self.from
    }
}

/// Engine state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TransitionPhase {
    /// One slide on screen.
    #[default]
    Idle,
    /// Two slides on screen.
    Transitioning(ActiveTransition),
}

/// Idle / Transitioning state machine sampled on wall-clock frames.
///
/// Only slide-index changes matter here; fragment steps never start a transition. A change that
/// arrives mid-transition abandons the running curve and restarts from progress 0 for the latest
/// pair. Frame wakes carry a generation so that the abandoned loop's wakes are dropped.
#[derive(Debug)]
pub struct TransitionEngine {
    transitions: Vec<TransitionDescriptor>,
    frame_interval_ms: f64,
    observed_slide: usize,
    phase: TransitionPhase,
    generation: u64,
    pending: Option<CancelToken>,
}

impl TransitionEngine {
    /// Idle engine resting on `initial_slide`.
    pub fn new(transitions: Vec<TransitionDescriptor>, initial_slide: usize) -> Self {
        Self {
            transitions,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            observed_slide: initial_slide,
            phase: TransitionPhase::Idle,
            generation: 0,
            pending: None,
        }
    }

    /// Sampling period; non-positive or non-finite values keep the default.
    pub fn with_frame_interval(mut self, frame_interval_ms: f64) -> Self {
        if frame_interval_ms.is_finite() && frame_interval_ms > 0.0 {
            self.frame_interval_ms = frame_interval_ms;
        }
        self
    }

    /// Known descriptors.
    pub fn transitions(&self) -> &[TransitionDescriptor] {
        &self.transitions
    }

    /// Sampling period.
    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Slide most recently passed to [`TransitionEngine::observe`].
    pub fn observed_slide(&self) -> usize {
        self.observed_slide
    }

    /// Bumped each time a transition starts; identifies the running loop.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a curve runs.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, TransitionPhase::Transitioning(_))
    }

    /// Current progress; `1.0` whenever idle.
    pub fn progress(&self) -> f64 {
        match self.phase {
            TransitionPhase::Idle => 1.0,
            TransitionPhase::Transitioning(a) => a.progress,
        }
    }

    /// React to the current slide. Returns the events this change produced, oldest first.
    pub fn observe(&mut self, slide: usize, sched: &mut dyn Scheduler) -> Vec<TransitionEvent> {
        if slide == self.observed_slide {
            return Vec::new();
        }
        let from = std::mem::replace(&mut self.observed_slide, slide);
        let mut events = Vec::new();
        if let Some(ev) = self.cancel() {
            events.push(ev);
        }

        let Some(descriptor) = find_transition(&self.transitions, from, slide).copied() else {
            tracing::debug!(from, to = slide, "cut");
            events.push(TransitionEvent::Cut { from, to: slide });
            return events;
        };

        let started_ms = sched.now_ms();
        self.phase = TransitionPhase::Transitioning(ActiveTransition {
            from,
            to: slide,
            descriptor,
            started_ms,
            progress: 0.0,
        });
        self.generation += 1;
        self.arm(sched);
        tracing::debug!(
            from,
            to = slide,
            duration_ms = descriptor.timing.duration_ms(),
            "transition started"
        );
        events.push(TransitionEvent::Started { from, to: slide });
        events
    }

    /// Sample a due frame wake. Wakes from abandoned loops yield `None`.
    pub fn on_frame(
        &mut self,
        generation: u64,
        sched: &mut dyn Scheduler,
    ) -> Option<TransitionEvent> {
        if generation != self.generation {
            return None;
        }
        let TransitionPhase::Transitioning(active) = &mut self.phase else {
            return None;
        };

        let timing = active.descriptor.timing;
        let elapsed = sched.now_ms() - active.started_ms;
        let (from, to) = (active.from, active.to);

        if elapsed >= timing.duration_ms() {
            self.phase = TransitionPhase::Idle;
            self.pending = None;
            tracing::debug!(from, to, elapsed_ms = elapsed, "transition settled");
            return Some(TransitionEvent::Settled { from, to });
        }

        active.progress = timing.progress(elapsed);
        let progress = active.progress;
        self.arm(sched);
        Some(TransitionEvent::Frame { from, to, progress })
    }

    /// Abandon a running transition. The outgoing loop's wakes become stale.
    pub fn cancel(&mut self) -> Option<TransitionEvent> {
        let TransitionPhase::Transitioning(active) = std::mem::take(&mut self.phase) else {
            return None;
        };
        if let Some(tok) = self.pending.take() {
            tok.cancel();
        }
        tracing::debug!(
            from = active.from,
            to = active.to,
            progress = active.progress,
            "transition interrupted"
        );
        Some(TransitionEvent::Interrupted {
            from: active.from,
            to: active.to,
            progress: active.progress,
        })
    }

    /// The layer stack for the observed slide. Exiting layer first.
    pub fn layers(&self) -> Vec<TransitionLayer> {
        match self.phase {
            TransitionPhase::Idle => vec![TransitionLayer {
                slide: self.observed_slide,
                role: LayerRole::Current,
                z_index: 1,
                style: LayerStyle::default(),
            }],
            TransitionPhase::Transitioning(a) => {
                let forward = a.is_forward();
                let presentation = a.descriptor.presentation;
                vec![
                    TransitionLayer {
                        slide: a.from,
                        role: LayerRole::Exiting,
                        z_index: if forward { 1 } else { 2 },
                        style: presentation.exit(a.progress),
                    },
                    TransitionLayer {
                        slide: a.to,
                        role: LayerRole::Entering,
                        z_index: if forward { 2 } else { 1 },
                        style: presentation.enter(a.progress),
                    },
                ]
            }
        }
    }

    fn arm(&mut self, sched: &mut dyn Scheduler) {
        let token = sched.schedule(
            self.frame_interval_ms,
            Wake::TransitionFrame {
                generation: self.generation,
            },
        );
        self.pending = Some(token);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/engine.rs"]
mod tests;
