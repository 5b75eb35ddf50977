use crate::runtime::scheduler::{CancelToken, Scheduler, Wake};

/// Periodic advance timer. Pausing only stops ticks; it never touches transitions.
#[derive(Debug)]
pub struct Autoplay {
    interval_ms: f64,
    paused: bool,
    generation: u64,
    pending: Option<CancelToken>,
}

impl Autoplay {
    /// A paused timer; call [`Autoplay::resume`] to start ticking.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as f64,
            paused: true,
            generation: 0,
            pending: None,
        }
    }

    /// Tick period.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// True until resumed, and after [`Autoplay::pause`].
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Cancel the pending tick.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.cancel_pending();
        tracing::debug!("autoplay paused");
    }

    /// Start ticking again; the first tick lands a full interval from now.
    pub fn resume(&mut self, sched: &mut dyn Scheduler) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.arm(sched);
        tracing::debug!(interval_ms = self.interval_ms, "autoplay resumed");
    }

    /// Handle a due tick. Returns `true` when playback should advance.
    pub fn on_tick(&mut self, generation: u64, sched: &mut dyn Scheduler) -> bool {
        if self.paused || generation != self.generation {
            return false;
        }
        self.arm(sched);
        true
    }

    fn arm(&mut self, sched: &mut dyn Scheduler) {
        self.cancel_pending();
        self.generation += 1;
        let token = sched.schedule(
            self.interval_ms,
            Wake::AutoplayTick {
                generation: self.generation,
            },
        );
        self.pending = Some(token);
    }

    fn cancel_pending(&mut self) {
        if let Some(tok) = self.pending.take() {
            tok.cancel();
        }
    }
}
