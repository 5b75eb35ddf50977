use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::runtime::clock::{Clock, ManualClock, SystemClock};

/// The callback a scheduled entry stands for. Owners dispatch on it when it comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wake {
    /// Sample the running transition.
    TransitionFrame {
        /// Loop the frame belongs to.
        generation: u64,
    },
    /// Advance autoplay.
    AutoplayTick {
        /// Timer arming the tick belongs to.
        generation: u64,
    },
}

/// Handle to a scheduled entry. Cancelling is idempotent; clones share the flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Mark the entry dead; it is skipped when it comes due.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Whether [`CancelToken::cancel`] was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Single-threaded timer queue paired with a clock.
pub trait Scheduler {
    /// Current time of the underlying clock.
    fn now_ms(&self) -> f64;

    /// Deliver `wake` once `delay_ms` has passed.
    fn schedule(&mut self, delay_ms: f64, wake: Wake) -> CancelToken;

    /// Earliest live entry due at or before `deadline_ms`, after time has reached its due point.
    /// Returns `None` once nothing is due before the deadline.
    fn next_wake(&mut self, deadline_ms: f64) -> Option<Wake>;

    /// Live (uncancelled) entries.
    fn pending(&self) -> usize;
}

#[derive(Debug)]
struct Entry {
    due_ms: f64,
    seq: u64,
    wake: Wake,
    token: CancelToken,
}

#[derive(Debug, Default)]
struct TimerQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    fn push(&mut self, due_ms: f64, wake: Wake) -> CancelToken {
        let token = CancelToken::default();
        self.entries.push(Entry {
            due_ms,
            seq: self.next_seq,
            wake,
            token: token.clone(),
        });
        self.next_seq += 1;
        token
    }

    /// Position of the earliest live entry; ties go to the first scheduled.
    fn peek(&mut self) -> Option<(usize, f64)> {
        self.entries.retain(|e| !e.token.is_cancelled());
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, e)| (i, e.due_ms))
    }

    fn take(&mut self, idx: usize) -> Wake {
        self.entries.swap_remove(idx).wake
    }

    fn live(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }
}

/// Scheduler on virtual time: waiting is instantaneous, so sampling loops run without sleeping.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    clock: ManualClock,
    queue: TimerQueue,
}

impl VirtualScheduler {
    /// Scheduler on a fresh [`ManualClock`] at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler sharing an existing virtual clock.
    pub fn with_clock(clock: ManualClock) -> Self {
        Self {
            clock,
            queue: TimerQueue::default(),
        }
    }

    /// The virtual clock.
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }
}

impl Scheduler for VirtualScheduler {
    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    fn schedule(&mut self, delay_ms: f64, wake: Wake) -> CancelToken {
        self.queue.push(self.clock.now_ms() + delay_ms.max(0.0), wake)
    }

    fn next_wake(&mut self, deadline_ms: f64) -> Option<Wake> {
        match self.queue.peek() {
            Some((idx, due)) if due <= deadline_ms => {
                self.clock.set(due);
                Some(self.queue.take(idx))
            }
            _ => {
                if deadline_ms.is_finite() {
                    self.clock.set(deadline_ms);
                }
                None
            }
        }
    }

    fn pending(&self) -> usize {
        self.queue.live()
    }
}

/// Scheduler on a real clock that blocks the calling thread until entries come due.
#[derive(Debug, Default)]
pub struct RealtimeScheduler<C = SystemClock> {
    clock: C,
    queue: TimerQueue,
}

impl RealtimeScheduler<SystemClock> {
    /// Scheduler on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C: Clock> RealtimeScheduler<C> {
    /// Scheduler on any clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            queue: TimerQueue::default(),
        }
    }

    fn sleep_until(&self, target_ms: f64) {
        let wait = target_ms - self.clock.now_ms();
        if wait > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(wait / 1000.0));
        }
    }
}

impl<C: Clock> Scheduler for RealtimeScheduler<C> {
    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    fn schedule(&mut self, delay_ms: f64, wake: Wake) -> CancelToken {
        self.queue.push(self.clock.now_ms() + delay_ms.max(0.0), wake)
    }

    fn next_wake(&mut self, deadline_ms: f64) -> Option<Wake> {
        match self.queue.peek() {
            Some((idx, due)) if due <= deadline_ms => {
                self.sleep_until(due);
                Some(self.queue.take(idx))
            }
            _ => {
                if deadline_ms.is_finite() {
                    self.sleep_until(deadline_ms);
                }
                None
            }
        }
    }

    fn pending(&self) -> usize {
        self.queue.live()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;
