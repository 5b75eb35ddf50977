use crate::foundation::error::{DeckError, DeckResult};
use crate::transition::engine::DEFAULT_FRAME_INTERVAL_MS;

/// Options for [`PlaybackSession::new`](crate::PlaybackSession::new).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// Starting slide. Must lie inside a non-empty deck.
    pub initial_slide: usize,
    /// Starting fragment, taken as given.
    pub initial_fragment: usize,
    /// Wrap from the last step back to `(0, 0)` instead of ending.
    pub loop_playback: bool,
    /// Advance every N milliseconds when set. Autoplay starts running immediately.
    pub autoplay_interval_ms: Option<u64>,
    /// Sampling period of the transition loop.
    pub frame_interval_ms: f64,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            initial_slide: 0,
            initial_fragment: 0,
            loop_playback: false,
            autoplay_interval_ms: None,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl SessionOpts {
    /// Reject a non-positive frame interval and a zero autoplay interval.
    pub fn validate(&self) -> DeckResult<()> {
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms > 0.0) {
            return Err(DeckError::validation(
                "frame_interval_ms must be finite and > 0",
            ));
        }
        if self.autoplay_interval_ms == Some(0) {
            return Err(DeckError::validation("autoplay_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// Enable autoplay every `interval_ms`.
    pub fn with_autoplay(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = Some(interval_ms);
        self
    }

    /// Set [`SessionOpts::loop_playback`].
    pub fn with_loop(mut self, loop_playback: bool) -> Self {
        self.loop_playback = loop_playback;
        self
    }

    /// Set the transition sampling period.
    pub fn with_frame_interval(mut self, frame_interval_ms: f64) -> Self {
        self.frame_interval_ms = frame_interval_ms;
        self
    }
}
