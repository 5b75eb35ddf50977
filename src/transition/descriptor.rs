use crate::transition::presentation::TransitionPresentation;
use crate::transition::timing::TransitionTiming;

/// Effect bound to the boundary between slides `after_slide_index` and `after_slide_index + 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionDescriptor {
    /// Visual effect.
    pub presentation: TransitionPresentation,
    /// Progress over time.
    #[serde(default)]
    pub timing: TransitionTiming,
    /// Lower slide of the boundary.
    pub after_slide_index: usize,
}

impl TransitionDescriptor {
    /// Bind `presentation` and `timing` after `after_slide_index`.
    pub fn new(
        presentation: TransitionPresentation,
        timing: TransitionTiming,
        after_slide_index: usize,
    ) -> Self {
        Self {
            presentation,
            timing,
            after_slide_index,
        }
    }

    /// Whether this descriptor handles a change between `from` and `to`, in either direction.
    pub fn covers(&self, from: usize, to: usize) -> bool {
        self.after_slide_index == from.min(to)
    }
}

/// The descriptor keyed by the lower of the two slide indices, if any.
pub fn find_transition(
    transitions: &[TransitionDescriptor],
    from: usize,
    to: usize,
) -> Option<&TransitionDescriptor> {
    transitions.iter().find(|t| t.covers(from, to))
}
