/// Where playback currently is.
///
/// Readers always get a copy; the navigator replaces the whole record on every change, so a
/// snapshot can never mix fields from two different states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PlaybackState {
    /// Current slide index.
    pub slide: usize,
    /// Current fragment on that slide.
    pub fragment: usize,
    /// Presenter view toggle; independent of position.
    pub presenter_mode: bool,
}

impl PlaybackState {
    /// Position with presenter mode off.
    pub fn at(slide: usize, fragment: usize) -> Self {
        Self {
            slide,
            fragment,
            presenter_mode: false,
        }
    }

    /// Position through the deck in `[0, 1]`, by slide.
    pub fn deck_progress(&self, slide_count: usize) -> f64 {
        if slide_count <= 1 {
            return if self.slide == 0 { 0.0 } else { 1.0 };
        }
        self.slide as f64 / (slide_count - 1) as f64
    }
}
