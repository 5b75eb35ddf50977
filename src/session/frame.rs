use crate::playback::state::PlaybackState;
use crate::reveal::fragment::FragmentStyle;
use crate::transition::engine::LayerRole;
use crate::transition::presentation::LayerStyle;

/// One slide in the output stack, ready for a renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedLayer {
    /// Slide index.
    pub slide: usize,
    /// Part this slide plays right now.
    pub role: LayerRole,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
    /// Fragment this slide is shown at. For an exiting slide, the one it was left at.
    pub fragment: usize,
    /// Transition style for the whole slide.
    pub style: LayerStyle,
    /// Fragment styles at [`RenderedLayer::fragment`].
    pub fragments: Vec<FragmentStyle>,
}

/// Everything a renderer needs at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionFrame {
    /// Scheduler time of the snapshot.
    pub time_ms: f64,
    /// Navigation state.
    pub state: PlaybackState,
    /// Fullscreen flag.
    pub fullscreen: bool,
    /// `Some` only while a transition runs.
    pub transition_progress: Option<f64>,
    /// One layer while idle, two during a transition; empty for an empty deck.
    pub layers: Vec<RenderedLayer>,
}

impl SessionFrame {
    /// First layer with `role`.
    pub fn layer(&self, role: LayerRole) -> Option<&RenderedLayer> {
        self.layers.iter().find(|l| l.role == role)
    }
}
