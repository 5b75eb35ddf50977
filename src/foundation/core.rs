pub use kurbo::{Insets, Vec2};

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Pixels.
    pub width: u32,
    /// Pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Session-wide presentation metadata.
///
/// Treated as immutable while a session runs. A parent that re-derives metadata swaps the whole
/// value via [`Navigator::replace_config`](crate::Navigator::replace_config); it is never patched
/// field by field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PresentationConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Number of slides; `0` makes every navigation a no-op.
    pub slide_count: usize,
}

impl PresentationConfig {
    /// Metadata for `slide_count` slides on `canvas`.
    pub fn new(canvas: Canvas, slide_count: usize) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            slide_count,
        }
    }

    /// Width and height as a [`Canvas`].
    pub fn canvas(self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// True when there are no slides.
    pub fn is_empty(self) -> bool {
        self.slide_count == 0
    }

    /// Index of the last slide; `None` when empty.
    pub fn last_slide(self) -> Option<usize> {
        self.slide_count.checked_sub(1)
    }
}

/// Per-slide fragment counts, indexed by slide. Missing entries read as 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FragmentCounts(Vec<usize>);

impl FragmentCounts {
    /// Count assumed for slides that never registered one.
    pub const DEFAULT_COUNT: usize = 1;

    /// Counts in slide order.
    pub fn new(counts: Vec<usize>) -> Self {
        Self(counts)
    }

    /// Declared count for `slide`, or [`Self::DEFAULT_COUNT`].
    pub fn get(&self, slide: usize) -> usize {
        self.0.get(slide).copied().unwrap_or(Self::DEFAULT_COUNT)
    }

    /// Index of the final fragment on `slide`. A declared count of 0 behaves like 1.
    pub fn last_fragment(&self, slide: usize) -> usize {
        self.get(slide).saturating_sub(1)
    }

    /// Record `count` for `slide`, padding skipped slides with the default.
    pub fn register(&mut self, slide: usize, count: usize) {
        if self.0.len() <= slide {
            self.0.resize(slide + 1, Self::DEFAULT_COUNT);
        }
        self.0[slide] = count;
    }

    /// Raw declared counts.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for FragmentCounts {
    fn from(v: Vec<usize>) -> Self {
        Self(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
