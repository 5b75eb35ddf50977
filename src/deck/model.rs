use crate::foundation::core::{Canvas, FragmentCounts, PresentationConfig};
use crate::foundation::error::{DeckError, DeckResult};
use crate::reveal::fragment::{FragmentSpec, FragmentStyle};
use crate::transition::descriptor::{TransitionDescriptor, find_transition};

/// One slide: its reveal steps and the content pieces bound to them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideSpec {
    /// Optional label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Reveal steps on this slide; `0` behaves like `1`.
    pub fragment_count: usize,
    /// Content pieces, each bound to a threshold.
    #[serde(default)]
    pub fragments: Vec<FragmentSpec>,
}

impl SlideSpec {
    /// Styles of every fragment, in declaration order, at `current_fragment`.
    pub fn reveal(&self, current_fragment: usize) -> Vec<FragmentStyle> {
        self.fragments
            .iter()
            .map(|f| f.reveal(current_fragment))
            .collect()
    }
}

/// An assembled presentation. Read-only during playback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    pub(crate) canvas: Canvas,
    pub(crate) slides: Vec<SlideSpec>,
    pub(crate) transitions: Vec<TransitionDescriptor>,
}

impl Deck {
    /// Target canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Canvas plus slide count, as navigation sees it.
    pub fn config(&self) -> PresentationConfig {
        PresentationConfig::new(self.canvas, self.slides.len())
    }

    /// Per-slide step counts.
    pub fn fragment_counts(&self) -> FragmentCounts {
        FragmentCounts::new(self.slides.iter().map(|s| s.fragment_count).collect())
    }

    /// All slides in order.
    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    /// Slide at `index`, if any.
    pub fn slide(&self, index: usize) -> Option<&SlideSpec> {
        self.slides.get(index)
    }

    /// Transitions ordered by boundary.
    pub fn transitions(&self) -> &[TransitionDescriptor] {
        &self.transitions
    }

    /// Descriptor for a change between `from` and `to`, looked up at the lower index.
    pub fn transition_between(&self, from: usize, to: usize) -> Option<&TransitionDescriptor> {
        find_transition(&self.transitions, from, to)
    }

    /// Fragment styles of `slide` at `fragment`; empty for unknown slides.
    pub fn reveal(&self, slide: usize, fragment: usize) -> Vec<FragmentStyle> {
        self.slide(slide)
            .map(|s| s.reveal(fragment))
            .unwrap_or_default()
    }

    /// Check canvas, fragment springs, and transition bindings.
    pub fn validate(&self) -> DeckResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(DeckError::validation("canvas width/height must be > 0"));
        }
        for (i, slide) in self.slides.iter().enumerate() {
            for (j, f) in slide.fragments.iter().enumerate() {
                f.spring.validate().map_err(|e| match e {
                    DeckError::Validation(msg) => {
                        DeckError::validation(format!("slide {i} fragment {j}: {msg}"))
                    }
                    other => other,
                })?;
            }
        }
        for (i, t) in self.transitions.iter().enumerate() {
            if t.after_slide_index >= self.slides.len() {
                return Err(DeckError::validation(format!(
                    "transition {i} references missing slide {}",
                    t.after_slide_index
                )));
            }
            if self.transitions[..i]
                .iter()
                .any(|o| o.after_slide_index == t.after_slide_index)
            {
                return Err(DeckError::validation(format!(
                    "two transitions bound after slide {}",
                    t.after_slide_index
                )));
            }
            t.presentation.validate()?;
            t.timing.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
