use crate::deck::model::{Deck, SlideSpec};
use crate::foundation::core::Canvas;
use crate::foundation::error::{DeckError, DeckResult};
use crate::reveal::fragment::FragmentSpec;
use crate::transition::descriptor::TransitionDescriptor;
use crate::transition::presentation::TransitionPresentation;
use crate::transition::timing::TransitionTiming;

/// Ordered content item, as authored.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckItem {
    /// A finished slide.
    Slide(SlideSpec),
    /// Transition into the next slide.
    Transition {
        /// Visual effect.
        presentation: TransitionPresentation,
        /// `None` uses the default linear timing.
        timing: Option<TransitionTiming>,
    },
}

/// Assembles a [`Deck`] from an ordered run of slides and transitions, once.
///
/// A transition binds to the boundary after the most recent slide. Timing defaults to linear 300 ms.
#[derive(Debug, Default)]
pub struct DeckBuilder {
    canvas: Canvas,
    items: Vec<DeckItem>,
}

impl DeckBuilder {
    /// Empty deck on `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            items: Vec::new(),
        }
    }

    /// Append a slide.
    pub fn slide(mut self, slide: SlideBuilder) -> Self {
        self.items.push(DeckItem::Slide(slide.build()));
        self
    }

    /// Bind a transition after the most recently added slide.
    pub fn transition(
        mut self,
        presentation: TransitionPresentation,
        timing: Option<TransitionTiming>,
    ) -> Self {
        self.items.push(DeckItem::Transition {
            presentation,
            timing,
        });
        self
    }

    /// Append an already-assembled item.
    pub fn item(mut self, item: DeckItem) -> Self {
        self.items.push(item);
        self
    }

    /// Resolve items into a validated [`Deck`].
    ///
    /// A transition before the first slide, or two on one boundary, is an error. A trailing
    /// transition is kept and logged as a warning.
    #[tracing::instrument(skip(self), fields(items = self.items.len()))]
    pub fn build(self) -> DeckResult<Deck> {
        let mut slides: Vec<SlideSpec> = Vec::new();
        let mut transitions: Vec<TransitionDescriptor> = Vec::new();

        for item in self.items {
            match item {
                DeckItem::Slide(s) => slides.push(s),
                DeckItem::Transition {
                    presentation,
                    timing,
                } => {
                    let Some(after) = slides.len().checked_sub(1) else {
                        return Err(DeckError::validation(
                            "transition must follow a slide",
                        ));
                    };
                    if transitions.last().is_some_and(|t| t.after_slide_index == after) {
                        return Err(DeckError::validation(format!(
                            "two transitions bound after slide {after}"
                        )));
                    }
                    transitions.push(TransitionDescriptor::new(
                        presentation,
                        timing.unwrap_or_default(),
                        after,
                    ));
                }
            }
        }

        if let Some(t) = transitions.last() {
            if t.after_slide_index + 1 == slides.len() {
                tracing::warn!(
                    after = t.after_slide_index,
                    "trailing transition has no following slide and never runs"
                );
            }
        }

        let deck = Deck {
            canvas: self.canvas,
            slides,
            transitions,
        };
        deck.validate()?;
        tracing::debug!(
            slides = deck.slides.len(),
            transitions = deck.transitions.len(),
            "deck assembled"
        );
        Ok(deck)
    }
}

/// Collects one slide's fragments and its optional explicit step count.
#[derive(Clone, Debug, Default)]
pub struct SlideBuilder {
    name: Option<String>,
    fragment_count: Option<usize>,
    fragments: Vec<FragmentSpec>,
}

impl SlideBuilder {
    /// Slide with no fragments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label used in logs and exports.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the derived step count.
    pub fn fragment_count(mut self, count: usize) -> Self {
        self.fragment_count = Some(count);
        self
    }

    /// Append one fragment.
    pub fn fragment(mut self, fragment: FragmentSpec) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Append several fragments in order.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = FragmentSpec>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    /// Count: explicit, else one past the highest threshold, else 1.
    pub fn build(self) -> SlideSpec {
        let derived = self
            .fragments
            .iter()
            .map(|f| f.at + 1)
            .max()
            .unwrap_or(1);
        let fragment_count = self.fragment_count.unwrap_or(derived);
        if let Some(max_at) = self.fragments.iter().map(|f| f.at).max() {
            if max_at >= fragment_count {
                tracing::warn!(
                    name = self.name.as_deref().unwrap_or(""),
                    fragment_count,
                    max_at,
                    "fragment threshold beyond the slide's last step is never revealed by next()"
                );
            }
        }
        SlideSpec {
            name: self.name,
            fragment_count,
            fragments: self.fragments,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/builder.rs"]
mod tests;
