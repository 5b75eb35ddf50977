//! JSON mirror of the ordered content list, decoded into typed definitions and handed to
//! [`DeckBuilder`].
//!
//! ```json
//! { "width": 1920, "height": 1080, "items": [
//!     { "slide": { "fragments": [ { "animation": "slide-up" }, { "spring": "snappy" } ] } },
//!     { "transition": { "presentation": { "kind": "fade" } } },
//!     { "slide": {} }
//! ] }
//! ```

use crate::animation::spring::{SpringConfig, SpringPreset};
use crate::deck::builder::{DeckBuilder, DeckItem, SlideBuilder};
use crate::deck::model::Deck;
use crate::foundation::core::Canvas;
use crate::foundation::error::DeckResult;
use crate::reveal::fragment::{FragmentAnimation, FragmentSpec};
use crate::transition::presentation::TransitionPresentation;
use crate::transition::timing::{
    NamedEasing, TransitionTiming, eased_timing, linear_timing, spring_timing,
};

/// Top-level deck description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeckDef {
    /// Canvas width, 1920 when omitted.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height, 1080 when omitted.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Slides and transitions in authored order.
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

fn default_width() -> u32 {
    Canvas::default().width
}

fn default_height() -> u32 {
    Canvas::default().height
}

/// One entry of [`DeckDef::items`], keyed `slide` or `transition`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDef {
    /// A slide.
    Slide(SlideDef),
    /// Transition after the preceding slide.
    Transition(TransitionDef),
}

/// Slide description.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideDef {
    /// Optional label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit step count; derived from the fragments when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment_count: Option<usize>,
    /// Fragments in declaration order.
    #[serde(default)]
    pub fragments: Vec<FragmentDef>,
}

/// A fragment without `at` is auto-sequenced by its position in the slide's list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FragmentDef {
    /// Reveal threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<usize>,
    /// Entrance kind, `fade` when omitted.
    #[serde(default)]
    pub animation: FragmentAnimation,
    /// Preset or explicit parameters; the fragment default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<SpringDef>,
}

/// Either a preset name or explicit (partial) oscillator parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SpringDef {
    /// Named preset such as `"snappy"`.
    Preset(SpringPreset),
    /// Explicit parameters; missing fields take [`SpringConfig::DEFAULT`] values.
    Config(SpringConfig),
}

impl From<SpringDef> for SpringConfig {
    fn from(d: SpringDef) -> Self {
        match d {
            SpringDef::Preset(p) => p.config(),
            SpringDef::Config(c) => c,
        }
    }
}

/// Transition description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionDef {
    /// Visual effect.
    pub presentation: TransitionPresentation,
    /// Linear 300 ms when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingDef>,
}

/// Timing description, tagged by `kind`. Spring fields are optional.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimingDef {
    /// Constant speed.
    Linear {
        /// Milliseconds.
        duration_ms: f64,
    },
    /// Named CSS-style easing.
    Eased {
        /// Milliseconds.
        duration_ms: f64,
        /// Curve, `ease-in-out` when omitted.
        #[serde(default)]
        easing: NamedEasing,
    },
    /// Spring curve fit to a fixed duration.
    Spring {
        /// Milliseconds, 400 when omitted.
        #[serde(default)]
        duration_ms: Option<f64>,
        /// Softer transition default when omitted.
        #[serde(default)]
        config: Option<SpringConfig>,
    },
}

impl From<TimingDef> for TransitionTiming {
    fn from(d: TimingDef) -> Self {
        match d {
            TimingDef::Linear { duration_ms } => linear_timing(duration_ms),
            TimingDef::Eased {
                duration_ms,
                easing,
            } => eased_timing(duration_ms, easing),
            TimingDef::Spring {
                duration_ms,
                config,
            } => spring_timing(duration_ms, config),
        }
    }
}

impl SlideDef {
    fn into_builder(self) -> SlideBuilder {
        let mut b = SlideBuilder::new();
        if let Some(name) = self.name {
            b = b.name(name);
        }
        if let Some(n) = self.fragment_count {
            b = b.fragment_count(n);
        }
        b.fragments(self.fragments.into_iter().enumerate().map(|(i, f)| {
            let mut spec = FragmentSpec::at(f.at.unwrap_or(i)).animation(f.animation);
            if let Some(s) = f.spring {
                spec = spec.spring(s);
            }
            spec
        }))
    }
}

impl DeckDef {
    /// Decode without assembling.
    pub fn from_json(s: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DeckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Assemble through [`DeckBuilder`], with the same validation.
    #[tracing::instrument(skip(self), fields(items = self.items.len()))]
    pub fn into_deck(self) -> DeckResult<Deck> {
        let canvas = Canvas {
            width: self.width,
            height: self.height,
        };
        self.items
            .into_iter()
            .fold(DeckBuilder::new(canvas), |b, item| match item {
                ItemDef::Slide(s) => b.slide(s.into_builder()),
                ItemDef::Transition(t) => b.item(DeckItem::Transition {
                    presentation: t.presentation,
                    timing: t.timing.map(Into::into),
                }),
            })
            .build()
    }
}

impl Deck {
    /// Decode and assemble a deck description in one step.
    pub fn from_json(s: &str) -> DeckResult<Self> {
        DeckDef::from_json(s)?.into_deck()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/defs.rs"]
mod tests;
