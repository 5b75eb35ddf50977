use crate::animation::spring::{SpringConfig, SpringOptions, SpringPreset, spring};
use crate::foundation::core::Vec2;

/// Distance (in layout units) a sliding fragment travels while revealing.
pub const SLIDE_DISTANCE: f64 = 20.0;

/// Scale a `Scale` fragment starts from.
const SCALE_FROM: f64 = 0.9;

/// How a fragment enters once its threshold is reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentAnimation {
    /// Opacity only.
    #[default]
    Fade,
    /// Slides up into place while fading in.
    SlideUp,
    /// Slides down into place while fading in.
    SlideDown,
    /// Slides left into place while fading in.
    SlideLeft,
    /// Slides right into place while fading in.
    SlideRight,
    /// Grows from 90% while fading in.
    Scale,
    /// Appears at once, with no interpolated style.
    None,
}

/// One piece of revealable content on a slide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FragmentSpec {
    /// Slide-local fragment index at which this content appears.
    pub at: usize,
    /// Entrance kind.
    #[serde(default)]
    pub animation: FragmentAnimation,
    /// Motion of the entrance; [`SpringConfig::SMOOTH`] by default.
    #[serde(default = "default_fragment_spring")]
    pub spring: SpringConfig,
}

fn default_fragment_spring() -> SpringConfig {
    SpringPreset::Smooth.config()
}

impl FragmentSpec {
    /// Fading fragment at threshold `at` with the smooth spring.
    pub fn at(at: usize) -> Self {
        Self {
            at,
            animation: FragmentAnimation::default(),
            spring: default_fragment_spring(),
        }
    }

    /// Set the entrance kind.
    pub fn animation(mut self, animation: FragmentAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Set the spring from a config or preset.
    pub fn spring(mut self, spring: impl Into<SpringConfig>) -> Self {
        self.spring = spring.into();
        self
    }

    /// Style of this fragment while the slide sits at `current_fragment`.
    pub fn reveal(&self, current_fragment: usize) -> FragmentStyle {
        reveal(current_fragment, self.at, self.animation, self.spring)
    }
}

/// Thresholds `start_at, start_at + 1, ...` for `count` sequential fragments sharing one look.
pub fn fragment_list(
    start_at: usize,
    count: usize,
    animation: FragmentAnimation,
    spring: impl Into<SpringConfig>,
) -> Vec<FragmentSpec> {
    let spring = spring.into();
    (0..count)
        .map(|i| FragmentSpec {
            at: start_at + i,
            animation,
            spring,
        })
        .collect()
}

/// Single-axis transform applied while a fragment reveals.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentTransform {
    /// Offset in layout units.
    Translate(Vec2),
    /// Uniform scale factor.
    Scale(f64),
}

impl FragmentTransform {
    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        match self {
            Self::Translate(v) if v.x != 0.0 => format!("translateX({}px)", v.x),
            Self::Translate(v) => format!("translateY({}px)", v.y),
            Self::Scale(s) => format!("scale({s})"),
        }
    }
}

/// Renderable state of a fragment. `none` fragments carry no interpolated values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FragmentStyle {
    /// Threshold reached.
    pub visible: bool,
    /// Spring progress, `0` before the threshold.
    pub progress: f64,
    /// `None` for `none` fragments.
    pub opacity: Option<f64>,
    /// Set for sliding and scaling fragments.
    pub transform: Option<FragmentTransform>,
}

impl FragmentStyle {
    /// Whether the renderer should emit the fragment's content at all.
    pub fn renders(&self) -> bool {
        self.visible || self.opacity.is_some()
    }

    /// Inline CSS declarations, `;`-separated.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(o) = self.opacity {
            decls.push(format!("opacity: {o}"));
        }
        if let Some(t) = &self.transform {
            decls.push(format!("transform: {}", t.to_css()));
        }
        decls.join("; ")
    }
}

/// Reveal state of a fragment with threshold `at` while the slide sits at `current_fragment`.
///
/// Pure in all inputs: identical arguments always produce bit-identical output.
pub fn reveal(
    current_fragment: usize,
    at: usize,
    animation: FragmentAnimation,
    config: SpringConfig,
) -> FragmentStyle {
    let visible = current_fragment >= at;
    let progress = if visible {
        spring(
            (current_fragment - at) as f64,
            SpringOptions::with_config(config),
        )
    } else {
        0.0
    };
    style_for(animation, visible, progress)
}

/// Map a reveal `progress` onto the style fields of `animation`.
pub fn style_for(animation: FragmentAnimation, visible: bool, progress: f64) -> FragmentStyle {
    let remaining = 1.0 - progress;
    let transform = match animation {
        FragmentAnimation::None => {
            return FragmentStyle {
                visible,
                progress,
                opacity: None,
                transform: None,
            };
        }
        FragmentAnimation::Fade => None,
        FragmentAnimation::SlideUp => Some(FragmentTransform::Translate(Vec2::new(
            0.0,
            remaining * SLIDE_DISTANCE,
        ))),
        FragmentAnimation::SlideDown => Some(FragmentTransform::Translate(Vec2::new(
            0.0,
            -remaining * SLIDE_DISTANCE,
        ))),
        FragmentAnimation::SlideLeft => Some(FragmentTransform::Translate(Vec2::new(
            remaining * SLIDE_DISTANCE,
            0.0,
        ))),
        FragmentAnimation::SlideRight => Some(FragmentTransform::Translate(Vec2::new(
            -remaining * SLIDE_DISTANCE,
            0.0,
        ))),
        FragmentAnimation::Scale => Some(FragmentTransform::Scale(
            SCALE_FROM + progress * (1.0 - SCALE_FROM),
        )),
    };

    FragmentStyle {
        visible,
        progress,
        opacity: Some(progress),
        transform,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/fragment.rs"]
mod tests;
