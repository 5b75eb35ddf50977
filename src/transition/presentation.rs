use kurbo::{Insets, Vec2};

use crate::foundation::error::{DeckError, DeckResult};

/// Perspective distance of a flip unless configured.
pub const DEFAULT_PERSPECTIVE_PX: f64 = 1000.0;

/// Rotation reached by either layer at the midpoint edge of a flip.
const FLIP_DEGREES: f64 = 90.0;

/// Side the entering slide comes in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideDirection {
    /// Enters from the left edge.
    FromLeft,
    /// Enters from the right edge.
    #[default]
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

/// Edge the entering slide's clip grows from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeDirection {
    /// Grows from the left edge.
    #[default]
    Left,
    /// Grows from the right edge.
    Right,
    /// Grows from the top edge.
    Up,
    /// Grows from the bottom edge.
    Down,
}

/// Axis a flip turns around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipAxis {
    /// Rotates around the vertical axis.
    #[default]
    Horizontal,
    /// Rotates around the horizontal axis.
    Vertical,
}

/// Transform on a whole slide layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerTransform {
    /// Offset in percent of the layer's own size.
    TranslatePercent(Vec2),
    /// 3D rotation with perspective.
    Rotate {
        /// Flip axis.
        axis: FlipAxis,
        /// Rotation angle.
        degrees: f64,
        /// Perspective distance.
        perspective_px: f64,
    },
}

impl LayerTransform {
    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        match *self {
            Self::TranslatePercent(v) if v.y == 0.0 => format!("translateX({}%)", v.x),
            Self::TranslatePercent(v) => format!("translateY({}%)", v.y),
            Self::Rotate {
                axis,
                degrees,
                perspective_px,
            } => {
                let axis = match axis {
                    FlipAxis::Horizontal => 'Y',
                    FlipAxis::Vertical => 'X',
                };
                format!("perspective({perspective_px}px) rotate{axis}({degrees}deg)")
            }
        }
    }
}

/// Style of one layer of the transition stack. Unset fields leave the layer untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    /// Layer opacity.
    pub opacity: Option<f64>,
    /// Layer transform.
    pub transform: Option<LayerTransform>,
    /// Clip rectangle inset from each edge, in percent (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub clip: Option<Insets>,
    /// Hide the back face while flipping.
    pub backface_hidden: bool,
}

impl LayerStyle {
    /// True when no field is set.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
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
        if let Some(c) = self.clip {
            decls.push(format!(
                "clip-path: inset({}% {}% {}% {}%)",
                c.y0, c.x1, c.y1, c.x0
            ));
        }
        if self.backface_hidden {
            decls.push("backface-visibility: hidden".to_string());
        }
        decls.join("; ")
    }
}

/// Visual shape of a transition, as a pure function of progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionPresentation {
    /// Cross-fade.
    Fade {
        /// Opacity the entering slide starts at.
        #[serde(default)]
        enter_from: f64,
        /// Opacity the exiting slide ends at.
        #[serde(default)]
        exit_to: f64,
    },
    /// Entering slide pushes the exiting one out.
    Slide {
        /// Entry side.
        #[serde(default)]
        direction: SlideDirection,
    },
    /// Entering slide is revealed by a growing clip.
    Wipe {
        /// Edge the clip grows from.
        #[serde(default)]
        direction: WipeDirection,
    },
    /// Card flip.
    Flip {
        /// Turn axis.
        #[serde(default)]
        direction: FlipAxis,
        /// Perspective distance.
        #[serde(default = "default_perspective")]
        perspective_px: f64,
    },
}

fn default_perspective() -> f64 {
    DEFAULT_PERSPECTIVE_PX
}

impl Default for TransitionPresentation {
    fn default() -> Self {
        fade()
    }
}

/// Plain cross-fade from and to 0.
pub fn fade() -> TransitionPresentation {
    TransitionPresentation::Fade {
        enter_from: 0.0,
        exit_to: 0.0,
    }
}

/// Slide in from `direction`.
pub fn slide(direction: SlideDirection) -> TransitionPresentation {
    TransitionPresentation::Slide { direction }
}

/// Wipe from `direction`.
pub fn wipe(direction: WipeDirection) -> TransitionPresentation {
    TransitionPresentation::Wipe { direction }
}

/// Flip around `direction` at the default perspective.
pub fn flip(direction: FlipAxis) -> TransitionPresentation {
    TransitionPresentation::Flip {
        direction,
        perspective_px: DEFAULT_PERSPECTIVE_PX,
    }
}

impl TransitionPresentation {
    /// Style of the incoming slide.
    pub fn enter(&self, progress: f64) -> LayerStyle {
        self.style(progress, true)
    }

    /// Style of the outgoing slide.
    pub fn exit(&self, progress: f64) -> LayerStyle {
        self.style(progress, false)
    }

    /// Reject fade opacities outside `[0, 1]` and a non-positive flip perspective.
    pub fn validate(&self) -> DeckResult<()> {
        match *self {
            Self::Fade {
                enter_from,
                exit_to,
            } => {
                for (name, v) in [("enter_from", enter_from), ("exit_to", exit_to)] {
                    if !(0.0..=1.0).contains(&v) {
                        return Err(DeckError::validation(format!(
                            "fade.{name} must be in [0, 1], got {v}"
                        )));
                    }
                }
                Ok(())
            }
            Self::Flip { perspective_px, .. } if !(perspective_px.is_finite() && perspective_px > 0.0) => {
                Err(DeckError::validation(format!(
                    "flip.perspective_px must be finite and > 0, got {perspective_px}"
                )))
            }
            _ => Ok(()),
        }
    }

    fn style(&self, progress: f64, entering: bool) -> LayerStyle {
        match *self {
            Self::Fade {
                enter_from,
                exit_to,
            } => {
                let opacity = if entering {
                    enter_from + (1.0 - enter_from) * progress
                } else {
                    1.0 - (1.0 - exit_to) * progress
                };
                LayerStyle {
                    opacity: Some(opacity),
                    ..LayerStyle::default()
                }
            }
            Self::Slide { direction } => {
                let offset = (if entering { 1.0 - progress } else { progress }) * 100.0;
                // Entering layers come from the named side; exiting layers leave through the opposite one.
                let sign = if entering { 1.0 } else { -1.0 };
                let v = match direction {
                    SlideDirection::FromLeft => Vec2::new(-sign * offset, 0.0),
                    SlideDirection::FromRight => Vec2::new(sign * offset, 0.0),
                    SlideDirection::FromTop => Vec2::new(0.0, -sign * offset),
                    SlideDirection::FromBottom => Vec2::new(0.0, sign * offset),
                };
                LayerStyle {
                    transform: Some(LayerTransform::TranslatePercent(v)),
                    ..LayerStyle::default()
                }
            }
            Self::Wipe { direction } => {
                let p = if entering { progress } else { 1.0 - progress };
                let hidden = (1.0 - p) * 100.0;
                let clip = match direction {
                    WipeDirection::Left => Insets::new(0.0, 0.0, hidden, 0.0),
                    WipeDirection::Right => Insets::new(hidden, 0.0, 0.0, 0.0),
                    WipeDirection::Up => Insets::new(0.0, 0.0, 0.0, hidden),
                    WipeDirection::Down => Insets::new(0.0, hidden, 0.0, 0.0),
                };
                LayerStyle {
                    clip: Some(clip),
                    ..LayerStyle::default()
                }
            }
            Self::Flip {
                direction,
                perspective_px,
            } => {
                let degrees = if entering {
                    (1.0 - progress) * -FLIP_DEGREES
                } else {
                    progress * FLIP_DEGREES
                };
                LayerStyle {
                    transform: Some(LayerTransform::Rotate {
                        axis: direction,
                        degrees,
                        perspective_px,
                    }),
                    backface_hidden: true,
                    ..LayerStyle::default()
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/presentation.rs"]
mod tests;
