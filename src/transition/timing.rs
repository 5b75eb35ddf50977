use crate::animation::ease::{Curve, Ease};
use crate::animation::spring::{SpringConfig, normalized_spring_curve};
use crate::foundation::error::{DeckError, DeckResult};

/// Duration of linear and eased timings when unspecified.
pub const DEFAULT_DURATION_MS: f64 = 300.0;
/// Duration of spring timings when unspecified.
pub const DEFAULT_SPRING_DURATION_MS: f64 = 400.0;

/// Spring timing defaults are softer than fragment springs.
pub const DEFAULT_SPRING_TIMING: SpringConfig = SpringConfig {
    mass: 1.0,
    damping: 20.0,
    stiffness: 100.0,
};

/// Named easing curves accepted by [`eased_timing`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedEasing {
    /// No easing.
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    #[default]
    EaseInOut,
}

impl NamedEasing {
    /// Quadratic blends; `ease` and `ease-in-out` share a curve.
    pub fn to_ease(self) -> Ease {
        match self {
            Self::Linear => Ease::Linear,
            Self::Ease | Self::EaseInOut => Ease::InOut(Curve::Quad),
            Self::EaseIn => Ease::In(Curve::Quad),
            Self::EaseOut => Ease::Out(Curve::Quad),
        }
    }
}

/// Maps wall-clock elapsed milliseconds to transition progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionTiming {
    /// Constant speed.
    Linear {
        /// Milliseconds.
        duration_ms: f64,
    },
    /// Eased ratio.
    Eased {
        /// Milliseconds.
        duration_ms: f64,
        /// Curve applied to the elapsed ratio.
        easing: Ease,
    },
    /// Oscillator shape compressed into a fixed duration.
    Spring {
        /// Milliseconds.
        duration_ms: f64,
        /// Oscillator parameters.
        config: SpringConfig,
    },
}

impl Default for TransitionTiming {
    fn default() -> Self {
        linear_timing(DEFAULT_DURATION_MS)
    }
}

impl TransitionTiming {
    /// Total length.
    pub fn duration_ms(&self) -> f64 {
        match *self {
            Self::Linear { duration_ms }
            | Self::Eased { duration_ms, .. }
            | Self::Spring { duration_ms, .. } => duration_ms,
        }
    }

    /// Progress at `elapsed_ms`. Zero-length timings are complete immediately.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        let duration = self.duration_ms();
        if duration <= 0.0 {
            return 1.0;
        }
        let t = (elapsed_ms / duration).clamp(0.0, 1.0);
        match *self {
            Self::Linear { .. } => t,
            Self::Eased { easing, .. } => easing.apply(t),
            Self::Spring { config, .. } => {
                if t >= 1.0 {
                    1.0
                } else {
                    normalized_spring_curve(t, config)
                }
            }
        }
    }

    /// Reject a negative or non-finite duration and an invalid spring.
    pub fn validate(&self) -> DeckResult<()> {
        let d = self.duration_ms();
        if !d.is_finite() || d < 0.0 {
            return Err(DeckError::validation(format!(
                "transition duration must be finite and >= 0, got {d}"
            )));
        }
        if let Self::Spring { config, .. } = self {
            config.validate()?;
        }
        Ok(())
    }
}

/// Linear timing of `duration_ms`.
pub fn linear_timing(duration_ms: f64) -> TransitionTiming {
    TransitionTiming::Linear { duration_ms }
}

/// Eased timing of `duration_ms`.
pub fn eased_timing(duration_ms: f64, easing: NamedEasing) -> TransitionTiming {
    TransitionTiming::Eased {
        duration_ms,
        easing: easing.to_ease(),
    }
}

/// Spring timing; `None` picks 400 ms and [`DEFAULT_SPRING_TIMING`].
pub fn spring_timing(duration_ms: Option<f64>, config: Option<SpringConfig>) -> TransitionTiming {
    TransitionTiming::Spring {
        duration_ms: duration_ms.unwrap_or(DEFAULT_SPRING_DURATION_MS),
        config: config.unwrap_or(DEFAULT_SPRING_TIMING),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/timing.rs"]
mod tests;
