//! Damped harmonic oscillator driven by a discrete step index.
//!
//! The time axis is the fragment delta, not wall-clock time, so every value here is a pure
//! function of its inputs and replays identically during export or seeking.

use crate::foundation::error::{DeckError, DeckResult};

/// Pseudo-time per fragment step.
pub const TIME_SCALE: f64 = 0.5;

/// Residual at which a spring counts as settled.
pub const SETTLE_EPSILON: f64 = 0.001;

/// Upper bound returned by [`spring_duration`] for springs that never settle (zero damping).
pub const MAX_SETTLE_FRAGMENTS: u32 = 10_000;

/// Time span the duration-normalized curve is stretched across.
const NORMALIZED_TIME_UNITS: f64 = 4.0;

/// Physical parameters of the oscillator. Valid configs have `mass > 0`, `stiffness > 0`
/// and `damping >= 0`; see [`SpringConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Inertia.
    pub mass: f64,
    /// Friction; `0` oscillates forever.
    pub damping: f64,
    /// Spring constant.
    pub stiffness: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SpringConfig {
    /// Mild bounce.
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        damping: 10.0,
        stiffness: 100.0,
    };
    /// No bounce, for subtle reveals.
    pub const SMOOTH: Self = Self {
        damping: 200.0,
        ..Self::DEFAULT
    };
    /// Fast with minimal bounce.
    pub const SNAPPY: Self = Self {
        damping: 20.0,
        stiffness: 200.0,
        ..Self::DEFAULT
    };
    /// Playful overshoot.
    pub const BOUNCY: Self = Self {
        damping: 8.0,
        ..Self::DEFAULT
    };
    /// Slow with a small bounce.
    pub const HEAVY: Self = Self {
        mass: 2.0,
        damping: 15.0,
        stiffness: 80.0,
    };

    /// Undamped natural frequency `ω₀`.
    pub fn omega0(self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ`.
    pub fn zeta(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Reject configs outside `mass > 0`, `stiffness > 0`, `damping >= 0` (all finite).
    pub fn validate(self) -> DeckResult<()> {
        let finite = self.mass.is_finite() && self.damping.is_finite() && self.stiffness.is_finite();
        if !(finite && self.mass > 0.0 && self.stiffness > 0.0 && self.damping >= 0.0) {
            return Err(DeckError::validation(format!(
                "spring needs mass > 0, stiffness > 0, damping >= 0; got mass={} damping={} stiffness={}",
                self.mass, self.damping, self.stiffness
            )));
        }
        Ok(())
    }

    /// Classify by damping ratio; `ζ` within `1e-6` of 1 counts as critical.
    pub fn regime(self) -> DampingRegime {
        let zeta = self.zeta();
        if (zeta - 1.0).abs() < 1e-6 {
            DampingRegime::Critical
        } else if zeta < 1.0 {
            DampingRegime::Underdamped
        } else {
            DampingRegime::Overdamped
        }
    }
}

/// Named configurations, addressable from deck descriptions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringPreset {
    /// [`SpringConfig::SMOOTH`].
    Smooth,
    /// [`SpringConfig::SNAPPY`].
    Snappy,
    /// [`SpringConfig::BOUNCY`].
    Bouncy,
    /// [`SpringConfig::HEAVY`].
    Heavy,
    /// [`SpringConfig::DEFAULT`].
    #[default]
    Default,
}

impl SpringPreset {
    /// The preset's parameters.
    pub fn config(self) -> SpringConfig {
        match self {
            Self::Smooth => SpringConfig::SMOOTH,
            Self::Snappy => SpringConfig::SNAPPY,
            Self::Bouncy => SpringConfig::BOUNCY,
            Self::Heavy => SpringConfig::HEAVY,
            Self::Default => SpringConfig::DEFAULT,
        }
    }
}

impl From<SpringPreset> for SpringConfig {
    fn from(p: SpringPreset) -> Self {
        p.config()
    }
}

/// Which closed form [`spring_step`] evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    /// `ζ < 1`: overshoots and oscillates.
    Underdamped,
    /// `ζ = 1`: fastest approach without overshoot.
    Critical,
    /// `ζ > 1`: slow, monotone approach.
    Overdamped,
}

/// Inputs to [`spring`] besides the step delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringOptions {
    /// Fragments to wait before the spring starts moving.
    pub delay: f64,
    /// When set (and positive), compresses the motion into this many fragments.
    pub duration_in_fragments: Option<f64>,
    /// Oscillator parameters.
    pub config: SpringConfig,
    /// Value before the spring starts.
    pub from: f64,
    /// Value the spring settles at.
    pub to: f64,
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration_in_fragments: None,
            config: SpringConfig::DEFAULT,
            from: 0.0,
            to: 1.0,
        }
    }
}

impl SpringOptions {
    /// Defaults (`0 -> 1`, no delay) with `config`.
    pub fn with_config(config: SpringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

/// Spring value after `fragment_delta` steps, scaled into `[from, to]`.
pub fn spring(fragment_delta: f64, opts: SpringOptions) -> f64 {
    let SpringOptions {
        delay,
        duration_in_fragments,
        config,
        from,
        to,
    } = opts;

    let elapsed = fragment_delta - delay;
    if elapsed < 0.0 {
        return from;
    }

    if let Some(span) = duration_in_fragments.filter(|d| *d > 0.0) {
        let p = (elapsed / span).min(1.0);
        return from + (to - from) * normalized_spring_curve(p, config);
    }

    let progress = spring_step(elapsed * TIME_SCALE, config);
    from + (to - from) * progress.min(1.0)
}

/// Step response `x(t)` from 0 toward 1 with `x(0)=0`, `v(0)=0`.
pub fn spring_step(t: f64, config: SpringConfig) -> f64 {
    1.0 - residual(t, config)
}

/// `1 - x(t)`: signed distance still to travel.
fn residual(t: f64, config: SpringConfig) -> f64 {
    let w0 = config.omega0();
    let zeta = config.zeta();

    match config.regime() {
        DampingRegime::Underdamped => {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            e * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        }
        DampingRegime::Critical => (1.0 + w0 * t) * (-w0 * t).exp(),
        DampingRegime::Overdamped => {
            let z2 = (zeta * zeta - 1.0).sqrt();
            let s1 = -w0 * (zeta - z2);
            let s2 = -w0 * (zeta + z2);
            (s2 * (s1 * t).exp() - s1 * (s2 * t).exp()) / (s2 - s1)
        }
    }
}

/// Upper bound on `|residual(t')|` for every `t' >= t`.
fn residual_bound(t: f64, config: SpringConfig) -> f64 {
    match config.regime() {
        DampingRegime::Underdamped => {
            let zeta = config.zeta();
            (-zeta * config.omega0() * t).exp() / (1.0 - zeta * zeta).sqrt()
        }
        // Both are positive and decreasing for t > 0.
        DampingRegime::Critical | DampingRegime::Overdamped => residual(t, config),
    }
}

/// Oscillator shape compressed onto `p ∈ [0, 1]`. Shared with wall-clock spring timing.
pub fn normalized_spring_curve(p: f64, config: SpringConfig) -> f64 {
    let w0 = config.omega0();
    let zeta = config.zeta();
    let t = p * NORMALIZED_TIME_UNITS;
    let decay = zeta * w0;

    if zeta >= 1.0 {
        return 1.0 - (-decay * t).exp() * (1.0 + decay * t);
    }

    let wd = w0 * (1.0 - zeta * zeta).sqrt();
    1.0 - (-decay * t).exp() * (wd * t).cos()
}

/// Number of fragments after which the spring stays within [`SETTLE_EPSILON`] of its target.
pub fn spring_duration(config: SpringConfig) -> u32 {
    let decay = config.zeta() * config.omega0();
    if !(decay.is_finite() && decay > 0.0) {
        return MAX_SETTLE_FRAGMENTS;
    }

    // The envelope estimate is a lower bound for every regime; walk forward from it.
    let estimate = (-SETTLE_EPSILON.ln() / decay) / TIME_SCALE;
    let mut n = estimate.ceil().clamp(0.0, f64::from(MAX_SETTLE_FRAGMENTS)) as u32;
    while n < MAX_SETTLE_FRAGMENTS && residual_bound(f64::from(n) * TIME_SCALE, config) > SETTLE_EPSILON
    {
        n += 1;
    }
    n
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
