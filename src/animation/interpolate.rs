use crate::animation::ease::Ease;
use crate::foundation::error::{DeckResult, RangeError};

/// Behavior outside the input range, chosen per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the nearest linear segment.
    #[default]
    Extend,
    /// Hold the boundary output.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Extrapolation policy per side and an optional easing of the local segment ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOptions {
    /// Below `input[0]`.
    pub extrapolate_left: Extrapolate,
    /// Above the last input.
    pub extrapolate_right: Extrapolate,
    /// Applied to the ratio inside the matched segment.
    pub easing: Option<Ease>,
}

impl InterpolateOptions {
    /// Clamp on both sides, no easing.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            easing: None,
        }
    }

    /// Set the segment easing.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Map `x` through the piecewise-linear function defined by `input -> output`.
///
/// Ranges are validated on every call; use [`Interpolation`] to validate once up front.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOptions,
) -> DeckResult<f64> {
    validate_ranges(input, output)?;
    Ok(sample_validated(x, input, output, opts))
}

/// A validated range pair that samples infallibly.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    opts: InterpolateOptions,
}

impl Interpolation {
    /// Validate `input`/`output` once.
    pub fn new(
        input: impl Into<Vec<f64>>,
        output: impl Into<Vec<f64>>,
        opts: InterpolateOptions,
    ) -> DeckResult<Self> {
        let input = input.into();
        let output = output.into();
        validate_ranges(&input, &output)?;
        Ok(Self {
            input,
            output,
            opts,
        })
    }

    /// Same result as [`interpolate`] on the stored ranges.
    pub fn sample(&self, x: f64) -> f64 {
        sample_validated(x, &self.input, &self.output, self.opts)
    }
}

pub(crate) fn validate_ranges(input: &[f64], output: &[f64]) -> Result<(), RangeError> {
    if input.len() != output.len() {
        return Err(RangeError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    if input.len() < 2 {
        return Err(RangeError::TooFewPoints { len: input.len() });
    }
    if let Some(index) = input.iter().position(|v| !v.is_finite()) {
        return Err(RangeError::NonFinite { index });
    }
    if let Some(i) = input.windows(2).position(|w| w[1] < w[0]) {
        return Err(RangeError::NotMonotonic { index: i + 1 });
    }
    Ok(())
}

fn sample_validated(x: f64, input: &[f64], output: &[f64], opts: InterpolateOptions) -> f64 {
    let last = input.len() - 1;

    if x < input[0] {
        match opts.extrapolate_left {
            Extrapolate::Clamp => return output[0],
            Extrapolate::Identity => return x,
            Extrapolate::Extend => {}
        }
    }
    if x > input[last] {
        match opts.extrapolate_right {
            Extrapolate::Clamp => return output[last],
            Extrapolate::Identity => return x,
            Extrapolate::Extend => {}
        }
    }

    // First segment whose end reaches x; past the end, the final segment.
    let seg = input[1..]
        .iter()
        .position(|&end| x <= end)
        .unwrap_or(last - 1);

    let (in_start, in_end) = (input[seg], input[seg + 1]);
    let (out_start, out_end) = (output[seg], output[seg + 1]);

    let mut p = if in_end == in_start {
        1.0
    } else {
        (x - in_start) / (in_end - in_start)
    };
    if let Some(ease) = opts.easing {
        p = ease.apply(p);
    }

    out_start + p * (out_end - out_start)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
