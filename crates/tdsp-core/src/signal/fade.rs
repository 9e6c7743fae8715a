// crates/tdsp-core/src/signal/fade.rs
//
// Curve-shaped crossfades between two colors, two samples, or two sequences
// of either, driven by a fader position.

use crate::color::algebra::apply_to_components_with_alpha2;
use crate::color::model::{AlphaSlot, Color, Rgb};
use crate::error::Result;
use crate::range::RangeSpec;
use crate::signal::model::{ChannelNames, Sample};
use crate::validate::validate_fade;

/// Shape applied to both fade ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadeCurve {
    #[default]
    Linear,
    /// `r * r`, keeping the sign of `r`.
    Squared,
    /// `sqrt(|r|)`, keeping the sign of `r`.
    SquareRoot,
}

impl FadeCurve {
    #[inline]
    pub fn shape(self, r: f32) -> f32 {
        match self {
            FadeCurve::Linear => r,
            FadeCurve::Squared => r * r * sign(r),
            FadeCurve::SquareRoot => r.abs().sqrt() * sign(r),
        }
    }
}

// f32::signum gives 1.0 for +0.0; a zero ratio must stay zero.
#[inline]
fn sign(r: f32) -> f32 {
    if r > 0.0 {
        1.0
    } else if r < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// How the two shaped ratios meet the two inputs.
///
/// `Additive` is the historical literal `xratio*x + yratio + y`, kept so the
/// old numbers can be reproduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combine {
    /// `xratio*x + yratio*y`
    Multiplicative,
    /// `xratio*x + yratio + y`
    Additive,
}

/// The combination used by [`Fade::apply`].
pub const FADE_COMBINE: Combine = Combine::Multiplicative;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub begin: f32,
    pub end: f32,
    pub curve: FadeCurve,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            begin: 0.0,
            end: 1.0,
            curve: FadeCurve::Linear,
        }
    }
}

impl Fade {
    pub fn new(begin: f32, end: f32, curve: FadeCurve) -> Result<Self> {
        let f = Self { begin, end, curve };
        validate_fade(&f)?;
        Ok(f)
    }

    pub fn linear() -> Self {
        Self::default()
    }

    /// The two shaped ratios `(xratio, yratio)` at `fader`.
    #[inline]
    pub fn ratios(&self, fader: f32) -> (f32, f32) {
        let span = self.end - self.begin;
        let xratio = self.begin + fader * span;
        let yratio = self.begin + (1.0 - fader) * span;
        (self.curve.shape(xratio), self.curve.shape(yratio))
    }

    #[inline]
    pub fn apply(&self, fader: f32, x: f32, y: f32) -> f32 {
        self.apply_with(fader, x, y, FADE_COMBINE)
    }

    pub fn apply_with(&self, fader: f32, x: f32, y: f32, combine: Combine) -> f32 {
        let (xratio, yratio) = self.ratios(fader);
        match combine {
            Combine::Multiplicative => xratio * x + yratio * y,
            Combine::Additive => xratio * x + yratio + y,
        }
    }
}

/// Crossfade two colors, alpha included when present. Under the default
/// linear fade, fader `0` gives `a` and fader `1` gives `b`.
pub fn fade_to<A: AlphaSlot<f32>>(
    fader: f32,
    fade: &Fade,
    a: &Color<f32, A>,
    b: &Color<f32, A>,
) -> Color<f32, A> {
    apply_to_components_with_alpha2(|ca, cb| fade.apply(fader, cb, ca), a, b)
}

/// Element-wise [`fade_to`] over the common prefix of `in1` and `in2`.
/// `out` is resized to that length.
pub fn fade_over(fader: f32, fade: &Fade, in1: &[Rgb], in2: &[Rgb], out: &mut Vec<Rgb>) {
    let n = in1.len().min(in2.len());
    out.resize(n, Rgb::default());
    for ((o, a), b) in out.iter_mut().zip(in1).zip(in2) {
        *o = fade_to(fader, fade, a, b);
    }
}

/// [`fade_to`] for a signal sample of any channel set.
pub fn fade_sample<C, R, const N: usize>(
    fader: f32,
    fade: &Fade,
    a: &Sample<C, R, N>,
    b: &Sample<C, R, N>,
) -> Sample<C, R, N>
where
    C: ChannelNames,
    R: RangeSpec<Number = f32>,
{
    a.zip_map(b, |ca, cb| fade.apply(fader, cb, ca))
}

/// [`fade_over`] for signal samples.
pub fn fade_over_samples<C, R, const N: usize>(
    fader: f32,
    fade: &Fade,
    in1: &[Sample<C, R, N>],
    in2: &[Sample<C, R, N>],
    out: &mut Vec<Sample<C, R, N>>,
) where
    C: ChannelNames,
    R: RangeSpec<Number = f32>,
{
    out.clear();
    out.extend(
        in1.iter()
            .zip(in2)
            .map(|(a, b)| fade_sample(fader, fade, a, b)),
    );
}
