// crates/tdsp-core/src/color/algebra.rs
//
// Pure functions over colors. None of these can fail.

use num_traits::Num;

use crate::color::model::{Alpha, AlphaSlot, Color, NoAlpha, Rgb, Rgba};
use crate::level::Level;

/// Which blue term `distance2` sums.
///
/// The historical formula added `db + db` instead of `db * db`. `Squared`
/// is the Euclidean reading; `Doubled` reproduces the historical numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlueTerm {
    Squared,
    Doubled,
}

/// The blue term used by [`distance2`].
pub const DISTANCE_BLUE_TERM: BlueTerm = BlueTerm::Squared;

/// Set R, G, B to zero and alpha (if any) to full scale.
#[inline]
pub fn clear<T: Copy + Level, A: AlphaSlot<T>>(c: &mut Color<T, A>) {
    *c = Color::cleared();
}

#[inline]
pub fn make_color<T>(r: T, g: T, b: T) -> Rgb<T> {
    Color::rgb(r, g, b)
}

#[inline]
pub fn make_color_alpha<T>(r: T, g: T, b: T, a: T) -> Rgba<T> {
    Color::rgba(r, g, b, a)
}

#[inline]
pub fn with_alpha<T>(c: Rgb<T>, alpha: T) -> Rgba<T> {
    Color {
        red: c.red,
        green: c.green,
        blue: c.blue,
        alpha: Alpha(alpha),
    }
}

#[inline]
pub fn without_alpha<T, A>(c: Color<T, A>) -> Rgb<T> {
    Color {
        red: c.red,
        green: c.green,
        blue: c.blue,
        alpha: NoAlpha,
    }
}

/// Apply `op` to R, G and B. Alpha is copied unchanged.
#[inline]
pub fn apply_to_components<T, A, F>(mut op: F, c: &Color<T, A>) -> Color<T, A>
where
    T: Copy,
    A: AlphaSlot<T>,
    F: FnMut(T) -> T,
{
    Color {
        red: op(c.red),
        green: op(c.green),
        blue: op(c.blue),
        alpha: c.alpha,
    }
}

/// Apply `op` pairwise to R, G and B. Alpha is copied from `x`.
#[inline]
pub fn apply_to_components2<T, A, F>(mut op: F, x: &Color<T, A>, y: &Color<T, A>) -> Color<T, A>
where
    T: Copy,
    A: AlphaSlot<T>,
    F: FnMut(T, T) -> T,
{
    Color {
        red: op(x.red, y.red),
        green: op(x.green, y.green),
        blue: op(x.blue, y.blue),
        alpha: x.alpha,
    }
}

/// Like [`apply_to_components`], but alpha goes through `op` too when present.
#[inline]
pub fn apply_to_components_with_alpha<T, A, F>(mut op: F, c: &Color<T, A>) -> Color<T, A>
where
    T: Copy,
    A: AlphaSlot<T>,
    F: FnMut(T) -> T,
{
    let mut out = apply_to_components(&mut op, c);
    out.alpha = c.alpha.map(op);
    out
}

#[inline]
pub fn apply_to_components_with_alpha2<T, A, F>(
    mut op: F,
    x: &Color<T, A>,
    y: &Color<T, A>,
) -> Color<T, A>
where
    T: Copy,
    A: AlphaSlot<T>,
    F: FnMut(T, T) -> T,
{
    let mut out = apply_to_components2(&mut op, x, y);
    out.alpha = x.alpha.zip_map(y.alpha, op);
    out
}

/// Per channel `cx + ratio * (cy - cx)`, alpha included.
///
/// Ratio `0` returns `x` and ratio `1` returns `y`, bit for bit.
pub fn interpolate<T, A>(x: &Color<T, A>, y: &Color<T, A>, ratio: T) -> Color<T, A>
where
    T: Num + Copy,
    A: AlphaSlot<T>,
{
    if ratio == T::zero() {
        return *x;
    }
    if ratio == T::one() {
        return *y;
    }
    apply_to_components_with_alpha2(|cx: T, cy: T| cx + ratio * (cy - cx), x, y)
}

/// Squared RGB distance, alpha ignored. Channels are widened to `f64` first
/// so narrow integer channels cannot overflow.
#[inline]
pub fn distance2<T, A>(x: &Color<T, A>, y: &Color<T, A>) -> f64
where
    T: Copy + Into<f64>,
    A: AlphaSlot<T>,
{
    distance2_with(x, y, DISTANCE_BLUE_TERM)
}

pub fn distance2_with<T, A>(x: &Color<T, A>, y: &Color<T, A>, term: BlueTerm) -> f64
where
    T: Copy + Into<f64>,
    A: AlphaSlot<T>,
{
    let (xr, xg, xb): (f64, f64, f64) = (x.red.into(), x.green.into(), x.blue.into());
    let (yr, yg, yb): (f64, f64, f64) = (y.red.into(), y.green.into(), y.blue.into());

    let dr = xr - yr;
    let dg = xg - yg;
    let db = xb - yb;

    match term {
        BlueTerm::Squared => dr * dr + dg * dg + db * db,
        BlueTerm::Doubled => dr * dr + dg * dg + db + db,
    }
}

/// Sum of the squared pairwise channel differences. Zero exactly when
/// R = G = B; invariant under rotation of the channels.
pub fn greyness2<T, A>(c: &Color<T, A>) -> f64
where
    T: Copy + Into<f64>,
    A: AlphaSlot<T>,
{
    let (r, g, b): (f64, f64, f64) = (c.red.into(), c.green.into(), c.blue.into());
    let rg = r - g;
    let gb = g - b;
    let br = b - r;
    rg * rg + gb * gb + br * br
}
