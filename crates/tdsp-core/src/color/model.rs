// crates/tdsp-core/src/color/model.rs

use core::fmt;
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::{Signed, Zero};

use crate::level::Level;

/// Storage for the optional alpha channel of a [`Color`].
///
/// `NoAlpha` is zero-sized, so an RGB color holds exactly three numbers and
/// every alpha operation on it is a no-op.
pub trait AlphaSlot<T: Copy>: Copy + fmt::Debug + PartialEq + PartialOrd {
    const HAS_ALPHA: bool;

    /// Full-scale alpha, or nothing.
    fn opaque() -> Self
    where
        T: Level;

    fn value(self) -> Option<T>;

    fn set(&mut self, a: T);

    fn map(self, f: impl FnMut(T) -> T) -> Self;

    fn zip_map(self, other: Self, f: impl FnMut(T, T) -> T) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoAlpha;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alpha<T>(pub T);

impl<T: Copy> AlphaSlot<T> for NoAlpha {
    const HAS_ALPHA: bool = false;

    #[inline]
    fn opaque() -> Self
    where
        T: Level,
    {
        NoAlpha
    }

    #[inline]
    fn value(self) -> Option<T> {
        None
    }

    #[inline]
    fn set(&mut self, _a: T) {}

    #[inline]
    fn map(self, _f: impl FnMut(T) -> T) -> Self {
        NoAlpha
    }

    #[inline]
    fn zip_map(self, _other: Self, _f: impl FnMut(T, T) -> T) -> Self {
        NoAlpha
    }
}

impl<T: Copy + fmt::Debug + PartialOrd> AlphaSlot<T> for Alpha<T> {
    const HAS_ALPHA: bool = true;

    #[inline]
    fn opaque() -> Self
    where
        T: Level,
    {
        Alpha(T::maximum())
    }

    #[inline]
    fn value(self) -> Option<T> {
        Some(self.0)
    }

    #[inline]
    fn set(&mut self, a: T) {
        self.0 = a;
    }

    #[inline]
    fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Alpha(f(self.0))
    }

    #[inline]
    fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Alpha(f(self.0, other.0))
    }
}

/// An RGB color with an optional alpha channel. Channel order is fixed:
/// red, green, blue, then alpha.
///
/// Ordering is lexicographic over that channel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Hash)]
pub struct Color<T = f32, A = NoAlpha> {
    pub red: T,
    pub green: T,
    pub blue: T,
    pub alpha: A,
}

pub type Rgb<T = f32> = Color<T, NoAlpha>;
pub type Rgba<T = f32> = Color<T, Alpha<T>>;

/// An ordered sequence of colors, as consumed by the fade functions.
pub type ColorList<T = f32> = Vec<Rgb<T>>;

impl<T> Color<T, NoAlpha> {
    #[inline]
    pub const fn rgb(red: T, green: T, blue: T) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: NoAlpha,
        }
    }

    #[inline]
    pub fn from_array([red, green, blue]: [T; 3]) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl<T: Copy> Color<T, NoAlpha> {
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.red, self.green, self.blue]
    }
}

impl<T> Color<T, Alpha<T>> {
    #[inline]
    pub const fn rgba(red: T, green: T, blue: T, alpha: T) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Alpha(alpha),
        }
    }

    #[inline]
    pub fn from_array([red, green, blue, alpha]: [T; 4]) -> Self {
        Self::rgba(red, green, blue, alpha)
    }
}

impl<T: Copy> Color<T, Alpha<T>> {
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.red, self.green, self.blue, self.alpha.0]
    }
}

impl<T: Copy, A: AlphaSlot<T>> Color<T, A> {
    pub const HAS_ALPHA: bool = A::HAS_ALPHA;

    /// Black, with alpha (if any) at full scale.
    #[inline]
    pub fn cleared() -> Self
    where
        T: Level,
    {
        Self {
            red: T::minimum(),
            green: T::minimum(),
            blue: T::minimum(),
            alpha: A::opaque(),
        }
    }

    #[inline]
    pub fn rgb_array(&self) -> [T; 3] {
        [self.red, self.green, self.blue]
    }

    /// `None` for colors without an alpha channel.
    #[inline]
    pub fn alpha(&self) -> Option<T> {
        self.alpha.value()
    }

    /// Does nothing for colors without an alpha channel.
    #[inline]
    pub fn set_alpha(&mut self, a: T) {
        self.alpha.set(a);
    }

    /// Number of stored channels: 3 or 4.
    #[inline]
    pub fn len(&self) -> usize {
        if A::HAS_ALPHA {
            4
        } else {
            3
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        super::algebra::apply_to_components(|x: T| x.abs(), &self)
    }

    /// `max - c` for each of R, G, B.
    pub fn inverted(self, max: T) -> Self
    where
        T: Sub<Output = T>,
    {
        super::algebra::apply_to_components(|x: T| max - x, &self)
    }

    /// Clamp R, G, B into `[0, max]`.
    pub fn normalized(self, max: T) -> Self
    where
        T: PartialOrd + Zero,
    {
        super::algebra::apply_to_components(
            |x: T| {
                if x < T::zero() {
                    T::zero()
                } else if x > max {
                    max
                } else {
                    x
                }
            },
            &self,
        )
    }

    /// Channel-wise product of R, G, B: white modulated by a color is that
    /// color.
    pub fn modulate(self, other: Self) -> Self
    where
        T: Mul<Output = T>,
    {
        super::algebra::apply_to_components2(|x: T, y: T| x * y, &self, &other)
    }

    /// Rotate R, G, B left by `n` positions: red rotated by 1 is blue.
    /// Negative `n` rotates right.
    pub fn rotated(self, n: isize) -> Self {
        let mut rgb = self.rgb_array();
        rgb.rotate_left(n.rem_euclid(3) as usize);
        let [red, green, blue] = rgb;
        Self {
            red,
            green,
            blue,
            alpha: self.alpha,
        }
    }
}

impl<T: Copy + Level, A: AlphaSlot<T>> Default for Color<T, A> {
    fn default() -> Self {
        Self::cleared()
    }
}

// Arithmetic operators work on R, G, B; alpha is carried from the left
// operand.

impl<T: Copy + Add<Output = T>, A: AlphaSlot<T>> Add for Color<T, A> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        super::algebra::apply_to_components2(|x: T, y: T| x + y, &self, &rhs)
    }
}

impl<T: Copy + Sub<Output = T>, A: AlphaSlot<T>> Sub for Color<T, A> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        super::algebra::apply_to_components2(|x: T, y: T| x - y, &self, &rhs)
    }
}

impl<T: Copy + Mul<Output = T>, A: AlphaSlot<T>> Mul<T> for Color<T, A> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        super::algebra::apply_to_components(|x: T| x * k, &self)
    }
}

impl<T: Copy + Div<Output = T>, A: AlphaSlot<T>> Div<T> for Color<T, A> {
    type Output = Self;

    fn div(self, k: T) -> Self {
        super::algebra::apply_to_components(|x: T| x / k, &self)
    }
}

impl<T: Copy + Neg<Output = T>, A: AlphaSlot<T>> Neg for Color<T, A> {
    type Output = Self;

    fn neg(self) -> Self {
        super::algebra::apply_to_components(|x: T| -x, &self)
    }
}

impl<T> Index<usize> for Color<T, NoAlpha> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.red,
            1 => &self.green,
            2 => &self.blue,
            _ => panic!("color channel index {i} out of range 0..3"),
        }
    }
}

impl<T> IndexMut<usize> for Color<T, NoAlpha> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.red,
            1 => &mut self.green,
            2 => &mut self.blue,
            _ => panic!("color channel index {i} out of range 0..3"),
        }
    }
}

impl<T> Index<usize> for Color<T, Alpha<T>> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.red,
            1 => &self.green,
            2 => &self.blue,
            3 => &self.alpha.0,
            _ => panic!("color channel index {i} out of range 0..4"),
        }
    }
}

impl<T> IndexMut<usize> for Color<T, Alpha<T>> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.red,
            1 => &mut self.green,
            2 => &mut self.blue,
            3 => &mut self.alpha.0,
            _ => panic!("color channel index {i} out of range 0..4"),
        }
    }
}

impl<T> From<[T; 3]> for Color<T, NoAlpha> {
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T> From<(T, T, T)> for Color<T, NoAlpha> {
    fn from((r, g, b): (T, T, T)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl<T> From<[T; 4]> for Color<T, Alpha<T>> {
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_three_numbers() {
        assert_eq!(core::mem::size_of::<Rgb<f32>>(), 3 * 4);
        assert_eq!(core::mem::size_of::<Rgba<u8>>(), 4);
    }

    #[test]
    fn additive_primaries() {
        let red = Rgb::rgb(1.0f32, 0.0, 0.0);
        let green = Rgb::rgb(0.0f32, 1.0, 0.0);
        let blue = Rgb::rgb(0.0f32, 0.0, 1.0);
        let white = Rgb::rgb(1.0f32, 1.0, 1.0);

        assert_eq!(red + green + blue, white);
        assert_eq!(white - blue, red + green);
        assert_eq!(white.modulate(red), red);
        assert_eq!(white.inverted(1.0), Rgb::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_and_normalization() {
        let red = Rgb::rgb(1.0f32, 0.0, 0.0);
        let blue = Rgb::rgb(0.0f32, 0.0, 1.0);
        assert_eq!(red.rotated(1), blue);
        assert_eq!(blue.rotated(-1), red);
        assert_eq!(red.rotated(3), red);

        let mixed = (red + blue * 0.5).rotated(-1);
        assert_eq!(mixed, Rgb::rgb(0.5, 1.0, 0.0));

        assert_eq!(Rgb::rgb(1.2f32, -3.0, 5.0).normalized(1.0), red + blue);
        assert_eq!(
            Rgb::rgb(300.0f32, -500.0, 1000.0).normalized(255.0),
            Rgb::rgb(255.0, 0.0, 255.0)
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        let red = Rgb::rgb(1.0f32, 0.0, 0.0);
        let green = Rgb::rgb(0.0f32, 1.0, 0.0);
        let white = Rgb::rgb(1.0f32, 1.0, 1.0);
        assert!(red > green);
        assert!(white > red);
        assert!(red <= red);
        assert!(!(red < red));
    }

    #[test]
    fn indexing_covers_alpha_only_when_present() {
        let mut c = Color::rgba(1u8, 2, 3, 4);
        assert_eq!(c[3], 4);
        c[3] = 9;
        assert_eq!(c.alpha(), Some(9));

        let rgb = Color::rgb(1u8, 2, 3);
        assert_eq!(rgb[2], 3);
        assert_eq!(rgb.alpha(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rgb_has_no_fourth_channel() {
        let rgb = Color::rgb(1u8, 2, 3);
        let _ = rgb[3];
    }

    #[test]
    fn abs_and_neg() {
        let c = Rgb::rgb(-1.0f32, 0.5, -0.25);
        assert_eq!(c.abs(), Rgb::rgb(1.0, 0.5, 0.25));
        assert_eq!(-(-c), c);
    }
}
