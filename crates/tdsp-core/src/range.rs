// crates/tdsp-core/src/range.rs
//
// Type-level numeric ranges. A range is a domain `[begin, begin + extent]`;
// every conversion goes through the canonical `[0, 1]` domain.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use num_traits::{Float, Zero};

/// A compile-time range descriptor.
///
/// `Number` is bounded by `Float`: integral ranges are not supported, and a
/// range over an integer type does not compile.
///
/// ```compile_fail
/// use tdsp_core::range::RangeSpec;
///
/// #[derive(Clone, Copy, Debug)]
/// struct Bytes;
///
/// impl RangeSpec for Bytes {
///     type Number = u8;
///     fn begin() -> u8 { 0 }
///     fn extent() -> u8 { 255 }
/// }
/// ```
pub trait RangeSpec: Copy + fmt::Debug + 'static {
    type Number: Float + fmt::Debug;

    fn begin() -> Self::Number;

    /// Width of the range. Must be non-zero.
    fn extent() -> Self::Number;
}

/// `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Normal<T = f32>(PhantomData<T>);

/// `[0, 255]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EightBit<T = f32>(PhantomData<T>);

impl<T: Float + fmt::Debug + 'static> RangeSpec for Normal<T> {
    type Number = T;

    #[inline]
    fn begin() -> T {
        T::zero()
    }

    #[inline]
    fn extent() -> T {
        T::one()
    }
}

impl<T: Float + fmt::Debug + From<u8> + 'static> RangeSpec for EightBit<T> {
    type Number = T;

    #[inline]
    fn begin() -> T {
        T::zero()
    }

    #[inline]
    fn extent() -> T {
        <T as From<u8>>::from(u8::MAX)
    }
}

/// Map a number in range `R` onto `[0, 1]`. Out-of-range numbers scale
/// proportionately.
#[inline]
pub fn unscale<R: RangeSpec>(x: R::Number) -> R::Number {
    debug_assert!(R::extent() != R::Number::zero(), "range extent is zero");
    (x - R::begin()) / R::extent()
}

/// Map a number in `[0, 1]` onto range `R`. Out-of-range numbers scale
/// proportionately.
#[inline]
pub fn scale<R: RangeSpec>(y: R::Number) -> R::Number {
    R::begin() + y * R::extent()
}

/// A number carrying its range in its type. Converting between ranges costs
/// one `unscale` and one `scale`; the range itself takes no space.
pub struct Ranged<R: RangeSpec> {
    pub number: R::Number,
    _range: PhantomData<R>,
}

impl<R: RangeSpec> Ranged<R> {
    #[inline]
    pub fn new(number: R::Number) -> Self {
        Self {
            number,
            _range: PhantomData,
        }
    }

    /// Build from a canonical `[0, 1]` value.
    #[inline]
    pub fn from_unscaled(y: R::Number) -> Self {
        Self::new(scale::<R>(y))
    }

    #[inline]
    pub fn get(self) -> R::Number {
        self.number
    }

    /// This number expressed in `[0, 1]`.
    #[inline]
    pub fn unscaled(self) -> R::Number {
        unscale::<R>(self.number)
    }

    /// Reinterpret in another range over the same numeric type.
    #[inline]
    pub fn rescale<R2>(self) -> Ranged<R2>
    where
        R2: RangeSpec<Number = R::Number>,
    {
        Ranged::new(scale::<R2>(unscale::<R>(self.number)))
    }
}

impl<R: RangeSpec> Clone for Ranged<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RangeSpec> Copy for Ranged<R> {}

impl<R: RangeSpec> Default for Ranged<R> {
    fn default() -> Self {
        Self::new(R::Number::zero())
    }
}

impl<R: RangeSpec> fmt::Debug for Ranged<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranged")
            .field("number", &self.number)
            .field("range", &(R::begin(), R::extent()))
            .finish()
    }
}

impl<R: RangeSpec> PartialEq for Ranged<R> {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl<R: RangeSpec> PartialOrd for Ranged<R> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.number.partial_cmp(&other.number)
    }
}

impl<R: RangeSpec> Deref for Ranged<R> {
    type Target = R::Number;

    fn deref(&self) -> &R::Number {
        &self.number
    }
}

impl<R: RangeSpec> DerefMut for Ranged<R> {
    fn deref_mut(&mut self) -> &mut R::Number {
        &mut self.number
    }
}

impl<T: Float + fmt::Debug + 'static> From<T> for Ranged<Normal<T>> {
    fn from(number: T) -> Self {
        Self::new(number)
    }
}

impl<T: Float + fmt::Debug + From<u8> + 'static> From<T> for Ranged<EightBit<T>> {
    fn from(number: T) -> Self {
        Self::new(number)
    }
}

macro_rules! ranged_into_number {
    ($($t:ty),*) => {$(
        impl From<Ranged<Normal<$t>>> for $t {
            fn from(r: Ranged<Normal<$t>>) -> $t {
                r.number
            }
        }

        impl From<Ranged<EightBit<$t>>> for $t {
            fn from(r: Ranged<EightBit<$t>>) -> $t {
                r.number
            }
        }
    )*};
}

ranged_into_number!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_bit_to_normal() {
        let x: Ranged<EightBit> = Ranged::new(51.0);
        let n: Ranged<Normal> = x.rescale();
        assert!((n.get() - 0.2).abs() < 1e-6, "got {}", n.get());
    }

    #[test]
    fn out_of_band_extrapolates() {
        let x: Ranged<Normal<f64>> = Ranged::new(-0.5);
        let y: Ranged<EightBit<f64>> = x.rescale();
        assert_eq!(y.get(), -127.5);

        let z: Ranged<Normal<f64>> = Ranged::new(2.0);
        assert_eq!(z.rescale::<EightBit<f64>>().get(), 510.0);
    }

    #[test]
    fn converts_to_and_from_the_number() {
        let x: Ranged<EightBit> = 51.0f32.into();
        let n: Ranged<Normal> = x.rescale();
        let y: f32 = n.into();
        assert!((y - 0.2).abs() < 1e-6);

        let d = Ranged::<Normal<f64>>::from(0.5f64);
        assert_eq!(f64::from(d), 0.5);
    }

    #[test]
    fn usable_as_plain_number() {
        let mut x: Ranged<EightBit> = Ranged::new(10.0);
        *x += 5.0;
        assert_eq!(*x * 2.0, 30.0);
    }
}
