// crates/tdsp-core/src/signal/model.rs
//
// A sample is one instant of every channel of a signal. It is stored as a
// single array; access by channel name is an index lookup into that same
// array, so the two views cannot disagree.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::{Result, TdspError};
use crate::range::{scale, unscale, Normal, RangeSpec};

/// An ordered, enumerable set of channel names. Position in `ALL` is the
/// channel's index in every sample.
pub trait ChannelNames: Copy + Eq + fmt::Debug + 'static {
    const COUNT: usize;
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn name(self) -> &'static str;

    fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

/// Declare a channel-name enum, its [`ChannelNames`] impl, and a named-field
/// struct that converts to and from the sample array.
///
/// ```
/// tdsp_core::channels! {
///     /// Red, green, blue, white LED channels.
///     pub enum Rgbw, struct RgbwFields {
///         Red => red, Green => green, Blue => blue, White => white
///     }
/// }
/// use tdsp_core::signal::ChannelNames;
/// assert_eq!(Rgbw::COUNT, 4);
/// assert_eq!(Rgbw::White.name(), "white");
/// ```
#[macro_export]
macro_rules! channels {
    (
        $(#[$meta:meta])*
        $vis:vis enum $names:ident, struct $fields:ident {
            $($variant:ident => $field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $names {
            $($variant),+
        }

        impl $crate::signal::model::ChannelNames for $names {
            const COUNT: usize = [$(stringify!($variant)),+].len();
            const ALL: &'static [Self] = &[$($names::$variant),+];

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($names::$variant => stringify!($field)),+
                }
            }
        }

        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        $vis struct $fields<T> {
            $(pub $field: T),+
        }

        impl<T> From<$fields<T>>
            for [T; <$names as $crate::signal::model::ChannelNames>::COUNT]
        {
            fn from(f: $fields<T>) -> Self {
                [$(f.$field),+]
            }
        }

        impl<T> From<[T; <$names as $crate::signal::model::ChannelNames>::COUNT]>
            for $fields<T>
        {
            fn from(a: [T; <$names as $crate::signal::model::ChannelNames>::COUNT]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }
    };
}

channels! {
    /// Color channels of a light signal.
    pub enum RgbChannel, struct RgbFields { Red => red, Green => green, Blue => blue }
}

channels! {
    /// Two-channel audio.
    pub enum Stereo, struct StereoFields { Left => left, Right => right }
}

/// One instant of a signal with channels `C`, numbers in range `R`, and
/// `N == C::COUNT` channels (checked at compile time).
pub struct Sample<C: ChannelNames, R: RangeSpec, const N: usize> {
    array: [R::Number; N],
    _model: PhantomData<(C, R)>,
}

/// A signal: samples in time order.
pub type Vector<C, R, const N: usize> = Vec<Sample<C, R, N>>;

pub type RgbSample<R = Normal> = Sample<RgbChannel, R, 3>;
pub type StereoSample<R = Normal> = Sample<Stereo, R, 2>;

impl<C: ChannelNames, R: RangeSpec, const N: usize> Sample<C, R, N> {
    const SIZE_MATCHES: () = assert!(C::COUNT == N, "channel count must equal sample size");

    pub const SIZE: usize = N;

    #[inline]
    pub fn from_array(array: [R::Number; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_MATCHES;
        Self {
            array,
            _model: PhantomData,
        }
    }

    /// From a named-field aggregate such as [`RgbFields`].
    #[inline]
    pub fn from_fields<F: Into<[R::Number; N]>>(fields: F) -> Self {
        Self::from_array(fields.into())
    }

    /// From one value per channel, in channel order.
    pub fn from_values(values: &[R::Number]) -> Result<Self> {
        let array: [R::Number; N] =
            values
                .try_into()
                .map_err(|_| TdspError::ConstructionLengthMismatch {
                    expected: N,
                    actual: values.len(),
                })?;
        Ok(Self::from_array(array))
    }

    /// A copy of the named-field view.
    #[inline]
    pub fn fields<F: From<[R::Number; N]>>(&self) -> F {
        F::from(self.array)
    }

    #[inline]
    pub fn get(&self, name: C) -> R::Number {
        self.array[name.index()]
    }

    #[inline]
    pub fn set(&mut self, name: C, value: R::Number) {
        self.array[name.index()] = value;
    }

    #[inline]
    pub fn at(&self, i: usize) -> Option<R::Number> {
        self.array.get(i).copied()
    }

    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Option<&mut R::Number> {
        self.array.get_mut(i)
    }

    #[inline]
    pub fn as_array(&self) -> &[R::Number; N] {
        &self.array
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [R::Number; N] {
        &mut self.array
    }

    #[inline]
    pub fn into_array(self) -> [R::Number; N] {
        self.array
    }

    #[inline]
    pub fn len(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// `(name, value)` pairs in channel order.
    pub fn channels(&self) -> impl Iterator<Item = (C, R::Number)> + '_ {
        C::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub fn map(&self, f: impl FnMut(R::Number) -> R::Number) -> Self {
        Self::from_array(self.array.map(f))
    }

    pub fn zip_map(
        &self,
        other: &Self,
        mut f: impl FnMut(R::Number, R::Number) -> R::Number,
    ) -> Self {
        let mut out = *self;
        for (o, &y) in out.array.iter_mut().zip(other.array.iter()) {
            *o = f(*o, y);
        }
        out
    }

    /// The same sample expressed in range `R2`.
    pub fn rescale<R2>(&self) -> Sample<C, R2, N>
    where
        R2: RangeSpec<Number = R::Number>,
    {
        Sample::from_array(self.array.map(|x| scale::<R2>(unscale::<R>(x))))
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> Clone for Sample<C, R, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> Copy for Sample<C, R, N> {}

impl<C: ChannelNames, R: RangeSpec, const N: usize> Default for Sample<C, R, N> {
    fn default() -> Self {
        Self::from_array([R::Number::zero(); N])
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> PartialEq for Sample<C, R, N> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> fmt::Debug for Sample<C, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut m = f.debug_map();
        for (c, v) in self.channels() {
            m.entry(&c.name(), &v);
        }
        m.finish()
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> From<[R::Number; N]> for Sample<C, R, N> {
    fn from(array: [R::Number; N]) -> Self {
        Self::from_array(array)
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> Index<usize> for Sample<C, R, N> {
    type Output = R::Number;

    #[inline]
    fn index(&self, i: usize) -> &R::Number {
        &self.array[i]
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> IndexMut<usize> for Sample<C, R, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut R::Number {
        &mut self.array[i]
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> Index<C> for Sample<C, R, N> {
    type Output = R::Number;

    #[inline]
    fn index(&self, name: C) -> &R::Number {
        &self.array[name.index()]
    }
}

impl<C: ChannelNames, R: RangeSpec, const N: usize> IndexMut<C> for Sample<C, R, N> {
    #[inline]
    fn index_mut(&mut self, name: C) -> &mut R::Number {
        &mut self.array[name.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::EightBit;

    #[test]
    fn names_match_positions() {
        for (i, &c) in RgbChannel::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert_eq!(RgbChannel::from_index(i), Some(c));
        }
        assert_eq!(RgbChannel::from_index(3), None);
        assert_eq!(Stereo::Right.name(), "right");
    }

    #[test]
    fn writes_show_through_both_views() {
        let mut s: RgbSample = RgbSample::from_fields(RgbFields {
            red: 0.1,
            green: 0.2,
            blue: 0.3,
        });
        s[1] = 0.9;
        assert_eq!(s[RgbChannel::Green], 0.9);
        s[RgbChannel::Blue] = 0.4;
        assert_eq!(s.at(2), Some(0.4));
        s.set(RgbChannel::Red, 0.5);
        let f: RgbFields<f32> = s.fields();
        assert_eq!(f, RgbFields { red: 0.5, green: 0.9, blue: 0.4 });
    }

    #[test]
    fn from_values_checks_length() {
        let ok = StereoSample::<Normal>::from_values(&[0.25, 0.75]).unwrap();
        assert_eq!(ok.get(Stereo::Left), 0.25);

        let err = StereoSample::<Normal>::from_values(&[0.25]).unwrap_err();
        assert_eq!(
            err,
            TdspError::ConstructionLengthMismatch { expected: 2, actual: 1 }
        );
    }

    #[test]
    fn rescale_whole_sample() {
        let s: RgbSample<EightBit> = Sample::from_array([255.0, 51.0, 0.0]);
        let n: RgbSample<Normal> = s.rescale();
        assert_eq!(n.get(RgbChannel::Red), 1.0);
        assert!((n.get(RgbChannel::Green) - 0.2).abs() < 1e-6);
        assert_eq!(n.get(RgbChannel::Blue), 0.0);
    }

    #[test]
    fn debug_shows_names() {
        let s = StereoSample::<Normal>::from_array([0.5, 1.0]);
        assert_eq!(format!("{s:?}"), "{\"left\": 0.5, \"right\": 1.0}");
    }
}
