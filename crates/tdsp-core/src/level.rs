/// The full-scale level of a channel number type: `1.0` for floats, the
/// largest representable value for unsigned integers.
pub trait Level: Copy {
    fn maximum() -> Self;

    fn minimum() -> Self;
}

macro_rules! float_level {
    ($($t:ty),*) => {$(
        impl Level for $t {
            #[inline]
            fn maximum() -> Self {
                1.0
            }

            #[inline]
            fn minimum() -> Self {
                0.0
            }
        }
    )*};
}

macro_rules! int_level {
    ($($t:ty),*) => {$(
        impl Level for $t {
            #[inline]
            fn maximum() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn minimum() -> Self {
                0
            }
        }
    )*};
}

float_level!(f32, f64);
int_level!(u8, u16, u32);

#[inline]
pub fn maximum<T: Level>() -> T {
    T::maximum()
}
