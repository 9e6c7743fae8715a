pub mod error;
pub mod validate;

pub mod range;
pub mod level;
pub mod color;
pub mod signal;

pub use crate::color::codec::{Base, ColorCodec};
pub use crate::color::model::{Color, ColorList, Rgb, Rgba};
pub use crate::error::{Result, TdspError};
pub use crate::range::{EightBit, Normal, RangeSpec, Ranged};
pub use crate::signal::fade::{Fade, FadeCurve};
pub use crate::signal::model::{ChannelNames, Sample, Vector};
