// crates/tdsp-core/src/color/mod.rs

pub mod algebra;
pub mod codec;
pub mod format;
pub mod model;
pub mod names;

pub use algebra::{
    apply_to_components, apply_to_components2, apply_to_components_with_alpha,
    apply_to_components_with_alpha2, clear, distance2, distance2_with, greyness2, interpolate,
    make_color, make_color_alpha, with_alpha, without_alpha, BlueTerm, DISTANCE_BLUE_TERM,
};
pub use codec::{
    color_from_hex, hex_from_color, is_near_hex, parse_color, string_to_color, Base, ColorCodec,
};
pub use format::color_to_string;
pub use model::{Alpha, AlphaSlot, Color, ColorList, NoAlpha, Rgb, Rgba};
pub use names::{BuiltinNames, NameMap, NameTable};
