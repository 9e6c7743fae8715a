// crates/tdsp-core/src/signal/mod.rs

pub mod model;

pub mod fade;

pub use model::{
    ChannelNames, RgbChannel, RgbFields, RgbSample, Sample, Stereo, StereoFields, StereoSample,
    Vector,
};
