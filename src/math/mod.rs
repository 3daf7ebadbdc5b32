mod easing;
mod noise;

pub use easing::{lerp, remap_unit_to_signed, smoothstep};
pub use noise::{ConstantNoise, Perlin2D};
