mod conversion;
mod equality;
mod math;
mod names;
mod string;

// conversion
pub(crate) use conversion::{
    clamp_rgb, from_24bit, hsl_to_rgb, hsv_to_rgb, is_achromatic, rgb_to_hsl, rgb_to_hsv, to_24bit,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_within;
pub use equality::to_eq_bits;

// math
pub(crate) use math::{ceil_hue, wrap_hue, FloatExt};
pub use math::{clamp, round2};

// names
pub(crate) use names::to_name;

// string
pub(crate) use string::parse;
