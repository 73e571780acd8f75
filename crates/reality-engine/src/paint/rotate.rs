//! Per-frame color rotation.
//!
//! A rotation adds a fixed `(dr, dg, db)` to the first three channels of a
//! color. The variants differ only in what happens to a channel that ends up
//! strictly above `1.0`:
//!
//! - [`rotate`]: nothing; channels may leave `[0, 1]` in either direction.
//! - [`rotate_wrap`]: subtract `1.0` once.
//! - [`rotate_digit_wrap`]: keep only the first decimal digit,
//!   `trunc(v * 10) % 10`, as an integer-valued float.
//!
//! None of them correct negative channels, and alpha is never touched.

use std::str::FromStr;

/// Per-channel deltas applied by one rotation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rotation {
    pub dr: f32,
    pub dg: f32,
    pub db: f32,
}

impl Rotation {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(dr: f32, dg: f32, db: f32) -> Self {
        Self { dr, dg, db }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.dr, self.dg, self.db]
    }
}

impl From<[f32; 3]> for Rotation {
    #[inline]
    fn from([dr, dg, db]: [f32; 3]) -> Self {
        Self::new(dr, dg, db)
    }
}

/// Anything with mutable red, green and blue channels.
///
/// Implemented for [`Color`](super::Color) and for bare `[f32; 3]` / `[f32; 4]`
/// channel arrays; a fourth element is treated as alpha and left alone.
pub trait RgbChannels {
    fn rgb_mut(&mut self) -> [&mut f32; 3];
}

impl RgbChannels for super::Color {
    #[inline]
    fn rgb_mut(&mut self) -> [&mut f32; 3] {
        [&mut self.r, &mut self.g, &mut self.b]
    }
}

impl RgbChannels for [f32; 3] {
    #[inline]
    fn rgb_mut(&mut self) -> [&mut f32; 3] {
        let [r, g, b] = self;
        [r, g, b]
    }
}

impl RgbChannels for [f32; 4] {
    #[inline]
    fn rgb_mut(&mut self) -> [&mut f32; 3] {
        let [r, g, b, _] = self;
        [r, g, b]
    }
}

/// What to do with a channel that exceeds `1.0` after the addition.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Overflow {
    /// Leave it as is.
    Unchecked,
    /// Subtract `1.0` once.
    #[default]
    WrapByOne,
    /// Replace it with `trunc(v * 10) % 10`.
    DecimalDigit,
}

impl Overflow {
    /// Applies the policy to a single post-addition channel value.
    ///
    /// Only values strictly greater than `1.0` are affected.
    #[inline]
    pub fn apply(self, value: f32) -> f32 {
        // NaN is passed through untouched.
        if value.is_nan() || value <= 1.0 {
            return value;
        }
        match self {
            Overflow::Unchecked => value,
            Overflow::WrapByOne => value - 1.0,
            Overflow::DecimalDigit => ((value * 10.0) as i64 % 10) as f32,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Overflow::Unchecked => "unchecked",
            Overflow::WrapByOne => "wrap",
            Overflow::DecimalDigit => "digit",
        }
    }
}

impl FromStr for Overflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unchecked" => Ok(Overflow::Unchecked),
            "wrap" => Ok(Overflow::WrapByOne),
            "digit" => Ok(Overflow::DecimalDigit),
            other => Err(format!(
                "unknown overflow policy `{other}` (expected unchecked, wrap or digit)"
            )),
        }
    }
}

/// Adds `delta` to the RGB channels with no bounds handling.
#[inline]
pub fn rotate<C: RgbChannels>(color: &mut C, delta: Rotation) {
    for (channel, d) in color.rgb_mut().into_iter().zip(delta.to_array()) {
        *channel += d;
    }
}

/// Adds `delta`, then wraps each channel above `1.0` down by one.
///
/// A single subtraction: a delta larger than `1.0` can leave a channel
/// above range. Small deltas accumulated over many calls stay in `[0, 1)`.
#[inline]
pub fn rotate_wrap<C: RgbChannels>(color: &mut C, delta: Rotation) {
    rotate_with(color, delta, Overflow::WrapByOne);
}

/// Adds `delta`, then maps each channel above `1.0` to its first decimal digit.
///
/// `1.37` becomes `3.0`, `2.91` becomes `9.0`. The result is not in `[0, 1)`.
#[inline]
pub fn rotate_digit_wrap<C: RgbChannels>(color: &mut C, delta: Rotation) {
    rotate_with(color, delta, Overflow::DecimalDigit);
}

/// Adds `delta`, then applies `policy` to each RGB channel independently.
#[inline]
pub fn rotate_with<C: RgbChannels>(color: &mut C, delta: Rotation, policy: Overflow) {
    rotate(color, delta);
    if policy == Overflow::Unchecked {
        return;
    }
    for channel in color.rgb_mut() {
        *channel = policy.apply(*channel);
    }
}
