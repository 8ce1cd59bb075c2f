//! Canonical RGBA color
//!
//! [`Rgba`] is the interchange format every other color representation in this
//! crate converts through. Its four channels are `f64` values that always lie
//! in `[0, 1]`: constructors clamp instead of failing.

use super::Color;
use std::hash::{Hash, Hasher};

/// Clamps a channel value into `[0, 1]`.
///
/// NaN maps to `0.0` and a negative zero is normalized so that equal values
/// always share a bit pattern.
#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0) + 0.0
    }
}

/// Normalized RGBA color with channels clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ChannelRecord"))]
pub struct Rgba {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Rgba {
    /// Creates a color, clamping every channel to `[0, 1]`.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// Creates an opaque color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates a color from 8-bit channels.
    ///
    /// Each channel is divided by 255 before clamping, so values outside
    /// `0..=255` saturate instead of wrapping.
    pub fn rgba8(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self::new(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn rgb8(red: i32, green: i32, blue: i32) -> Self {
        Self::rgba8(red, green, blue, 255)
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Channels in `[red, green, blue, alpha]` order.
    pub fn channels(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns a copy with a different alpha, clamped.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Composes this color into another representation.
    pub fn compose<T: Color>(&self) -> T {
        T::from_rgba(*self)
    }

    /// Overwrites `target` with this color composed into its representation.
    pub fn paint<T: Color>(&self, target: &mut T) {
        *target = self.compose();
    }

    pub const APRICOT: Rgba = Rgba::opaque(1.0, 151.0 / 255.0, 112.0 / 255.0);
    pub const BEIGE: Rgba = Rgba::opaque(1.0, 0.906, 0.82);
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const BLUE: Rgba = Rgba::opaque(0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::opaque(0.0, 1.0, 0.0);
    pub const LIGHT_ORANGE: Rgba = Rgba::opaque(1.0, 0.592, 0.439);
    pub const LIGHT_PEACH: Rgba = Rgba::opaque(1.0, 232.0 / 255.0, 209.0 / 255.0);
    pub const POOL_BLUE: Rgba = Rgba::opaque(118.0 / 255.0, 229.0 / 255.0, 252.0 / 255.0);
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    pub const SKY_BLUE: Rgba = Rgba::opaque(100.0 / 255.0, 175.0 / 255.0, 1.0);
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const YELLOW: Rgba = Rgba::opaque(1.0, 1.0, 0.0);
    /// Fully transparent black.
    pub const CLEAR: Rgba = Rgba {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    // Only for literals already inside [0, 1].
    const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

// Channels are never NaN once clamped.
impl Eq for Rgba {}

impl Hash for Rgba {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for channel in self.channels() {
            channel.to_bits().hash(state);
        }
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([red, green, blue, alpha]: [f64; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(color: Rgba) -> Self {
        color.channels()
    }
}

/// Serialized form of [`Rgba`]; deserialization re-clamps through [`Rgba::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ChannelRecord {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<ChannelRecord> for Rgba {
    fn from(record: ChannelRecord) -> Self {
        Self::new(record.red, record.green, record.blue, record.alpha)
    }
}
