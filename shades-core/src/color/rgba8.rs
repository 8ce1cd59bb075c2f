//! 8-bit per channel color
//!
//! Composing an [`Rgba`] into an [`Rgba8`] rounds each channel to the nearest
//! of 256 levels, so the conversion is lossy. Erasing is exact.

use super::{Color, Rgba};

/// RGBA color with `u8` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = u8::MAX;

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    /// Converts a unit channel to its nearest 8-bit level.
    pub fn from_double(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * Self::BASE_MASK as f64).round() as u8
    }

    pub fn to_double(value: u8) -> f64 {
        value as f64 / Self::BASE_MASK as f64
    }

    /// Packs the channels as `0xRRGGBBAA`.
    pub fn to_packed(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    pub fn from_packed(value: u32) -> Self {
        let [r, g, b, a] = value.to_be_bytes();
        Self { r, g, b, a }
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Color for Rgba8 {
    fn from_rgba(rgba: Rgba) -> Self {
        Self {
            r: Self::from_double(rgba.red()),
            g: Self::from_double(rgba.green()),
            b: Self::from_double(rgba.blue()),
            a: Self::from_double(rgba.alpha()),
        }
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::rgba8(self.r as i32, self.g as i32, self.b as i32, self.a as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_rounds() {
        let color = Rgba8::from_rgba(Rgba::new(0.5, 0.0, 1.0, 0.2));
        assert_eq!(color, Rgba8::new(128, 0, 255, 51));
    }

    #[test]
    fn test_to_rgba_is_exact() {
        let color = Rgba8::new(255, 151, 112, 255);
        assert_eq!(color.to_rgba(), Rgba::APRICOT);
    }

    #[test]
    fn test_every_level_round_trips() {
        for level in 0..=u8::MAX {
            let color = Rgba8::new(level, level, level, level);
            assert_eq!(Rgba8::from_rgba(color.to_rgba()), color);
        }
    }

    #[test]
    fn test_precision_loss_is_permanent() {
        let original = Rgba::rgb(0.3, 0.3, 0.3);
        let reduced: Rgba = original.convert::<Rgba8>().convert();
        assert_ne!(reduced, original);
        let level = Rgba8::from_double(0.3) as i32;
        assert_eq!(reduced, Rgba::rgb8(level, level, level));
    }

    #[test]
    fn test_packed() {
        let color = Rgba8::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_packed(), 0x1234_5678);
        assert_eq!(Rgba8::from_packed(0x1234_5678), color);
        assert_eq!(color.to_bytes(), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_double_helpers() {
        assert_eq!(Rgba8::from_double(2.0), 255);
        assert_eq!(Rgba8::from_double(-1.0), 0);
        assert_eq!(Rgba8::to_double(255), 1.0);
        assert_eq!(Rgba8::new_opaque(1, 2, 3).a, 255);
    }
}
