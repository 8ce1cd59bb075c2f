//! Device color spaces without alpha
//!
//! [`DeviceColor`] stands in for the colors a printer or display driver
//! accepts: plain RGB, a single grey level, or CMYK ink coverage. Composing
//! from an [`Rgba`] always picks RGB; erasing reports full opacity.

use super::{Color, Rgba};

#[inline]
fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// An opaque color in one of three device spaces; every component is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceColor {
    Rgb(f64, f64, f64),
    /// `0` is black, `1` is white.
    Gray(f64),
    /// Cyan, magenta, yellow and key ink coverage.
    Cmyk(f64, f64, f64, f64),
}

impl DeviceColor {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        DeviceColor::Rgb(unit(red), unit(green), unit(blue))
    }

    pub fn gray(level: f64) -> Self {
        DeviceColor::Gray(unit(level))
    }

    pub fn cmyk(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        DeviceColor::Cmyk(unit(cyan), unit(magenta), unit(yellow), unit(key))
    }

    /// Additive red, green and blue; CMYK uses the naive `(1 - ink)(1 - key)` model.
    pub fn rgb_components(&self) -> (f64, f64, f64) {
        match *self {
            DeviceColor::Rgb(r, g, b) => (r, g, b),
            DeviceColor::Gray(level) => (level, level, level),
            DeviceColor::Cmyk(c, m, y, k) => {
                let white = 1.0 - k;
                ((1.0 - c) * white, (1.0 - m) * white, (1.0 - y) * white)
            }
        }
    }
}

impl Color for DeviceColor {
    fn from_rgba(rgba: Rgba) -> Self {
        DeviceColor::Rgb(rgba.red(), rgba.green(), rgba.blue())
    }

    fn to_rgba(&self) -> Rgba {
        let (r, g, b) = self.rgb_components();
        Rgba::rgb(r, g, b)
    }
}
