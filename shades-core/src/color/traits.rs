//! The conversion contract shared by every color representation
//!
//! A type implements [`Color`] by saying how to build itself from an [`Rgba`]
//! and how to erase itself back to one. Conversion between any two
//! representations and channel mapping come for free through the provided
//! methods.

use super::Rgba;

/// A concrete color representation that converts through [`Rgba`].
pub trait Color: Sized {
    /// Builds this representation from a canonical color.
    fn from_rgba(rgba: Rgba) -> Self;

    /// Erases this representation to a canonical color.
    ///
    /// Representations without an alpha channel report full opacity.
    fn to_rgba(&self) -> Rgba;

    /// Converts to any other representation by way of [`Rgba`].
    ///
    /// Precision lost by either side stays lost.
    fn convert<U: Color>(&self) -> U {
        U::from_rgba(self.to_rgba())
    }

    /// Applies `transform` to the canonical form and returns whatever it produces.
    fn map_rgba<T, F>(&self, transform: F) -> T
    where
        F: FnOnce(Rgba) -> T,
    {
        transform(self.to_rgba())
    }

    /// Applies `transform` to each color channel and re-clamps the result.
    ///
    /// Alpha is left untouched unless `include_alpha` is set.
    /// Channels are visited in red, green, blue, alpha order, so a stateful
    /// `transform` sees them in that order.
    fn map_channels<F>(&self, mut transform: F, include_alpha: bool) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let rgba = self.map_rgba(|c| {
            Rgba::new(
                transform(c.red()),
                transform(c.green()),
                transform(c.blue()),
                if include_alpha {
                    transform(c.alpha())
                } else {
                    c.alpha()
                },
            )
        });
        Self::from_rgba(rgba)
    }

    /// Applies `transform` to `self`.
    fn map_self<T, F>(&self, transform: F) -> T
    where
        F: FnOnce(&Self) -> T,
    {
        transform(self)
    }
}

impl Color for Rgba {
    fn from_rgba(rgba: Rgba) -> Self {
        rgba
    }

    fn to_rgba(&self) -> Rgba {
        *self
    }
}

impl Color for [f64; 4] {
    fn from_rgba(rgba: Rgba) -> Self {
        rgba.channels()
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_is_identity() {
        let color = Rgba::new(0.5, 0.4, 0.8, 1.0);
        assert_eq!(Rgba::from_rgba(color), color);
        assert_eq!(color.to_rgba(), color);
    }

    #[test]
    fn test_array_round_trip() {
        let color = Rgba::new(0.7, 0.4, 0.3, 0.6);
        let array = <[f64; 4]>::from_rgba(color);
        assert_eq!(array, [0.7, 0.4, 0.3, 0.6]);
        assert_eq!(array.to_rgba(), color);
    }

    #[test]
    fn test_array_erasure_clamps() {
        let array = [1.5, -0.5, 0.25, 3.0];
        assert_eq!(array.to_rgba(), Rgba::new(1.0, 0.0, 0.25, 1.0));
    }

    #[test]
    fn test_convert() {
        let array = [0.1, 0.2, 0.3, 0.4];
        let rgba: Rgba = array.convert();
        assert_eq!(rgba.channels(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_map_channels_preserves_alpha_by_default() {
        let color = Rgba::new(0.2, 0.4, 0.6, 0.5);
        let mapped = color.map_channels(|c| c * 2.0, false);
        assert_eq!(mapped, Rgba::new(0.4, 0.8, 1.0, 0.5));
    }

    #[test]
    fn test_map_channels_includes_alpha() {
        let color = Rgba::new(0.2, 0.4, 0.6, 0.5);
        let mapped = color.map_channels(|c| c * 2.0, true);
        assert_eq!(mapped, Rgba::new(0.4, 0.8, 1.0, 1.0));
    }

    #[test]
    fn test_map_channels_clamps() {
        let color = Rgba::rgb(0.5, 0.5, 0.5);
        let mapped = color.map_channels(|c| c - 1.0, false);
        assert_eq!(mapped, Rgba::BLACK);
    }

    #[test]
    fn test_map_channels_accepts_stateful_transform() {
        let mut visited = Vec::new();
        let mapped = Rgba::new(0.1, 0.2, 0.3, 0.4).map_channels(
            |c| {
                visited.push(c);
                c
            },
            false,
        );
        assert_eq!(visited, vec![0.1, 0.2, 0.3]);
        assert_eq!(mapped, Rgba::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_map_rgba_returns_any_type() {
        let brightest = [0.1, 0.9, 0.3, 1.0].map_rgba(|c| c.red().max(c.green()).max(c.blue()));
        assert_eq!(brightest, 0.9);
    }

    #[test]
    fn test_map_self() {
        let color = Rgba::RED;
        let described = color.map_self(|c| format!("{:.1}", c.red()));
        assert_eq!(described, "1.0");
    }
}
