//! Linear interpolation between colors

use super::{Color, DeviceColor, Rgba, Rgba8};

/// Linear interpolation between `lower` and `upper`.
///
/// `t = 0` yields `lower` and `t = 1` yields `upper`; other values extrapolate.
#[inline]
pub fn cross_fade(lower: f64, upper: f64, t: f64) -> f64 {
    t * upper + (1.0 - t) * lower
}

/// A value that can be mixed with a [`Mixable::Mix`] by a fraction.
pub trait Mixable {
    type Mix;

    fn mix(&self, other: &Self::Mix, amount: f64) -> Self;
}

impl Mixable for Rgba {
    type Mix = Rgba;

    /// Mixes every channel, alpha included, and clamps the result.
    fn mix(&self, other: &Rgba, amount: f64) -> Self {
        Rgba::new(
            cross_fade(self.red(), other.red(), amount),
            cross_fade(self.green(), other.green(), amount),
            cross_fade(self.blue(), other.blue(), amount),
            cross_fade(self.alpha(), other.alpha(), amount),
        )
    }
}

/// Mixes two colors of any representations and composes the result as `T`.
pub fn mix<A, B, T>(a: &A, b: &B, amount: f64) -> T
where
    A: Color,
    B: Color,
    T: Color,
{
    T::from_rgba(a.to_rgba().mix(&b.to_rgba(), amount))
}

macro_rules! mix_through_rgba {
    ($($ty:ty),*) => {
        $(
            impl Mixable for $ty {
                type Mix = $ty;

                fn mix(&self, other: &$ty, amount: f64) -> Self {
                    mix(self, other, amount)
                }
            }
        )*
    };
}

mix_through_rgba!([f64; 4], Rgba8, DeviceColor);
