//! Per-color filters built on the [`Color`] contract
//!
//! Every representation gets these through the blanket [`Filters`] impl.

use super::{Color, RandomSource, Rgba};

/// Default noise amplitude, about 50/255.
pub const DEFAULT_NOISE_DELTA: f64 = 0.196;

/// Red/blue shift applied by [`Filters::aged`].
pub const AGING_SHIFT: f64 = 0.196;

/// Perceptual luma of a color's red, green and blue channels.
pub fn luma(rgba: &Rgba) -> f64 {
    0.3 * rgba.red() + 0.59 * rgba.green() + 0.11 * rgba.blue()
}

/// Filters available to every [`Color`].
pub trait Filters: Color {
    /// Replaces red, green and blue with the color's luma. Alpha is kept.
    fn greyed_out(&self) -> Self {
        let rgba = self.map_rgba(|c| {
            let grey = luma(&c);
            Rgba::new(grey, grey, grey, c.alpha())
        });
        Self::from_rgba(rgba)
    }

    /// Shifts red, green and blue by independent samples in `[-delta, delta]`.
    ///
    /// Alpha never changes. A negative `delta` is used by magnitude and a
    /// non-finite one adds no noise.
    fn adding_noise<R>(&self, rng: &mut R, delta: f64) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let delta = if delta.is_finite() { delta.abs() } else { 0.0 };
        self.map_channels(|c| c + rng.next_in_range(-delta, delta), false)
    }

    /// Old-photo look: grey, then noise, then a warm shift of red up and blue down.
    fn aged<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let noisy = self
            .to_rgba()
            .greyed_out()
            .adding_noise(rng, DEFAULT_NOISE_DELTA);
        Self::from_rgba(Rgba::new(
            noisy.red() + AGING_SHIFT,
            noisy.green(),
            noisy.blue() - AGING_SHIFT,
            noisy.alpha(),
        ))
    }
}

impl<C: Color> Filters for C {}
