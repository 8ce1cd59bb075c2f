//! Random sources for the noise filters
//!
//! Filters never reach for a global generator: callers pass a
//! [`RandomSource`] so tests can seed it.

use rand::Rng;

/// A source of uniformly distributed samples.
pub trait RandomSource {
    /// Returns a sample in the closed range `[low, high]`.
    ///
    /// Empty or non-finite ranges return `low`. Never panics for finite
    /// bounds, even when `high - low` overflows.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        if low >= high || !low.is_finite() || !high.is_finite() {
            return low;
        }
        if !(high - low).is_finite() {
            // rand's uniform sampler rejects ranges wider than f64::MAX
            let t: f64 = self.gen();
            return (low + t * high - t * low).clamp(low, high);
        }
        self.gen_range(low..=high)
    }
}

/// Thread-local generator for callers that do not need reproducible noise.
pub fn thread_noise() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}
