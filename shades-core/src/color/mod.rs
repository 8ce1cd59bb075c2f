//! Color representations and the transforms shared between them
//!
//! [`Rgba`] is the canonical form. Anything implementing [`Color`] converts
//! through it, and picks up [`Filters`] and channel mapping on the way.

mod device;
mod filters;
mod mixable;
pub mod named;
mod parse;
mod random;
mod rgba;
mod rgba8;
mod traits;

pub use device::DeviceColor;
pub use filters::{luma, Filters, AGING_SHIFT, DEFAULT_NOISE_DELTA};
pub use mixable::{cross_fade, mix, Mixable};
pub use parse::parse_hex;
pub use random::{thread_noise, RandomSource};
pub use rgba::Rgba;
pub use rgba8::Rgba8;
pub use traits::Color;
