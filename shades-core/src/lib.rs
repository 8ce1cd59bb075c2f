//! # shades
//!
//! Normalized RGBA colors, lossless-where-possible conversion between color
//! representations, and filters over single colors and whole bitmaps.
//!
//! ## Features
//!
//! - **Canonical color**: [`Rgba`] clamps every channel to `[0, 1]` on construction
//! - **Conversion**: any type implementing [`Color`] converts to any other through [`Rgba`]
//! - **Mixing**: [`Mixable`] cross-fades colors channel by channel
//! - **Filters**: greyscale, noise and aging for every [`Color`] through [`Filters`]
//! - **Bitmaps**: fixed-size [`Bitmap`] grids with the same filters, plus cross-fades
//! - **Rendering**: draw bitmaps on a [`PixelCanvas`] or any other [`Canvas`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shades::{Color, Filters, Mixable, Rgba, Rgba8};
//!
//! // Out-of-range channels are clamped, never rejected
//! let orange = Rgba::new(1.2, 0.6, 0.2, 1.0);
//! assert_eq!(orange.red(), 1.0);
//!
//! // Convert between representations
//! let bytes: Rgba8 = orange.convert();
//! assert_eq!(bytes, Rgba8::new(255, 153, 51, 255));
//!
//! // Mix and filter
//! let peach = orange.mix(&Rgba::WHITE, 0.5);
//! let grey = peach.greyed_out();
//! assert_eq!(grey.red(), grey.blue());
//! ```
//!
//! ### Bitmaps
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shades::{Bitmap, BitmapRenderer, Rgba};
//!
//! let board = Bitmap::<Rgba, 8, 8>::checkered(Rgba::APRICOT, Rgba::SKY_BLUE);
//! let mut rng = StdRng::seed_from_u64(3);
//! let old_photo = board.aged(&mut rng);
//!
//! let pixels = BitmapRenderer::to_pixels(&old_photo);
//! assert_eq!(pixels.width(), 8);
//! ```
//!
//! ## Modules
//!
//! - [`color`] - canonical color, conversion contract, mixing, filters
//! - [`bitmap`] - fixed-size color grids
//! - [`render`] - canvases and the bitmap renderer
//! - [`error`] - error type for the fallible operations

pub mod bitmap;
pub mod color;
pub mod error;
pub mod render;

pub use bitmap::{Bitmap, Position};
pub use color::{
    cross_fade, luma, mix, named, parse_hex, thread_noise, Color, DeviceColor, Filters, Mixable,
    RandomSource, Rgba, Rgba8, AGING_SHIFT, DEFAULT_NOISE_DELTA,
};
pub use error::{Result, ShadesError};
pub use render::{
    aspect_ratio, BitmapRenderer, Canvas, PixelCanvas, Point, Rect, RenderOptions, Size,
};

/// Current version of shades
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
