//! spritec compiles raster images into render-ready sprites.
//!
//! A sprite is a premultiplied RGBA8 buffer plus two lists of per-row runs: one for
//! translucent pixels (`0 < a < 255`) and one for solid pixels (`a == 255`). Fully transparent
//! pixels are never listed, so a renderer copies solid runs, blends translucent runs, and skips
//! everything else without branching per pixel.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image bytes -> [`SampleGrid`] (straight alpha, dimensions validated once)
//! 2. **Encode**: [`SampleGrid`] -> [`EncodedSprite`] (infallible, optionally row-parallel)
//! 3. **Emit** (optional): [`EncodedSprite`] -> Rust source or JSON via [`emit`]
//!
//! Premultiplication uses `(c * a + 127) / 255`; see [`Rgba8Premul::from_straight_rgba`].
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod sprite;

/// Emitters for generated sprite files.
pub mod emit;

pub use assets::decode::{decode_image, load_image};
pub use assets::grid::SampleGrid;
pub use foundation::core::{BYTES_PER_PIXEL, PixelClass, Rgba8, Rgba8Premul, SpriteSize};
pub use foundation::error::{SpriteError, SpriteResult};
pub use sprite::encode::{EncodeOptions, encode, encode_with};
pub use sprite::model::{EncodedSprite, SpriteStats};
pub use sprite::run::RunSpan;
