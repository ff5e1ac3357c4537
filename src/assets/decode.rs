use std::path::Path;

use anyhow::Context;

use crate::{
    assets::grid::SampleGrid,
    foundation::error::{SpriteError, SpriteResult},
};

/// Decode encoded image bytes into a straight-alpha sample grid.
///
/// Every format is converted to RGBA8. Premultiplication is left to the encoder.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> SpriteResult<SampleGrid> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| SpriteError::decode(e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, "decoded image");

    SampleGrid::from_rgba8_raw(width as usize, height as usize, rgba.as_raw())
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> SpriteResult<SampleGrid> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
