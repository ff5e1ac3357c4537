use crate::foundation::core::{BYTES_PER_PIXEL, Rgba8, SpriteSize};
use crate::foundation::error::{SpriteError, SpriteResult};

/// Owned, row-major grid of straight-alpha samples.
///
/// Construction is the single place where dimensions are checked; the encoder relies on a
/// `SampleGrid` always holding exactly `width * height` samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    size: SpriteSize,
    samples: Vec<Rgba8>,
}

impl SampleGrid {
    /// Build a grid from row-major samples.
    pub fn new(width: usize, height: usize, samples: Vec<Rgba8>) -> SpriteResult<Self> {
        let size = SpriteSize::new(width, height)?;
        if samples.len() != size.pixel_count() {
            return Err(SpriteError::validation(format!(
                "grid {width}x{height} needs {} samples, got {}",
                size.pixel_count(),
                samples.len()
            )));
        }
        Ok(Self { size, samples })
    }

    /// Build a grid from packed straight-alpha RGBA8 bytes.
    pub fn from_rgba8_raw(width: usize, height: usize, bytes: &[u8]) -> SpriteResult<Self> {
        let size = SpriteSize::new(width, height)?;
        if bytes.len() != size.byte_len() {
            return Err(SpriteError::validation(format!(
                "rgba8 buffer for {width}x{height} must be {} bytes, got {}",
                size.byte_len(),
                bytes.len()
            )));
        }
        let samples = bytes
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| Rgba8::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self { size, samples })
    }

    /// Build a grid by sampling `f(x, y)` for every position.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Rgba8,
    ) -> SpriteResult<Self> {
        let size = SpriteSize::new(width, height)?;
        let mut samples = Vec::with_capacity(size.pixel_count());
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Ok(Self { size, samples })
    }

    pub fn size(&self) -> SpriteSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Sample at `(x, y)`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        assert!(x < self.size.width, "x {x} out of bounds");
        self.samples[y * self.size.width + x]
    }

    pub fn row(&self, y: usize) -> &[Rgba8] {
        let start = y * self.size.width;
        &self.samples[start..start + self.size.width]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgba8> {
        self.samples.chunks_exact(self.size.width)
    }

    pub fn samples(&self) -> &[Rgba8] {
        &self.samples
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/grid.rs"]
mod tests;
