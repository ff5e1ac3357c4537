use crate::foundation::error::{SpriteError, SpriteResult};

/// Bytes per encoded pixel (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// One straight-alpha input sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn class(self) -> PixelClass {
        PixelClass::of_alpha(self.a)
    }

    pub fn premultiplied(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Three-way alpha classification that drives run segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelClass {
    /// `a == 0`; never drawn.
    Transparent,
    /// `0 < a < 255`; needs blending.
    Translucent,
    /// `a == 255`; copied as-is.
    Solid,
}

impl PixelClass {
    pub const fn of_alpha(a: u8) -> Self {
        match a {
            0 => Self::Transparent,
            255 => Self::Solid,
            _ => Self::Translucent,
        }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha sample.
    ///
    /// Channels are computed as `(c * a + 127) / 255` with truncating integer division. The
    /// `+127` bias rounds to nearest (half up) rather than truncating, which differs from the
    /// more common `(c * a) / 255` or `div_255` helpers. Consumers that composite these bytes
    /// assume this exact rounding, so keep it byte-for-byte.
    ///
    /// Fully transparent samples collapse to `(0,0,0,0)`; solid samples pass through.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        match a {
            0 => Self::transparent(),
            255 => Self { r, g, b, a },
            _ => Self {
                r: premul(r, a),
                g: premul(g, a),
                b: premul(b, a),
                a,
            },
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Sprite dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteSize {
    pub width: usize,
    pub height: usize,
}

impl SpriteSize {
    /// Build a size, rejecting zero dimensions and byte lengths that overflow `usize`.
    pub fn new(width: usize, height: usize) -> SpriteResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpriteError::validation(format!(
                "sprite dimensions must be positive, got {width}x{height}"
            )));
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| {
                SpriteError::validation(format!("sprite {width}x{height} is too large"))
            })?;
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        self.width * self.height
    }

    /// Bytes per encoded row.
    pub fn row_stride(self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Total encoded buffer length.
    pub fn byte_len(self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
