use std::ops::Range;

use crate::{
    foundation::core::{BYTES_PER_PIXEL, PixelClass, Rgba8Premul, SpriteSize},
    foundation::error::{SpriteError, SpriteResult},
    sprite::run::RunSpan,
};

/// Render-ready sprite: premultiplied RGBA8 bytes plus per-row run lists.
///
/// The run offsets only make sense against this exact `width`, so the five fields travel
/// together (emitters write all of them).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EncodedSprite {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Row-major premultiplied RGBA8, `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Runs of `0 < a < 255` pixels, sorted by `(row, x_start)`.
    pub translucent_runs: Vec<RunSpan>,
    /// Runs of `a == 255` pixels, sorted by `(row, x_start)`.
    pub solid_runs: Vec<RunSpan>,
}

/// Pixel and run counters for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SpriteStats {
    /// Total pixels.
    pub pixels: usize,
    /// Pixels with `a == 0`.
    pub transparent: usize,
    /// Pixels with `0 < a < 255`.
    pub translucent: usize,
    /// Pixels with `a == 255`.
    pub solid: usize,
    /// Number of translucent runs.
    pub translucent_runs: usize,
    /// Number of solid runs.
    pub solid_runs: usize,
}

impl EncodedSprite {
    pub fn size(&self) -> SpriteSize {
        SpriteSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Check that buffer and run lists are mutually consistent.
    ///
    /// Encoder output always passes; this guards sprites loaded from elsewhere.
    pub fn validate(&self) -> SpriteResult<()> {
        let size = SpriteSize::new(self.width, self.height)?;
        if self.data.len() != size.byte_len() {
            return Err(SpriteError::validation(format!(
                "sprite data must be {} bytes, got {}",
                size.byte_len(),
                self.data.len()
            )));
        }

        check_run_list("translucent", &self.translucent_runs, size)?;
        check_run_list("solid", &self.solid_runs, size)?;

        let mut classes = vec![PixelClass::Transparent; size.pixel_count()];
        for (class, runs) in [
            (PixelClass::Translucent, &self.translucent_runs),
            (PixelClass::Solid, &self.solid_runs),
        ] {
            for run in runs {
                for x in run.columns() {
                    let slot = &mut classes[run.row * size.width + x];
                    if *slot != PixelClass::Transparent {
                        return Err(SpriteError::validation(format!(
                            "run {:?} overlaps another run at column {x}",
                            run.to_array()
                        )));
                    }
                    *slot = class;
                }
            }
        }

        for (i, (class, px)) in classes
            .iter()
            .zip(self.data.chunks_exact(BYTES_PER_PIXEL))
            .enumerate()
        {
            let actual = PixelClass::of_alpha(px[3]);
            if actual != *class {
                return Err(SpriteError::validation(format!(
                    "pixel ({}, {}) has alpha {} but is covered as {class:?}",
                    i % size.width,
                    i / size.width,
                    px[3]
                )));
            }
            if actual == PixelClass::Transparent && px.iter().any(|&b| b != 0) {
                return Err(SpriteError::validation(format!(
                    "transparent pixel ({}, {}) is not zeroed",
                    i % size.width,
                    i / size.width
                )));
            }
        }

        Ok(())
    }

    /// Classification of `(x, y)` recovered from the run lists alone.
    pub fn class_at(&self, x: usize, y: usize) -> PixelClass {
        let covers = |runs: &[RunSpan]| {
            find_run(runs, x, y).is_some_and(|run| self.pixel_range(run).is_some())
        };
        if covers(&self.solid_runs[..]) {
            PixelClass::Solid
        } else if covers(&self.translucent_runs[..]) {
            PixelClass::Translucent
        } else {
            PixelClass::Transparent
        }
    }

    /// Row-major classification grid recovered from the run lists.
    ///
    /// Runs that fall outside the sprite are skipped; use [`EncodedSprite::validate`] to reject
    /// them instead.
    pub fn classes(&self) -> Vec<PixelClass> {
        let mut out = vec![PixelClass::Transparent; self.width * self.height];
        for (class, runs) in [
            (PixelClass::Translucent, &self.translucent_runs),
            (PixelClass::Solid, &self.solid_runs),
        ] {
            for run in runs {
                if let Some(pixels) = self.pixel_range(run) {
                    out[pixels].fill(class);
                }
            }
        }
        out
    }

    /// Rebuild the premultiplied pixels by walking the run lists, skipping transparent gaps.
    pub fn premul_pixels(&self) -> Vec<Rgba8Premul> {
        let mut out = vec![Rgba8Premul::transparent(); self.width * self.height];
        for (run, bytes) in self.solid_slices().chain(self.translucent_slices()) {
            let Some(pixels) = self.pixel_range(run) else {
                continue;
            };
            for (dst, px) in out[pixels].iter_mut().zip(bytes.chunks_exact(BYTES_PER_PIXEL)) {
                *dst = Rgba8Premul {
                    r: px[0],
                    g: px[1],
                    b: px[2],
                    a: px[3],
                };
            }
        }
        out
    }

    /// Solid runs paired with their bytes, ready for a straight copy.
    ///
    /// Runs pointing outside the buffer are skipped.
    pub fn solid_slices(&self) -> impl Iterator<Item = (&RunSpan, &[u8])> + '_ {
        self.run_slices(&self.solid_runs)
    }

    /// Translucent runs paired with their bytes, ready for blending.
    ///
    /// Runs pointing outside the buffer are skipped.
    pub fn translucent_slices(&self) -> impl Iterator<Item = (&RunSpan, &[u8])> + '_ {
        self.run_slices(&self.translucent_runs)
    }

    fn run_slices<'a>(
        &'a self,
        runs: &'a [RunSpan],
    ) -> impl Iterator<Item = (&'a RunSpan, &'a [u8])> + 'a {
        runs.iter().filter_map(|run| {
            self.pixel_range(run)?;
            Some((run, &self.data[run.src_range()]))
        })
    }

    /// Flat pixel-index range of `run`, or `None` when the run does not fit this sprite.
    fn pixel_range(&self, run: &RunSpan) -> Option<Range<usize>> {
        let cols = run.columns();
        if run.row >= self.height
            || cols.start > cols.end
            || cols.end > self.width
            || run.src_start > run.src_end
            || run.src_end > self.data.len()
            || run.src_end - run.src_start != cols.len() * BYTES_PER_PIXEL
        {
            return None;
        }
        let base = run.row * self.width;
        Some(base + cols.start..base + cols.end)
    }

    pub fn stats(&self) -> SpriteStats {
        let mut stats = SpriteStats {
            pixels: self.width * self.height,
            translucent_runs: self.translucent_runs.len(),
            solid_runs: self.solid_runs.len(),
            ..SpriteStats::default()
        };
        for px in self.data.chunks_exact(BYTES_PER_PIXEL) {
            match PixelClass::of_alpha(px[3]) {
                PixelClass::Transparent => stats.transparent += 1,
                PixelClass::Translucent => stats.translucent += 1,
                PixelClass::Solid => stats.solid += 1,
            }
        }
        stats
    }
}

fn find_run(runs: &[RunSpan], x: usize, y: usize) -> Option<&RunSpan> {
    let key = (y, x * BYTES_PER_PIXEL);
    let idx = runs.partition_point(|r| (r.row, r.x_start) <= key);
    let run = runs.get(idx.checked_sub(1)?)?;
    (run.row == y && run.contains_column(x)).then_some(run)
}

fn check_run_list(label: &str, runs: &[RunSpan], size: SpriteSize) -> SpriteResult<()> {
    let stride = size.row_stride();
    let mut prev: Option<&RunSpan> = None;

    for run in runs {
        let bad = |why: &str| {
            SpriteError::validation(format!("{label} run {:?} {why}", run.to_array()))
        };

        if run.row >= size.height {
            return Err(bad("is below the last row"));
        }
        if run.x_start >= run.x_end {
            return Err(bad("is empty"));
        }
        if run.x_end > stride {
            return Err(bad("extends past the row"));
        }
        if run.x_start % BYTES_PER_PIXEL != 0 || run.x_end % BYTES_PER_PIXEL != 0 {
            return Err(bad("is not pixel aligned"));
        }
        let base = run.row * stride;
        if run.src_start != base + run.x_start || run.src_end != base + run.x_end {
            return Err(bad("has buffer offsets that disagree with its row offsets"));
        }
        if let Some(p) = prev {
            if (p.row, p.x_start) >= (run.row, run.x_start) {
                return Err(bad("is out of order"));
            }
            if p.row == run.row && p.x_end >= run.x_start {
                return Err(bad("touches or overlaps the previous run"));
            }
        }
        prev = Some(run);
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/model.rs"]
mod tests;
