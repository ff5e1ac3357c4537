use rayon::prelude::*;

use crate::{
    assets::grid::SampleGrid,
    foundation::core::{BYTES_PER_PIXEL, PixelClass, Rgba8},
    foundation::error::{SpriteError, SpriteResult},
    sprite::model::EncodedSprite,
    sprite::run::RunSpan,
};

#[derive(Clone, Debug, Default)]
/// Threading controls for [`encode_with`].
pub struct EncodeOptions {
    /// Encode rows in parallel on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

#[derive(Default)]
struct RowRuns {
    translucent: Vec<RunSpan>,
    solid: Vec<RunSpan>,
}

/// Encode a sample grid into a premultiplied buffer plus translucent and solid run lists.
///
/// Rows are segmented left to right over `width + 1` columns; the extra column is a
/// synthetic transparent sentinel so a run touching the right edge is closed by the same
/// transition logic as any other run. The sentinel is never written to the buffer.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn encode(grid: &SampleGrid) -> EncodedSprite {
    let size = grid.size();
    let stride = size.row_stride();
    let mut data = vec![0u8; size.byte_len()];
    let mut runs = RowRuns::default();

    for (y, (row, out)) in grid.rows().zip(data.chunks_exact_mut(stride)).enumerate() {
        encode_row(row, y, stride, out, &mut runs);
    }

    finish(grid, data, runs)
}

/// Encode with explicit threading options.
///
/// Parallel mode processes rows independently and stitches them back in row order, so the
/// result is identical to [`encode`].
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn encode_with(grid: &SampleGrid, opts: &EncodeOptions) -> SpriteResult<EncodedSprite> {
    if !opts.parallel {
        if opts.threads.is_some() {
            tracing::debug!("ignoring thread count in sequential mode");
        }
        return Ok(encode(grid));
    }

    let pool = build_thread_pool(opts.threads)?;
    let size = grid.size();
    let stride = size.row_stride();
    let mut data = vec![0u8; size.byte_len()];

    let per_row = pool.install(|| {
        data.par_chunks_mut(stride)
            .enumerate()
            .map(|(y, out)| {
                let mut runs = RowRuns::default();
                encode_row(grid.row(y), y, stride, out, &mut runs);
                runs
            })
            .collect::<Vec<_>>()
    });

    let mut runs = RowRuns::default();
    for row in per_row {
        runs.translucent.extend(row.translucent);
        runs.solid.extend(row.solid);
    }

    Ok(finish(grid, data, runs))
}

fn finish(grid: &SampleGrid, data: Vec<u8>, runs: RowRuns) -> EncodedSprite {
    tracing::debug!(
        translucent_runs = runs.translucent.len(),
        solid_runs = runs.solid.len(),
        "encoded sprite"
    );
    EncodedSprite {
        width: grid.width(),
        height: grid.height(),
        data,
        translucent_runs: runs.translucent,
        solid_runs: runs.solid,
    }
}

fn encode_row(row: &[Rgba8], y: usize, stride: usize, out: &mut [u8], runs: &mut RowRuns) {
    for (px, dst) in row.iter().zip(out.chunks_exact_mut(BYTES_PER_PIXEL)) {
        dst.copy_from_slice(&px.premultiplied().to_array());
    }
    segment_row(row, y, stride, runs);
}

fn segment_row(row: &[Rgba8], y: usize, stride: usize, runs: &mut RowRuns) {
    let width = row.len();
    let mut last = PixelClass::Transparent;
    let mut run_start = 0;

    for x in 0..width + 1 {
        let current = if x == width {
            PixelClass::Transparent
        } else {
            row[x].class()
        };
        if current != last {
            let run = RunSpan::from_columns(y, stride, run_start, x);
            match last {
                PixelClass::Translucent => runs.translucent.push(run),
                PixelClass::Solid => runs.solid.push(run),
                PixelClass::Transparent => {}
            }
            run_start = x;
        }
        last = current;
    }
}

fn build_thread_pool(threads: Option<usize>) -> SpriteResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpriteError::validation(
            "encode threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        SpriteError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/encode.rs"]
mod tests;
