use std::ops::Range;

use crate::foundation::core::BYTES_PER_PIXEL;

/// One maximal run of same-class pixels within a single row.
///
/// Offsets are byte offsets with exclusive ends. `src_*` index the flat sprite buffer,
/// `x_*` are relative to the start of the row. Serializes as the 5-element array
/// `[row, src_start, src_end, x_start, x_end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "[usize; 5]", try_from = "[usize; 5]")]
pub struct RunSpan {
    /// Row index.
    pub row: usize,
    /// First byte of the run in the sprite buffer.
    pub src_start: usize,
    /// One past the last byte of the run in the sprite buffer.
    pub src_end: usize,
    /// First byte of the run relative to the row.
    pub x_start: usize,
    /// One past the last byte of the run relative to the row.
    pub x_end: usize,
}

impl RunSpan {
    /// Build the descriptor for columns `[start_col, end_col)` of `row`.
    pub fn from_columns(row: usize, row_stride: usize, start_col: usize, end_col: usize) -> Self {
        let x_start = start_col * BYTES_PER_PIXEL;
        let x_end = end_col * BYTES_PER_PIXEL;
        let base = row * row_stride;
        Self {
            row,
            src_start: base + x_start,
            src_end: base + x_end,
            x_start,
            x_end,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.x_end - self.x_start
    }

    pub fn pixel_len(&self) -> usize {
        self.byte_len() / BYTES_PER_PIXEL
    }

    /// Pixel columns covered by the run.
    pub fn columns(&self) -> Range<usize> {
        self.x_start / BYTES_PER_PIXEL..self.x_end / BYTES_PER_PIXEL
    }

    pub fn contains_column(&self, x: usize) -> bool {
        self.columns().contains(&x)
    }

    /// Byte range into the flat sprite buffer.
    pub fn src_range(&self) -> Range<usize> {
        self.src_start..self.src_end
    }

    pub fn to_array(self) -> [usize; 5] {
        [
            self.row,
            self.src_start,
            self.src_end,
            self.x_start,
            self.x_end,
        ]
    }
}

impl From<RunSpan> for [usize; 5] {
    fn from(run: RunSpan) -> Self {
        run.to_array()
    }
}

impl TryFrom<[usize; 5]> for RunSpan {
    type Error = String;

    fn try_from(v: [usize; 5]) -> Result<Self, Self::Error> {
        let [row, src_start, src_end, x_start, x_end] = v;
        if src_start > src_end || x_start > x_end {
            return Err(format!("run {v:?} has start past end"));
        }
        Ok(Self {
            row,
            src_start,
            src_end,
            x_start,
            x_end,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/run.rs"]
mod tests;
