use rayon::prelude::*;

use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::kernel::{LaneGroup, LaneWidth, Recurrence, escape_counts};
use crate::core::view::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StillJob {
    pub viewport: Viewport,
    pub recurrence: Recurrence,
    pub max_iterations: u32,
    pub lane_width: LaneWidth,
}

/// Renders every pixel of `pixel_rect` at full density, rows in parallel.
///
/// Produces the same image as replaying a complete progressive sequence with
/// a final scale of one.
pub fn render_still(
    job: &StillJob,
    colour_map: &dyn ColourMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    let width = pixel_rect.width();
    let height = pixel_rect.height();
    let row_bytes = width as usize * 3;
    let mut data = vec![0u8; row_bytes * height as usize];

    data.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(row, bytes)| match job.lane_width {
            LaneWidth::One => render_row::<1>(job, colour_map, row as u32, width, height, bytes),
            LaneWidth::Two => render_row::<2>(job, colour_map, row as u32, width, height, bytes),
            LaneWidth::Four => render_row::<4>(job, colour_map, row as u32, width, height, bytes),
            LaneWidth::Eight => render_row::<8>(job, colour_map, row as u32, width, height, bytes),
        });

    PixelBuffer::from_data(pixel_rect, data)
}

fn render_row<const N: usize>(
    job: &StillJob,
    colour_map: &dyn ColourMap,
    row: u32,
    width: u32,
    height: u32,
    bytes: &mut [u8],
) {
    let imag = job.viewport.imag_at(f64::from(row), width, height);

    for (group_index, chunk) in bytes.chunks_mut(N * 3).enumerate() {
        let first_column = (group_index * N) as u32;
        let samples = LaneGroup::<N>::from_fn(|lane| Complex {
            real: job.viewport.real_at(f64::from(first_column + lane as u32), width),
            imag,
        });
        let counts = escape_counts(&samples, job.recurrence, job.max_iterations);

        for (pixel, &count) in chunk.chunks_exact_mut(3).zip(counts.iter()) {
            let colour = colour_map.map(count, job.max_iterations);
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }
}
