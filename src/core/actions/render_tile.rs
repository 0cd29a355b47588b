use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::ports::raster_sink::RasterSink;
use crate::core::data::point::Point;
use crate::core::kernel::{LaneGroup, LaneWidth, Recurrence, escape_counts};
use crate::core::tiling::TilePattern;
use crate::core::view::Viewport;

/// Everything needed to evaluate one progressive pass over a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileJob {
    pub viewport: Viewport,
    pub recurrence: Recurrence,
    pub max_iterations: u32,
    pub pattern: TilePattern,
    /// Side of the tile kernel; the pixel stride of every pass.
    pub kernel_size: u32,
    /// Each kernel cell covers `final_scale`² surface pixels.
    pub final_scale: u32,
    pub lane_width: LaneWidth,
    pub width: u32,
    pub height: u32,
}

/// Work done by one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    pub samples: u64,
    pub iterations: u64,
}

/// Evaluates every surface position selected by `job.pattern` and draws a
/// `pattern.scale`-sized block for each one.
pub fn render_tile<S: RasterSink + ?Sized>(
    job: &TileJob,
    colour_map: &dyn ColourMap,
    sink: &mut S,
) -> PassStats {
    match job.lane_width {
        LaneWidth::One => render_tile_lanes::<1, S>(job, colour_map, sink),
        LaneWidth::Two => render_tile_lanes::<2, S>(job, colour_map, sink),
        LaneWidth::Four => render_tile_lanes::<4, S>(job, colour_map, sink),
        LaneWidth::Eight => render_tile_lanes::<8, S>(job, colour_map, sink),
    }
}

// Lanes run down a column: lane `i` handles the row `i` strides below the
// group's first row.
fn render_tile_lanes<const N: usize, S: RasterSink + ?Sized>(
    job: &TileJob,
    colour_map: &dyn ColourMap,
    sink: &mut S,
) -> PassStats {
    let mut stats = PassStats::default();
    if job.width == 0 || job.height == 0 {
        return stats;
    }

    let final_scale = i32::try_from(job.final_scale.max(1)).unwrap_or(i32::MAX);
    let kernel_size = i32::try_from(job.kernel_size.max(1)).unwrap_or(i32::MAX);
    let stride = Point::splat(kernel_size.saturating_mul(final_scale));
    let scaled = |p: Point| Point::new(p.x.saturating_mul(final_scale), p.y.saturating_mul(final_scale));
    let offset = scaled(job.pattern.offset);
    let block = scaled(job.pattern.scale);
    let width = job.width as i32;
    let height = job.height as i32;
    let group_height = stride.y.saturating_mul(N as i32);

    for y in (0..height).step_by(group_height as usize) {
        let rows: [i32; N] = std::array::from_fn(|lane| {
            y.saturating_add(offset.y)
                .saturating_add((lane as i32).saturating_mul(stride.y))
        });
        let imag = rows.map(|row| job.viewport.imag_at(f64::from(row), job.width, job.height));

        for x in (0..width).step_by(stride.x as usize) {
            let column = x.saturating_add(offset.x);
            if column >= width {
                continue;
            }

            let group = LaneGroup::<N> {
                real: [job.viewport.real_at(f64::from(column), job.width); N],
                imag,
            };
            let counts = escape_counts(&group, job.recurrence, job.max_iterations);

            for (lane, &row) in rows.iter().enumerate() {
                if row >= height {
                    break;
                }

                stats.samples += 1;
                stats.iterations += u64::from(counts[lane]);

                let colour = colour_map.map(counts[lane], job.max_iterations);
                sink.draw_block(Point::new(column, row), block, colour);
            }
        }
    }

    stats
}
