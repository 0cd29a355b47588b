use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Destination for rendered blocks. Blocks that cross the surface edge are
/// clipped by the implementation.
pub trait RasterSink {
    fn draw_block(&mut self, top_left: Point, size: Point, colour: Colour);
}
