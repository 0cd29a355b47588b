use crate::core::actions::ports::raster_sink::RasterSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

/// Output surface the scheduler draws into and presents.
pub trait SurfacePort: RasterSink {
    type Error: Error + 'static;

    /// Current size in pixels. Either side may be zero while minimised.
    fn size(&self) -> (u32, u32);

    /// Whether the surface changed size since the last call.
    fn take_resized(&mut self) -> bool;

    fn present(&mut self) -> Result<(), Self::Error>;

    fn capture(&self) -> Result<PixelBuffer, Self::Error>;
}
