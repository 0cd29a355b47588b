use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Saves a finished image: still renders and screenshots.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
