use crate::adapters::pixel_format::{copy_rgba_to_rgb, write_rgba};
use crate::controllers::interactive::ports::SurfacePort;
use crate::core::actions::ports::raster_sink::RasterSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::{error::Error, fmt};
use winit::window::Window;

#[derive(Debug)]
pub enum PixelsSurfaceError {
    Pixels(pixels::Error),
    Resize(TextureError),
    EmptySurface(PixelRectError),
    Capture(PixelBufferError),
}

impl fmt::Display for PixelsSurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(err) => write!(f, "pixels error: {}", err),
            Self::Resize(err) => write!(f, "failed to resize surface: {}", err),
            Self::EmptySurface(err) => write!(f, "nothing to capture: {}", err),
            Self::Capture(err) => write!(f, "failed to capture surface: {}", err),
        }
    }
}

impl Error for PixelsSurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pixels(err) => Some(err),
            Self::Resize(err) => Some(err),
            Self::EmptySurface(err) => Some(err),
            Self::Capture(err) => Some(err),
        }
    }
}

/// Window framebuffer the scheduler draws into.
///
/// The pixel buffer keeps its last non-zero size while the window is
/// minimised; `size` reports the window size.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    buffer_width: u32,
    buffer_height: u32,
    resized: bool,
}

impl PixelsSurface {
    pub fn new(window: &'static Window) -> Result<Self, PixelsSurfaceError> {
        let size = window.inner_size();
        let buffer_width = size.width.max(1);
        let buffer_height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(buffer_width, buffer_height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)
            .map_err(PixelsSurfaceError::Pixels)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
            buffer_width,
            buffer_height,
            resized: false,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelsSurfaceError> {
        self.width = width;
        self.height = height;
        self.resized = true;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(PixelsSurfaceError::Resize)?;
        self.pixels
            .resize_buffer(width, height)
            .map_err(PixelsSurfaceError::Resize)?;
        self.buffer_width = width;
        self.buffer_height = height;

        Ok(())
    }
}

impl RasterSink for PixelsSurface {
    fn draw_block(&mut self, top_left: Point, size: Point, colour: Colour) {
        let x0 = top_left.x.max(0);
        let y0 = top_left.y.max(0);
        let x1 = top_left.x.saturating_add(size.x).min(self.buffer_width as i32);
        let y1 = top_left.y.saturating_add(size.y).min(self.buffer_height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.buffer_width as usize * 4;
        let rgb = [colour.r, colour.g, colour.b];
        let frame = self.pixels.frame_mut();

        for y in y0 as usize..y1 as usize {
            let row = &mut frame[y * stride..(y + 1) * stride];
            for pixel in row[x0 as usize * 4..x1 as usize * 4].chunks_exact_mut(4) {
                write_rgba(pixel, rgb);
            }
        }
    }
}

impl SurfacePort for PixelsSurface {
    type Error = PixelsSurfaceError;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render().map_err(PixelsSurfaceError::Pixels)
    }

    fn capture(&self) -> Result<PixelBuffer, Self::Error> {
        let pixel_rect = PixelRect::from_size(self.buffer_width, self.buffer_height)
            .map_err(PixelsSurfaceError::EmptySurface)?;
        let frame = self.pixels.frame();
        let mut rgb = vec![0u8; frame.len() / 4 * 3];
        copy_rgba_to_rgb(frame, &mut rgb);

        PixelBuffer::from_data(pixel_rect, rgb).map_err(PixelsSurfaceError::Capture)
    }
}
