use crate::core::data::complex::Complex;

/// Zoom multiplier for one scroll notch.
pub const ZOOM_STEP: f64 = 1.2;

/// Pan/zoom state of the view. `zoom` is the width of the visible window in
/// the complex plane; the height follows the surface aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub position: Complex,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            position: Complex::ZERO,
            zoom: 4.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(position: Complex, zoom: f64) -> Self {
        Self { position, zoom }
    }

    #[must_use]
    pub fn aspect(width: u32, height: u32) -> f64 {
        f64::from(height) / f64::from(width)
    }

    #[must_use]
    pub fn real_at(&self, x: f64, width: u32) -> f64 {
        (x / f64::from(width) - 0.5) * self.zoom + self.position.real
    }

    #[must_use]
    pub fn imag_at(&self, y: f64, width: u32, height: u32) -> f64 {
        (y / f64::from(height) - 0.5) * (self.zoom * Self::aspect(width, height))
            + self.position.imag
    }

    /// Complex coordinate under the centre of pixel-space position `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, width: u32, height: u32) -> Complex {
        Complex {
            real: self.real_at(x, width),
            imag: self.imag_at(y, width, height),
        }
    }

    /// Offset from the view centre to the cursor, in complex units.
    #[must_use]
    pub fn cursor_offset(&self, cursor: (f64, f64), width: u32, height: u32) -> Complex {
        Complex {
            real: (cursor.0 / f64::from(width) - 0.5) * self.zoom,
            imag: (cursor.1 / f64::from(height) - 0.5) * self.zoom * Self::aspect(width, height),
        }
    }

    /// Cursor motion converted to complex units.
    #[must_use]
    pub fn scale_delta(&self, delta: (f64, f64), width: u32, height: u32) -> Complex {
        Complex {
            real: delta.0 / f64::from(width) * self.zoom,
            imag: delta.1 / f64::from(height) * self.zoom * Self::aspect(width, height),
        }
    }

    /// Zooms by `ZOOM_STEP^scroll`, keeping the point under the cursor fixed.
    pub fn zoom_towards(&mut self, cursor_offset: Complex, scroll: f64) {
        let factor = ZOOM_STEP.powf(scroll);
        self.position = self.position + cursor_offset * (1.0 - 1.0 / factor);
        self.zoom /= factor;
    }

    /// Drags the view so the plane follows the cursor.
    pub fn pan(&mut self, delta: Complex) {
        self.position = self.position - delta;
    }
}
