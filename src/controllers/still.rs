use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_still::{StillJob, render_still};
use crate::core::colour_maps::{ColourMapKind, colour_map_factory};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::kernel::{LaneWidth, Recurrence};
use crate::core::view::{IterationBudget, Viewport};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Headless full-density render settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StillConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
    pub viewport: Viewport,
    pub recurrence: Recurrence,
    pub colour_map_kind: ColourMapKind,
    pub lane_width: LaneWidth,
    pub budget: IterationBudget,
}

impl Default for StillConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            output_path: PathBuf::from("output/fractal.ppm"),
            viewport: Viewport::new(Complex::new(-0.5, 0.0), 3.5),
            recurrence: Recurrence::Mandelbrot,
            colour_map_kind: ColourMapKind::default(),
            lane_width: LaneWidth::default(),
            budget: IterationBudget::default(),
        }
    }
}

pub struct StillController<P: FilePresenterPort> {
    presenter: P,
    config: StillConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> StillController<P> {
    pub fn new(presenter: P, config: StillConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let pixel_rect = PixelRect::from_size(self.config.width, self.config.height)?;
        let max_iterations = self.config.budget.for_zoom(self.config.viewport.zoom);

        info!(
            "rendering {}x{} at ({}, {}), zoom {}, {} iterations, {}",
            self.config.width,
            self.config.height,
            self.config.viewport.position.real,
            self.config.viewport.position.imag,
            self.config.viewport.zoom,
            max_iterations,
            self.config.lane_width.display_name()
        );

        let job = StillJob {
            viewport: self.config.viewport,
            recurrence: self.config.recurrence,
            max_iterations,
            lane_width: self.config.lane_width,
        };
        let colour_map = colour_map_factory(self.config.colour_map_kind);

        let start = Instant::now();
        let buffer = render_still(&job, colour_map.as_ref(), pixel_rect)?;
        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    /// Writes the last generated image. Does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("wrote {}", filepath.as_ref().display());
        }

        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &StillConfig {
        &self.config
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
