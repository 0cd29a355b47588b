use crate::controllers::interactive::config::ExplorerConfig;
use crate::controllers::interactive::errors::{SchedulerConfigError, SchedulerError};
use crate::controllers::interactive::interaction::{InputRequests, InteractionState};
use crate::controllers::interactive::metrics::ThroughputMetrics;
use crate::controllers::interactive::pacing::{FrameDecision, FramePacer};
use crate::controllers::interactive::ports::{Clock, Control, InputSource, SurfacePort};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::render_tile::{TileJob, render_tile};
use crate::core::colour_maps::{ColourMapKind, colour_map_factory};
use crate::core::kernel::LaneWidth;
use crate::core::tiling::{TilePattern, generate_tile_patterns};
use crate::core::view::{IterationBudget, Viewport};
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// Position in the progressive refinement sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Every pattern has been drawn for the current view.
    Idle,
    Progressive { next_pattern: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// A pass was rendered and the frame kept open for the next one.
    PresentSkipped,
    Quit,
}

/// Drives one progressive pass per step and paces presentation.
pub struct FrameScheduler<P: FilePresenterPort> {
    patterns: Vec<TilePattern>,
    kernel_size: u32,
    final_scale: u32,
    lane_width: LaneWidth,
    budget: IterationBudget,
    max_iterations: u32,
    colour_map: Box<dyn ColourMap>,
    interaction: InteractionState,
    phase: RenderPhase,
    last_rendered_pattern: Option<usize>,
    pacer: FramePacer,
    metrics: ThroughputMetrics,
    screenshot_path: PathBuf,
    screenshot_presenter: P,
}

impl<P: FilePresenterPort> FrameScheduler<P> {
    pub fn new(config: &ExplorerConfig, screenshot_presenter: P) -> Result<Self, SchedulerConfigError> {
        config.validate()?;

        let patterns = generate_tile_patterns(config.kernel_size)?;
        let budget = config.iteration_budget()?;
        let viewport = Viewport::new(config.initial_position, config.initial_zoom);

        Ok(Self {
            patterns,
            kernel_size: config.kernel_size,
            final_scale: config.final_scale,
            lane_width: config.lane_width,
            budget,
            max_iterations: budget.for_zoom(viewport.zoom),
            colour_map: colour_map_factory(config.colour_map_kind),
            interaction: InteractionState::new(viewport, config.julia_mode, config.julia_point),
            phase: RenderPhase::Idle,
            last_rendered_pattern: None,
            pacer: FramePacer::new(config.pacing),
            metrics: ThroughputMetrics::new(),
            screenshot_path: config.screenshot_path.clone(),
            screenshot_presenter,
        })
    }

    /// Runs one frame: input, at most one pass, then present or skip.
    pub fn step<I, S, C>(
        &mut self,
        input: &I,
        surface: &mut S,
        clock: &C,
    ) -> Result<FrameOutcome, SchedulerError<S::Error>>
    where
        I: InputSource + ?Sized,
        S: SurfacePort + ?Sized,
        C: Clock + ?Sized,
    {
        if input.released(Control::Quit) {
            return Ok(FrameOutcome::Quit);
        }

        if surface.take_resized() {
            self.interaction.mark_updated();
        }

        self.pacer.begin_frame(clock.now());

        let (width, height) = surface.size();
        let requests = self.interaction.apply_input(input, width, height);
        self.handle_requests(requests, surface);

        if self.interaction.take_updated() {
            self.restart_sequence();
        }

        let mut rendered = false;
        if let RenderPhase::Progressive { next_pattern } = self.phase {
            if width > 0 && height > 0 {
                rendered = self.render_pass(next_pattern, surface, clock, width, height);
            }
        }

        // Only a step that made progress may keep the frame open.
        let passes_pending = rendered && matches!(self.phase, RenderPhase::Progressive { .. });
        match self.pacer.finish_frame(clock.now(), passes_pending) {
            FrameDecision::SkipPresent => Ok(FrameOutcome::PresentSkipped),
            FrameDecision::Present { sleep } => {
                surface.present().map_err(|err| {
                    error!("present failed: {}", err);
                    SchedulerError::Present(err)
                })?;

                if let Some(duration) = sleep {
                    clock.sleep(duration);
                }

                Ok(FrameOutcome::Presented)
            }
        }
    }

    fn restart_sequence(&mut self) {
        let viewport = self.interaction.viewport();
        self.max_iterations = self.budget.for_zoom(viewport.zoom);
        self.phase = RenderPhase::Progressive { next_pattern: 0 };

        debug!(
            "view reset: position ({}, {}), zoom {}, {} iterations",
            viewport.position.real, viewport.position.imag, viewport.zoom, self.max_iterations
        );
    }

    fn render_pass<S, C>(
        &mut self,
        index: usize,
        surface: &mut S,
        clock: &C,
        width: u32,
        height: u32,
    ) -> bool
    where
        S: SurfacePort + ?Sized,
        C: Clock + ?Sized,
    {
        let Some(&pattern) = self.patterns.get(index) else {
            self.phase = RenderPhase::Idle;
            return false;
        };

        let job = TileJob {
            viewport: self.interaction.viewport(),
            recurrence: self.interaction.recurrence(),
            max_iterations: self.max_iterations,
            pattern,
            kernel_size: self.kernel_size,
            final_scale: self.final_scale,
            lane_width: self.lane_width,
            width,
            height,
        };

        let start = clock.now();
        let stats = render_tile(&job, self.colour_map.as_ref(), surface);
        let elapsed = clock.now().saturating_duration_since(start);

        self.metrics.record(stats.samples, stats.iterations, elapsed);
        self.last_rendered_pattern = Some(index);
        self.phase = if index + 1 < self.patterns.len() {
            RenderPhase::Progressive {
                next_pattern: index + 1,
            }
        } else {
            RenderPhase::Idle
        };

        true
    }

    fn handle_requests<S: SurfacePort + ?Sized>(&mut self, requests: InputRequests, surface: &S) {
        if requests.print_julia_point {
            let point = self.interaction.julia_point();
            info!("julia point: ({}, {})", point.real, point.imag);
        }

        if requests.report_throughput {
            if let Some(rate) = self.metrics.iterations_per_millisecond() {
                info!(
                    "{} iterations in {:?}: {} iterations/ms",
                    self.metrics.iterations(),
                    self.metrics.elapsed(),
                    rate
                );
                self.metrics.reset();
            }
        }

        if requests.cycle_colour_map {
            let kind = self.colour_map.kind().next();
            self.colour_map = colour_map_factory(kind);
            self.interaction.mark_updated();
            info!("colour map: {}", kind);
        }

        if requests.screenshot {
            self.save_screenshot(surface);
        }
    }

    fn save_screenshot<S: SurfacePort + ?Sized>(&self, surface: &S) {
        let buffer = match surface.capture() {
            Ok(buffer) => buffer,
            Err(err) => {
                warn!("screenshot capture failed: {}", err);
                return;
            }
        };

        match self.screenshot_presenter.present(&buffer, &self.screenshot_path) {
            Ok(()) => info!("screenshot saved to {}", self.screenshot_path.display()),
            Err(err) => warn!(
                "failed to write screenshot to {}: {}",
                self.screenshot_path.display(),
                err
            ),
        }
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Budget of the current progressive sequence.
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> ColourMapKind {
        self.colour_map.kind()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn metrics(&self) -> &ThroughputMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    #[must_use]
    pub fn last_rendered_pattern(&self) -> Option<usize> {
        self.last_rendered_pattern
    }

    #[must_use]
    pub fn patterns(&self) -> &[TilePattern] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::tiling::KernelSizeError;
    use std::path::Path;

    struct NullPresenter;

    impl FilePresenterPort for NullPresenter {
        fn present(&self, _buffer: &PixelBuffer, _filepath: impl AsRef<Path>) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn new_scheduler_waits_for_first_step() {
        let scheduler = FrameScheduler::new(&ExplorerConfig::default(), NullPresenter).unwrap();

        assert_eq!(scheduler.phase(), RenderPhase::Idle);
        assert!(scheduler.interaction().is_updated());
        assert_eq!(scheduler.patterns().len(), 256);
        assert_eq!(scheduler.max_iterations(), 86);
        assert_eq!(scheduler.last_rendered_pattern(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ExplorerConfig {
            kernel_size: 6,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            FrameScheduler::new(&config, NullPresenter).err(),
            Some(SchedulerConfigError::KernelSize(KernelSizeError::NotPowerOfTwo {
                kernel_size: 6
            }))
        );
    }
}
