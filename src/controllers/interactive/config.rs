use crate::controllers::interactive::errors::SchedulerConfigError;
use crate::core::colour_maps::ColourMapKind;
use crate::core::data::complex::Complex;
use crate::core::kernel::LaneWidth;
use crate::core::tiling::KernelSizeError;
use crate::core::tiling::tile_pattern::MAX_KERNEL_SIZE;
use crate::core::view::IterationBudget;
use crate::core::view::iteration_budget::{
    DEFAULT_BASE_ITERATIONS, DEFAULT_EXPANSION_FACTOR, IterationBudgetError,
};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_KERNEL_SIZE: u32 = 16;
const DEFAULT_ZOOM: f64 = 4.0;
const DEFAULT_JULIA_POINT: Complex = Complex {
    real: -0.445833333333331,
    imag: -0.5937499999999968,
};

/// Frame pacing thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingConfig {
    pub frame_rate: u32,
    /// Another pass is absorbed into the current frame only while more than
    /// this much time remains before the frame boundary.
    pub batch_margin: Duration,
    /// Subtracted from the remaining time before sleeping; shorter sleeps are skipped.
    pub sleep_slack: Duration,
    /// A frame start this far from its scheduled time resets the frame clock.
    pub hang_threshold: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            batch_margin: Duration::from_millis(1),
            sleep_slack: Duration::from_micros(1),
            hang_threshold: Duration::from_millis(1),
        }
    }
}

impl PacingConfig {
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub kernel_size: u32,
    pub final_scale: u32,
    pub lane_width: LaneWidth,
    pub base_iterations: u32,
    pub expansion_factor: f64,
    pub initial_position: Complex,
    pub initial_zoom: f64,
    pub julia_point: Complex,
    pub julia_mode: bool,
    pub colour_map_kind: ColourMapKind,
    pub screenshot_path: PathBuf,
    pub pacing: PacingConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            final_scale: 1,
            lane_width: LaneWidth::default(),
            base_iterations: DEFAULT_BASE_ITERATIONS,
            expansion_factor: DEFAULT_EXPANSION_FACTOR,
            initial_position: Complex::ZERO,
            initial_zoom: DEFAULT_ZOOM,
            julia_point: DEFAULT_JULIA_POINT,
            julia_mode: false,
            colour_map_kind: ColourMapKind::default(),
            screenshot_path: PathBuf::from("screenshot.ppm"),
            pacing: PacingConfig::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), SchedulerConfigError> {
        if self.kernel_size == 0 {
            return Err(KernelSizeError::ZeroKernelSize.into());
        }
        if !self.kernel_size.is_power_of_two() {
            return Err(KernelSizeError::NotPowerOfTwo {
                kernel_size: self.kernel_size,
            }
            .into());
        }
        if self.kernel_size > MAX_KERNEL_SIZE {
            return Err(KernelSizeError::TooLarge {
                kernel_size: self.kernel_size,
            }
            .into());
        }
        if self.final_scale == 0 {
            return Err(SchedulerConfigError::ZeroFinalScale);
        }
        let group_span = u64::from(self.kernel_size)
            * u64::from(self.final_scale)
            * LaneWidth::Eight.lanes() as u64;
        if group_span > i32::MAX as u64 {
            return Err(SchedulerConfigError::FinalScaleTooLarge {
                final_scale: self.final_scale,
            });
        }
        if self.pacing.frame_rate == 0 {
            return Err(SchedulerConfigError::ZeroFrameRate);
        }
        if !self.initial_zoom.is_finite() || self.initial_zoom <= 0.0 {
            return Err(SchedulerConfigError::InvalidZoom {
                zoom: self.initial_zoom,
            });
        }

        self.iteration_budget()?;
        Ok(())
    }

    pub fn iteration_budget(&self) -> Result<IterationBudget, IterationBudgetError> {
        IterationBudget::new(self.base_iterations, self.expansion_factor)
    }
}
