//! Progressive escape-time fractal explorer.
//!
//! The core evaluates `z = z*z + c` over lane groups and schedules tile
//! patterns so a full-resolution image converges over several frames. The
//! interactive controller drives that from input, and the still controller
//! renders a single image headlessly.

#[cfg(any(feature = "gui", test))]
mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
pub mod presenters;

pub use controllers::interactive::{
    Clock, Control, ExplorerConfig, FrameOutcome, FrameScheduler, InputSource, PacingConfig,
    RenderPhase, SchedulerConfigError, SchedulerError, SurfacePort, SystemClock,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::still::{StillConfig, StillController};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
