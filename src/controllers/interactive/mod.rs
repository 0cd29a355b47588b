//! Interactive controller for real-time fractal exploration.
//!
//! This module provides the application layer for the explorer window: it
//! owns the view state, turns input into view changes and drives progressive
//! rendering into an output surface at a fixed frame rate.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputSource` polled once per frame
//! - **Output**: `SurfacePort` receiving pixel blocks and present calls
//! - **Timing**: `Clock` so pacing can be driven by a manual clock in tests
//! - **Core**: Uses `render_tile` and the tile patterns from `core/`

pub mod config;
pub mod errors;
pub mod interaction;
pub mod metrics;
pub mod pacing;
pub mod ports;
pub mod scheduler;

pub use config::{ExplorerConfig, PacingConfig};
pub use errors::{SchedulerConfigError, SchedulerError};
pub use interaction::{InputRequests, InteractionState};
pub use metrics::ThroughputMetrics;
pub use pacing::{FrameDecision, FramePacer};
pub use ports::{Clock, Control, InputSource, SurfacePort, SystemClock};
pub use scheduler::{FrameOutcome, FrameScheduler, RenderPhase};
