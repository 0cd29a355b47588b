//! Escape-time evaluation of `z = z*z + c` over fixed-width lane groups.

pub mod escape_time;
pub mod lane_group;
pub mod lane_width;

pub use escape_time::{ESCAPE_RADIUS_SQUARED, Recurrence, escape_counts, escape_time_scalar};
pub use lane_group::LaneGroup;
pub use lane_width::LaneWidth;
