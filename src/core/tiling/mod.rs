//! Progressive-refinement tile patterns.

pub mod errors;
pub mod tile_pattern;

pub use errors::KernelSizeError;
pub use tile_pattern::{
    TilePattern, generate_tile_patterns, generate_tile_patterns_at, remove_duplicate_offsets,
    sort_by_area, subdivide,
};
