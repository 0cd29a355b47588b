pub mod ports;
pub mod render_still;
pub mod render_tile;
