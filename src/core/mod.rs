pub mod actions;
pub mod colour_maps;
pub mod data;
pub mod kernel;
pub mod tiling;
pub mod view;
