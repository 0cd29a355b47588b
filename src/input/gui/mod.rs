//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window and
//! input events and pixels for the framebuffer the scheduler draws into.

pub mod commands;
pub mod input_state;

pub use commands::run_gui::run_gui;
pub use input_state::GuiInputState;
