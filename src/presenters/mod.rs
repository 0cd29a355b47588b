//! Output adapters: image files and the window framebuffer.

pub mod file;
#[cfg(feature = "gui")]
pub mod pixels;
