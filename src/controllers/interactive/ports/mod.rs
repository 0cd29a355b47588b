//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the frame
//! scheduler and the window, input and timing collaborators.

pub mod clock;
pub mod input;
pub mod surface;

pub use clock::{Clock, SystemClock};
pub use input::{Control, InputSource};
pub use surface::SurfacePort;
