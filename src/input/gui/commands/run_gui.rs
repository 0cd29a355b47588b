use crate::controllers::interactive::{
    ExplorerConfig, FrameOutcome, FrameScheduler, SurfacePort, SystemClock,
};
use crate::input::gui::input_state::GuiInputState;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::pixels::PixelsSurface;
use log::info;
use std::error::Error;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

/// Opens the explorer window and runs the frame loop until the window is
/// closed or the quit key is released.
pub fn run_gui(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let mut scheduler = FrameScheduler::new(&config, PpmFilePresenter::new())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Explorer")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut surface = PixelsSurface::new(window)?;
    let mut input = GuiInputState::default();
    let clock = SystemClock;
    let mut failure: Option<Box<dyn Error>> = None;

    info!(
        "explorer started: {}x{}, kernel {}, {}",
        surface.size().0,
        surface.size().1,
        config.kernel_size,
        config.lane_width.display_name()
    );

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                if let Err(err) = surface.resize(size.width, size.height) {
                    failure = Some(Box::new(err));
                    elwt.exit();
                }
            }
            other => input.handle_window_event(&other),
        },
        Event::AboutToWait => {
            match scheduler.step(&input, &mut surface, &clock) {
                Ok(FrameOutcome::Quit) => elwt.exit(),
                Ok(_) => {}
                Err(err) => {
                    failure = Some(Box::new(err));
                    elwt.exit();
                }
            }
            input.end_frame();
        }
        _ => {}
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
