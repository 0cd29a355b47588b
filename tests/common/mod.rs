#![allow(dead_code)]

use fractal_explorer::core::actions::ports::raster_sink::RasterSink;
use fractal_explorer::core::data::colour::Colour;
use fractal_explorer::core::data::pixel_buffer::PixelBuffer;
use fractal_explorer::core::data::pixel_rect::PixelRect;
use fractal_explorer::core::data::point::Point;
use fractal_explorer::{Clock, Control, FilePresenterPort, InputSource, SurfacePort};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Input state set directly by a test for the next step.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub pressed: HashSet<Control>,
    pub released: HashSet<Control>,
    pub down: HashSet<Control>,
    pub cursor: (f64, f64),
    pub cursor_delta: (f64, f64),
    pub scroll: f64,
}

impl ScriptedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn pressing(control: Control) -> Self {
        Self {
            pressed: HashSet::from([control]),
            down: HashSet::from([control]),
            ..Self::default()
        }
    }

    pub fn releasing(control: Control) -> Self {
        Self {
            released: HashSet::from([control]),
            ..Self::default()
        }
    }

    pub fn scrolling(cursor: (f64, f64), scroll: f64) -> Self {
        Self {
            cursor,
            scroll,
            ..Self::default()
        }
    }
}

impl InputSource for ScriptedInput {
    fn pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }

    fn released(&self, control: Control) -> bool {
        self.released.contains(&control)
    }

    fn down(&self, control: Control) -> bool {
        self.down.contains(&control)
    }

    fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    fn cursor_delta(&self) -> (f64, f64) {
        self.cursor_delta
    }

    fn scroll(&self) -> f64 {
        self.scroll
    }
}

/// Clock that only moves when told to, plus `tick` on every read.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
    tick: Duration,
    slept: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::ticking(Duration::ZERO)
    }

    pub fn ticking(tick: Duration) -> Self {
        Self {
            now: Cell::new(Instant::now()),
            tick,
            slept: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    pub fn slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let now = self.now.get();
        self.now.set(now + self.tick);
        now
    }

    fn sleep(&self, duration: Duration) {
        self.slept.set(self.slept.get() + duration);
        self.advance(duration);
    }
}

/// In-memory surface backed by a `PixelBuffer`.
#[derive(Debug)]
pub struct MemorySurface {
    pub buffer: PixelBuffer,
    pub width: u32,
    pub height: u32,
    pub resized: bool,
    pub presents: usize,
    pub fail_present: bool,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: PixelBuffer::new(PixelRect::from_size(width, height).unwrap()),
            width,
            height,
            resized: false,
            presents: 0,
            fail_present: false,
        }
    }
}

impl RasterSink for MemorySurface {
    fn draw_block(&mut self, top_left: Point, size: Point, colour: Colour) {
        self.buffer.draw_block(top_left, size, colour);
    }
}

impl SurfacePort for MemorySurface {
    type Error = io::Error;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        if self.fail_present {
            return Err(io::Error::other("surface lost"));
        }
        self.presents += 1;
        Ok(())
    }

    fn capture(&self) -> Result<PixelBuffer, Self::Error> {
        Ok(self.buffer.clone())
    }
}

/// Keeps every saved image in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub saved: Rc<RefCell<Vec<(PathBuf, PixelBuffer)>>>,
}

impl FilePresenterPort for RecordingPresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        self.saved
            .borrow_mut()
            .push((filepath.as_ref().to_path_buf(), buffer.clone()));
        Ok(())
    }
}
