use crate::controllers::interactive::ports::{Control, InputSource};
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixel scroll distance treated as one wheel notch.
const PIXELS_PER_NOTCH: f64 = 40.0;

fn key_control(key_code: KeyCode) -> Option<Control> {
    match key_code {
        KeyCode::Escape => Some(Control::Quit),
        KeyCode::F12 => Some(Control::Screenshot),
        KeyCode::KeyM => Some(Control::ToggleJulia),
        KeyCode::KeyC => Some(Control::CycleColourMap),
        KeyCode::KeyP => Some(Control::PrintJuliaPoint),
        KeyCode::KeyI => Some(Control::ReportThroughput),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Control::JuliaSnap),
        _ => None,
    }
}

fn button_control(button: MouseButton) -> Option<Control> {
    match button {
        MouseButton::Left => Some(Control::Pan),
        MouseButton::Right => Some(Control::JuliaDrag),
        _ => None,
    }
}

/// Window events folded into per-frame input. Call `end_frame` after each
/// scheduler step to clear edges and motion.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GuiInputState {
    down: HashSet<Control>,
    pressed: HashSet<Control>,
    released: HashSet<Control>,
    cursor: (f64, f64),
    frame_start_cursor: Option<(f64, f64)>,
    scroll: f64,
}

impl GuiInputState {
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(control) = key_control(*key_code) {
                    self.set_control(control, *state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(control) = button_control(*button) {
                    self.set_control(control, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, lines) => f64::from(*lines),
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_NOTCH,
                };
            }
            WindowEvent::Focused(false) => {
                self.down.clear();
            }
            _ => {}
        }
    }

    pub fn set_control(&mut self, control: Control, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.down.insert(control) {
                    self.pressed.insert(control);
                }
            }
            ElementState::Released => {
                if self.down.remove(&control) {
                    self.released.insert(control);
                }
            }
        }
    }

    pub fn move_cursor(&mut self, x: f64, y: f64) {
        self.frame_start_cursor.get_or_insert(self.cursor);
        self.cursor = (x, y);
    }

    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.frame_start_cursor = None;
        self.scroll = 0.0;
    }
}

impl InputSource for GuiInputState {
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
        match self.frame_start_cursor {
            Some(start) => (self.cursor.0 - start.0, self.cursor.1 - start.1),
            None => (0.0, 0.0),
        }
    }

    fn scroll(&self) -> f64 {
        self.scroll
    }
}
