use crate::controllers::interactive::ports::input::{Control, InputSource};
use crate::core::data::complex::Complex;
use crate::core::kernel::Recurrence;
use crate::core::view::Viewport;

/// One-shot requests raised by input during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputRequests {
    pub print_julia_point: bool,
    pub report_throughput: bool,
    pub screenshot: bool,
    pub cycle_colour_map: bool,
}

/// View and recurrence state owned by the frame scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    viewport: Viewport,
    julia_mode: bool,
    julia_point: Complex,
    updated: bool,
}

impl InteractionState {
    /// Starts dirty so the first frame begins a progressive sequence.
    #[must_use]
    pub fn new(viewport: Viewport, julia_mode: bool, julia_point: Complex) -> Self {
        Self {
            viewport,
            julia_mode,
            julia_point,
            updated: true,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn julia_mode(&self) -> bool {
        self.julia_mode
    }

    #[must_use]
    pub fn julia_point(&self) -> Complex {
        self.julia_point
    }

    #[must_use]
    pub fn recurrence(&self) -> Recurrence {
        if self.julia_mode {
            Recurrence::Julia(self.julia_point)
        } else {
            Recurrence::Mandelbrot
        }
    }

    #[must_use]
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    pub fn mark_updated(&mut self) {
        self.updated = true;
    }

    /// Returns and clears the updated flag.
    pub fn take_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated)
    }

    /// Applies one frame of input for a `width` x `height` surface.
    ///
    /// Pointer-driven changes are ignored while either side is zero.
    pub fn apply_input<I: InputSource + ?Sized>(
        &mut self,
        input: &I,
        width: u32,
        height: u32,
    ) -> InputRequests {
        if width > 0 && height > 0 {
            self.apply_pointer(input, width, height);
        }

        if input.pressed(Control::ToggleJulia) {
            self.julia_mode = !self.julia_mode;
            self.updated = true;
        }

        InputRequests {
            print_julia_point: input.pressed(Control::PrintJuliaPoint),
            report_throughput: input.pressed(Control::ReportThroughput),
            screenshot: input.pressed(Control::Screenshot),
            cycle_colour_map: input.pressed(Control::CycleColourMap),
        }
    }

    fn apply_pointer<I: InputSource + ?Sized>(&mut self, input: &I, width: u32, height: u32) {
        let scroll = input.scroll();
        if scroll != 0.0 {
            let offset = self.viewport.cursor_offset(input.cursor(), width, height);
            self.viewport.zoom_towards(offset, scroll);
            self.updated = true;
        }

        let delta = self.viewport.scale_delta(input.cursor_delta(), width, height);

        // The press frame only anchors the drag.
        if input.down(Control::Pan) && !input.pressed(Control::Pan) && delta != Complex::ZERO {
            self.viewport.pan(delta);
            self.updated = true;
        }

        if self.julia_mode && input.down(Control::JuliaDrag) {
            if input.down(Control::JuliaSnap) {
                let (x, y) = input.cursor();
                let snapped = Complex {
                    real: x * 4.0 / f64::from(width) - 2.0,
                    imag: y * 4.0 / f64::from(height) - 2.0,
                };
                if snapped != self.julia_point {
                    self.julia_point = snapped;
                    self.updated = true;
                }
            } else if delta != Complex::ZERO {
                self.julia_point = self.julia_point - delta;
                self.updated = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct ScriptedInput {
        pressed: HashSet<Control>,
        down: HashSet<Control>,
        cursor: (f64, f64),
        delta: (f64, f64),
        scroll: f64,
    }

    impl InputSource for ScriptedInput {
        fn pressed(&self, control: Control) -> bool {
            self.pressed.contains(&control)
        }

        fn released(&self, _control: Control) -> bool {
            false
        }

        fn down(&self, control: Control) -> bool {
            self.down.contains(&control)
        }

        fn cursor(&self) -> (f64, f64) {
            self.cursor
        }

        fn cursor_delta(&self) -> (f64, f64) {
            self.delta
        }

        fn scroll(&self) -> f64 {
            self.scroll
        }
    }

    fn settled() -> InteractionState {
        let mut state = InteractionState::new(Viewport::default(), false, Complex::new(0.25, -0.5));
        assert!(state.take_updated());
        state
    }

    #[test]
    fn idle_input_leaves_state_clean() {
        let mut state = settled();

        let requests = state.apply_input(&ScriptedInput::default(), 800, 600);

        assert_eq!(requests, InputRequests::default());
        assert!(!state.is_updated());
        assert_eq!(state.viewport(), Viewport::default());
    }

    #[test]
    fn dragging_pans_opposite_to_cursor_motion() {
        let mut state = settled();
        let input = ScriptedInput {
            down: HashSet::from([Control::Pan]),
            delta: (80.0, 0.0),
            ..ScriptedInput::default()
        };

        state.apply_input(&input, 800, 600);

        assert!(state.take_updated());
        assert!((state.viewport().position.real + 0.4).abs() < 1e-12);
        assert_eq!(state.viewport().position.imag, 0.0);
    }

    #[test]
    fn press_frame_of_a_drag_does_not_pan() {
        let mut state = settled();
        let input = ScriptedInput {
            pressed: HashSet::from([Control::Pan]),
            down: HashSet::from([Control::Pan]),
            delta: (80.0, 10.0),
            ..ScriptedInput::default()
        };

        state.apply_input(&input, 800, 600);

        assert!(!state.is_updated());
    }

    #[test]
    fn scrolling_zooms_in_and_marks_updated() {
        let mut state = settled();
        let input = ScriptedInput {
            cursor: (400.0, 300.0),
            scroll: 1.0,
            ..ScriptedInput::default()
        };

        state.apply_input(&input, 800, 600);

        assert!(state.is_updated());
        assert!((state.viewport().zoom - 4.0 / 1.2).abs() < 1e-12);
        assert_eq!(state.viewport().position, Complex::ZERO);
    }

    #[test]
    fn toggle_switches_recurrence() {
        let mut state = settled();
        let input = ScriptedInput {
            pressed: HashSet::from([Control::ToggleJulia]),
            ..ScriptedInput::default()
        };

        state.apply_input(&input, 800, 600);

        assert!(state.take_updated());
        assert_eq!(state.recurrence(), Recurrence::Julia(Complex::new(0.25, -0.5)));
    }

    #[test]
    fn julia_drag_only_applies_in_julia_mode() {
        let mut state = settled();
        let input = ScriptedInput {
            down: HashSet::from([Control::JuliaDrag]),
            delta: (0.0, 60.0),
            ..ScriptedInput::default()
        };

        state.apply_input(&input, 800, 600);
        assert!(!state.is_updated());

        state.julia_mode = true;
        state.apply_input(&input, 800, 600);

        assert!(state.take_updated());
        // 60 / 600 * 4 * 0.75
        assert!((state.julia_point().imag + 0.8).abs() < 1e-12);
        assert_eq!(state.julia_point().real, 0.25);
    }

    #[test]
    fn snapping_places_constant_under_cursor_once() {
        let mut state = InteractionState::new(Viewport::default(), true, Complex::ZERO);
        state.take_updated();
        let input = ScriptedInput {
            down: HashSet::from([Control::JuliaDrag, Control::JuliaSnap]),
            cursor: (600.0, 150.0),
            ..ScriptedInput::default()
        };

        state.apply_input(&input, 800, 600);
        assert!(state.take_updated());
        assert_eq!(state.julia_point(), Complex::new(1.0, -1.0));

        state.apply_input(&input, 800, 600);
        assert!(!state.is_updated());
    }

    #[test]
    fn palette_key_raises_a_cycle_request_only() {
        let mut state = settled();
        let input = ScriptedInput {
            pressed: HashSet::from([Control::CycleColourMap]),
            ..ScriptedInput::default()
        };

        let requests = state.apply_input(&input, 800, 600);

        assert!(requests.cycle_colour_map);
        assert!(!requests.screenshot);
        assert!(!state.is_updated());
    }

    #[test]
    fn zero_sized_surface_ignores_pointer_but_keeps_keys() {
        let mut state = settled();
        let input = ScriptedInput {
            pressed: HashSet::from([Control::Screenshot, Control::ReportThroughput]),
            down: HashSet::from([Control::Pan]),
            delta: (10.0, 10.0),
            scroll: 2.0,
            ..ScriptedInput::default()
        };

        let requests = state.apply_input(&input, 0, 600);

        assert_eq!(state.viewport(), Viewport::default());
        assert!(!state.is_updated());
        assert!(requests.screenshot && requests.report_throughput);
        assert!(!requests.print_julia_point);
    }
}
