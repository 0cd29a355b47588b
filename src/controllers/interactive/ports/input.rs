/// Logical controls the scheduler reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Drag to pan the view.
    Pan,
    /// Drag to move the Julia constant.
    JuliaDrag,
    /// Held with `JuliaDrag` to place the constant under the cursor.
    JuliaSnap,
    ToggleJulia,
    CycleColourMap,
    PrintJuliaPoint,
    ReportThroughput,
    Screenshot,
    Quit,
}

/// Input state polled once per frame. Edge queries (`pressed`, `released`)
/// refer to transitions since the previous frame.
pub trait InputSource {
    fn pressed(&self, control: Control) -> bool;

    fn released(&self, control: Control) -> bool;

    fn down(&self, control: Control) -> bool;

    /// Cursor position in surface pixels.
    fn cursor(&self) -> (f64, f64);

    /// Cursor motion since the previous frame, in surface pixels.
    fn cursor_delta(&self) -> (f64, f64);

    /// Vertical scroll since the previous frame, in notches. Positive zooms in.
    fn scroll(&self) -> f64;
}
