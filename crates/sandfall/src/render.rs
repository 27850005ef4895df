//! Render-sink contract implemented by drivers.

use crate::material::Color;

/// Receives one frame of occupied cells. The engine never draws itself.
pub trait RenderSink {
    /// Called once before any `draw_cell` with the background color.
    fn begin_frame(&mut self, _background: Color) {}

    /// Fill the square at pixel `(x * cell_size, y * cell_size)` of side `cell_size`.
    fn draw_cell(&mut self, x: i32, y: i32, color: Color, cell_size: u32);

    fn end_frame(&mut self) {}
}

/// Records draw calls; useful for drivers that batch and for tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameRecorder {
    pub background: Option<Color>,
    pub cells: Vec<(i32, i32, Color)>,
    pub cell_size: u32,
    pub finished: bool,
}

impl RenderSink for FrameRecorder {
    fn begin_frame(&mut self, background: Color) {
        self.background = Some(background);
        self.cells.clear();
        self.finished = false;
    }

    fn draw_cell(&mut self, x: i32, y: i32, color: Color, cell_size: u32) {
        self.cell_size = cell_size;
        self.cells.push((x, y, color));
    }

    fn end_frame(&mut self) {
        self.finished = true;
    }
}
