// render.rs - Rendering collaborator seam

/// Receives one call per cell during [`Grid::render`](crate::Grid::render).
///
/// Positions are the top-left pixel of the tile, `size` is the tile edge.
pub trait CellRenderer {
    fn draw_cell(&mut self, pixel_x: f32, pixel_y: f32, size: f32, alive: bool);
}

/// Collects draw calls, handy for headless drivers and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub calls: Vec<(f32, f32, f32, bool)>,
}

impl CellRenderer for RecordingRenderer {
    fn draw_cell(&mut self, pixel_x: f32, pixel_y: f32, size: f32, alive: bool) {
        self.calls.push((pixel_x, pixel_y, size, alive));
    }
}
