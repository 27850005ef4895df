//! The simulation engine: one grid, the paint material, and the tick sweep.

use tracing::{debug, trace};

use crate::api::CellApi;
use crate::cell::Cell;
use crate::config::SimConfig;
use crate::elements;
use crate::grid::Grid;
use crate::input::{Command, Control};
use crate::material::{Color, Material};
use crate::render::RenderSink;

/// Brush offsets painted by `place`, relative to the target cell.
pub const BRUSH: [(i32, i32); 6] = [(0, 0), (1, 0), (-1, 0), (0, 1), (1, 1), (-1, 1)];

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    cell_size: u32,
    current_material: Material,
}

impl Simulation {
    /// Fresh world sized from the configuration. Call `SimConfig::validate` first;
    /// an unusable configuration yields an empty grid.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        let grid = Grid::from_pixels(config.width, config.height, config.cell_size);
        let (width, height) = grid.dimensions();
        debug!(width, height, cell_size = config.cell_size, "creating simulation");
        Self::with_grid(grid, config.cell_size)
    }

    #[must_use]
    pub fn with_grid(grid: Grid, cell_size: u32) -> Self {
        Self {
            grid,
            cell_size,
            current_material: Material::Sand,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[must_use]
    pub fn current_material(&self) -> Material {
        self.current_material
    }

    /// Advance the simulation by one tick. Returns how many cells moved.
    ///
    /// Scans bottom-to-top, left-to-right within a row. Skips Empty and blocked
    /// cells and cells already updated this sweep.
    pub fn update(&mut self) -> usize {
        self.grid.clear_updated();
        let (w, h) = self.grid.dimensions();
        let (w, h) = (w as i32, h as i32);
        let mut moved = 0;

        for y in (0..h).rev() {
            for x in 0..w {
                let cell = self.grid.at(x, y);
                if cell.is_empty() || cell.is_blocked() || cell.updated {
                    continue;
                }
                let mut api = CellApi::new(&mut self.grid, x, y);
                if elements::update_cell(cell.material, &mut api) {
                    moved += 1;
                }
            }
        }

        trace!(moved, "tick");
        moved
    }

    /// Paint the brush of `material` around `(x, y)`, overwriting anything in range.
    pub fn place(&mut self, material: Material, x: i32, y: i32) {
        for (dx, dy) in BRUSH {
            let (Some(px), Some(py)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if self.grid.in_range(px, py) {
                self.grid.set(px, py, Cell::new(material));
            }
        }
    }

    pub fn select(&mut self, material: Material) {
        debug!(%material, "selected paint material");
        self.current_material = material;
    }

    /// Select by tag (`sand`, `water`, `iron`). Unknown tags are ignored.
    pub fn select_material(&mut self, tag: &str) {
        match Material::from_tag(tag) {
            Some(material) => self.select(material),
            None => debug!(tag, "ignoring unknown material tag"),
        }
    }

    /// Apply one input command. Must only be called between ticks.
    pub fn apply(&mut self, command: Command) -> Control {
        match command {
            Command::Paint { x, y } => self.place(self.current_material, x, y),
            Command::Erase { x, y } => self.place(Material::Empty, x, y),
            Command::Select(material) => self.select(material),
            Command::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// `(x, y, color)` of every non-Empty cell, row-major.
    pub fn cells_iter(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        self.grid
            .iter()
            .filter(|(_, _, cell)| !cell.is_empty())
            .map(|(x, y, cell)| (x, y, cell.material.color()))
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.begin_frame(Material::Empty.color());
        for (x, y, color) in self.cells_iter() {
            sink.draw_cell(x, y, color, self.cell_size);
        }
        sink.end_frame();
    }
}
