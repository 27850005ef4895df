//! Browser binding. The page owns the render loop and input decoding; it reads
//! the material byte buffer after each call and draws with `palette()`.

use wasm_bindgen::prelude::*;

use crate::config::SimConfig;
use crate::input::{Command, InputFrame};
use crate::material::Material;
use crate::simulation::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    buffer: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// Create from a surface size in pixels.
    ///
    /// # Errors
    ///
    /// Returns the configuration error message if the surface holds no cell.
    #[wasm_bindgen(constructor)]
    pub fn new(pixel_width: u32, pixel_height: u32) -> Result<Universe, JsValue> {
        let config = SimConfig::new(pixel_width, pixel_height);
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(&config))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sim.grid().width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sim.grid().height() as u32
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.sim.cell_size()
    }

    /// Advance one tick and resync the buffer. Returns the moved-cell count.
    pub fn tick(&mut self) -> u32 {
        let moved = self.sim.update();
        self.sync();
        moved as u32
    }

    /// Paint a brush of the material with discriminant `material`. Unknown
    /// discriminants are ignored.
    pub fn place(&mut self, material: u8, x: i32, y: i32) {
        if let Ok(material) = Material::try_from(material) {
            self.sim.place(material, x, y);
            self.sync();
        }
    }

    /// Pointer sample in pixels with primary/secondary button state.
    pub fn pointer(&mut self, px: i32, py: i32, primary: bool, secondary: bool) {
        let frame = InputFrame {
            pointer: Some((px, py)),
            primary,
            secondary,
            ..InputFrame::default()
        };
        self.run(&frame);
    }

    pub fn key(&mut self, key: char) {
        let frame = InputFrame {
            keys: vec![key],
            ..InputFrame::default()
        };
        self.run(&frame);
    }

    pub fn select_material(&mut self, tag: &str) {
        self.sim.select_material(tag);
    }

    #[must_use]
    pub fn current_material(&self) -> u8 {
        self.sim.current_material() as u8
    }

    /// Pointer to `width * height` material discriminants, row-major.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    #[must_use]
    pub fn cells_len(&self) -> usize {
        self.buffer.len()
    }

    /// Packed `0xRRGGBBAA` colors indexed by material discriminant.
    #[must_use]
    pub fn palette() -> Vec<u32> {
        Material::ALL.iter().map(|m| m.color().to_rgba_u32()).collect()
    }
}

impl Universe {
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        let mut universe = Self {
            sim: Simulation::new(config),
            buffer: Vec::new(),
        };
        universe.sync();
        universe
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    fn run(&mut self, frame: &InputFrame) {
        let mut dirty = false;
        for command in frame.commands(self.sim.cell_size()) {
            dirty |= !matches!(command, Command::Select(_) | Command::Quit);
            self.sim.apply(command);
        }
        if dirty {
            self.sync();
        }
    }

    fn sync(&mut self) {
        self.buffer.clear();
        self.buffer
            .extend(self.sim.grid().cells().iter().map(|c| c.material as u8));
    }
}
