//! Text render sink: one character per cell.

use sandfall::{Color, Material, RenderSink};

#[derive(Debug)]
pub struct AsciiSink {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl AsciiSink {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec!['.'; width]; height],
        }
    }

    pub fn frame(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.rows.len());
        for row in &self.rows {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

fn glyph(color: Color) -> char {
    match Material::ALL.into_iter().find(|m| m.color() == color) {
        Some(Material::Sand) => 'S',
        Some(Material::Earth) => '#',
        Some(Material::Water) => '~',
        Some(Material::Iron) => 'I',
        Some(Material::Empty) => '.',
        None => '?',
    }
}

impl RenderSink for AsciiSink {
    fn begin_frame(&mut self, _background: Color) {
        for row in &mut self.rows {
            row.fill('.');
        }
    }

    fn draw_cell(&mut self, x: i32, y: i32, color: Color, _cell_size: u32) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = glyph(color);
        }
    }
}
