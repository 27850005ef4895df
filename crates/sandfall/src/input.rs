//! Abstract input commands and the per-frame input snapshot a driver supplies.

use crate::material::Material;

/// One decoded user action, in grid coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Paint the current material around `(x, y)`.
    Paint { x: i32, y: i32 },
    /// Clear the brush around `(x, y)`.
    Erase { x: i32, y: i32 },
    Select(Material),
    Quit,
}

/// What the driver loop should do after a command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    Quit,
}

/// Raw input sampled once per tick.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct InputFrame {
    /// Pointer position in surface pixels, if the pointer is known.
    pub pointer: Option<(i32, i32)>,
    pub primary: bool,
    pub secondary: bool,
    /// Keys pressed since the previous frame, in order.
    pub keys: Vec<char>,
    pub quit: bool,
}

impl InputFrame {
    /// Decode into commands. Pointer pixels map to cells by floor division.
    ///
    /// Order is paint, erase, selections, quit.
    #[must_use]
    pub fn commands(&self, cell_size: u32) -> Vec<Command> {
        let mut out = Vec::new();
        if let Some((px, py)) = self.pointer {
            let size = cell_size.max(1) as i32;
            let (x, y) = (px.div_euclid(size), py.div_euclid(size));
            if self.primary {
                out.push(Command::Paint { x, y });
            }
            if self.secondary {
                out.push(Command::Erase { x, y });
            }
        }
        out.extend(
            self.keys
                .iter()
                .filter_map(|&k| Material::from_key(k))
                .map(Command::Select),
        );
        if self.quit {
            out.push(Command::Quit);
        }
        out
    }
}
