//! Sand element: falls down, then diagonally; sinks through Water by swapping.

use crate::api::CellApi;
use crate::material::Material;

/// Straight down first, then down-left, then down-right.
const MOVES: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

const DISPLACEABLE: [Material; 2] = [Material::Empty, Material::Water];

pub fn update_sand(api: &mut CellApi) -> bool {
    for (dx, dy) in MOVES {
        if api.is_any(dx, dy, &DISPLACEABLE) {
            return api.swap(dx, dy);
        }
    }
    api.settle();
    false
}
