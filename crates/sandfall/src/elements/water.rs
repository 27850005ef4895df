//! Water element: falls, slides diagonally, then spreads sideways.
//!
//! Water only ever moves into Empty cells. Sand displacing water is handled
//! from the sand side.

use crate::api::CellApi;
use crate::material::Material;

/// Down, down-left, down-right, right, left.
const MOVES: [(i32, i32); 5] = [(0, 1), (-1, 1), (1, 1), (1, 0), (-1, 0)];

pub fn update_water(api: &mut CellApi) -> bool {
    for (dx, dy) in MOVES {
        if api.is_any(dx, dy, &[Material::Empty]) {
            return api.swap(dx, dy);
        }
    }
    api.settle();
    false
}
