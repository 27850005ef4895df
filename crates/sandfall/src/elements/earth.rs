//! Earth element: drops straight into Empty space and nowhere else.
//!
//! Unlike sand and water this overwrites instead of swapping, so earth never
//! sinks through water.

use crate::api::CellApi;
use crate::cell::Cell;
use crate::material::Material;

pub fn update_earth(api: &mut CellApi) -> bool {
    if api.is_any(0, 1, &[Material::Empty]) {
        api.set(0, 0, Cell::empty());
        api.set(0, 1, Cell::new(Material::Earth));
        return true;
    }
    api.settle();
    false
}
