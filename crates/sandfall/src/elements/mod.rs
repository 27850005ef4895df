//! Per-material movement rules dispatched from the sweep.

mod earth;
mod sand;
mod water;

use crate::api::CellApi;
use crate::material::Material;

/// Dispatch to the rule for `material`. Returns true if the cell moved.
///
/// Empty and Iron are no-ops and should be skipped before calling this.
pub fn update_cell(material: Material, api: &mut CellApi) -> bool {
    match material {
        Material::Sand => sand::update_sand(api),
        Material::Water => water::update_water(api),
        Material::Earth => earth::update_earth(api),
        Material::Empty | Material::Iron => false,
    }
}
