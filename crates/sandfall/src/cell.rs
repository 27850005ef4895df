//! Grid cell type.

use std::fmt;

use crate::material::Material;

/// One grid slot: a material plus the per-tick `updated` guard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub material: Material,
    /// Set once the cell has been processed in the current sweep.
    pub updated: bool,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl From<Material> for Cell {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

impl Cell {
    #[must_use]
    pub const fn new(material: Material) -> Self {
        Self {
            material,
            updated: false,
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Material::Empty)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.material, Material::Empty)
    }

    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.material.is_blocked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_constructors() {
        let empty = Cell::empty();
        assert_eq!(empty.material, Material::Empty);
        assert!(!empty.updated);
        assert!(empty.is_empty());

        let iron = Cell::new(Material::Iron);
        assert!(iron.is_blocked());
        assert!(!iron.is_empty());

        assert_eq!(Cell::from(Material::Sand), Cell::new(Material::Sand));
    }

    #[test]
    fn cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::empty());
    }

    #[test]
    fn cell_display_is_material() {
        assert_eq!(format!("{}", Cell::new(Material::Water)), "Water");
    }
}
