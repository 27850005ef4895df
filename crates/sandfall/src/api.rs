//! Relative-offset API for material rules.

use crate::cell::Cell;
use crate::grid::Grid;
use crate::material::Material;

/// Out-of-range reads return `None`; rules treat that as an illegal move.
/// Every write stamps `updated`, so a cell touched by a rule is not processed
/// again in the same sweep.
#[derive(Debug)]
pub struct CellApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> CellApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Cell> {
        let (x, y) = (self.x + dx, self.y + dy);
        self.grid.in_range(x, y).then(|| self.grid.at(x, y))
    }

    /// True when the neighbor is in range and holds one of `materials`.
    #[must_use]
    pub fn is_any(&self, dx: i32, dy: i32, materials: &[Material]) -> bool {
        self.get(dx, dy)
            .is_some_and(|cell| materials.contains(&cell.material))
    }

    /// Overwrite a neighbor. Out-of-range writes are dropped.
    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        let (x, y) = (self.x + dx, self.y + dy);
        if self.grid.in_range(x, y) {
            self.grid.set(
                x,
                y,
                Cell {
                    updated: true,
                    ..cell
                },
            );
        }
    }

    /// Exchange this cell with a neighbor, marking both updated.
    /// Returns false (and changes nothing) if the neighbor is out of range.
    pub fn swap(&mut self, dx: i32, dy: i32) -> bool {
        let (here, there) = ((self.x, self.y), (self.x + dx, self.y + dy));
        if !self.grid.in_range(here.0, here.1) || !self.grid.in_range(there.0, there.1) {
            return false;
        }
        self.grid.swap(here, there);
        self.settle();
        self.stamp(dx, dy);
        true
    }

    /// Mark this cell processed without moving it.
    pub fn settle(&mut self) {
        self.stamp(0, 0);
    }

    fn stamp(&mut self, dx: i32, dy: i32) {
        if let Some(cell) = self.get(dx, dy) {
            self.set(dx, dy, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn swap_exchanges_and_stamps_both() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Cell::new(Material::Sand));
        let mut api = CellApi::new(&mut grid, 1, 1);
        assert!(api.swap(0, 1));
        assert_eq!(
            grid.at(1, 1),
            Cell {
                material: Material::Empty,
                updated: true,
            }
        );
        assert_eq!(
            grid.at(1, 2),
            Cell {
                material: Material::Sand,
                updated: true,
            }
        );
    }

    #[test]
    fn settle_marks_in_place() {
        let mut grid = Grid::new(4, 4);
        grid.set(2, 2, Cell::new(Material::Water));
        CellApi::new(&mut grid, 2, 2).settle();
        assert_eq!(
            grid.at(2, 2),
            Cell {
                material: Material::Water,
                updated: true,
            }
        );
    }

    #[test]
    fn is_any_respects_range() {
        let mut grid = Grid::new(4, 4);
        let api = CellApi::new(&mut grid, 0, 3);
        assert!(!api.is_any(0, 1, &[Material::Empty]));
        assert!(!api.is_any(-1, 0, &[Material::Empty, Material::Earth]));
        assert!(api.is_any(1, 0, &[Material::Earth]));
        assert!(api.is_any(0, -1, &[Material::Empty]));
    }

    proptest! {
        #[test]
        fn prop_out_of_range_neighbors_are_untouched(
            x in 0i32..16,
            y in 0i32..16,
            dx in -32i32..32,
            dy in -32i32..32,
        ) {
            let (tx, ty) = (x + dx, y + dy);
            prop_assume!(!(0..16).contains(&tx) || !(0..16).contains(&ty));

            let mut grid = Grid::new(16, 16);
            grid.set(x, y, Cell::new(Material::Sand));
            let before = grid.clone();

            let mut api = CellApi::new(&mut grid, x, y);
            prop_assert_eq!(api.get(dx, dy), None);
            api.set(dx, dy, Cell::new(Material::Iron));
            prop_assert!(!api.swap(dx, dy));
            prop_assert_eq!(&grid, &before);
        }
    }
}
