//! Mutate/undo discipline for the scratch board

use std::ops::{Deref, DerefMut};

use crate::tictactoe::Cell;

/// A mark placed on the scratch board for the lifetime of the guard.
///
/// The cell is cleared again when the guard drops, so sibling branches always
/// see the board exactly as the parent left it.
pub(crate) struct Placement<'a> {
    cells: &'a mut [Cell; 9],
    position: usize,
}

impl<'a> Placement<'a> {
    pub(crate) fn new(cells: &'a mut [Cell; 9], position: usize, mark: Cell) -> Self {
        debug_assert_eq!(cells[position], Cell::Empty, "placing on an occupied cell");
        cells[position] = mark;
        Self { cells, position }
    }
}

impl Deref for Placement<'_> {
    type Target = [Cell; 9];

    fn deref(&self) -> &Self::Target {
        self.cells
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cells
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.cells[self.position] = Cell::Empty;
    }
}
