use crate::consts;
use rand::Rng;
use std::ops::Add;

/// A discrete board position, in board-pixel coordinates aligned to the unit
/// grid.  Signed so that a head that has left the board (e.g. `x = -25`) is
/// still representable for the wall-collision check.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl Add<Velocity> for Cell {
    type Output = Cell;

    fn add(self, v: Velocity) -> Cell {
        Cell::new(self.x + v.dx, self.y + v.dy)
    }
}

/// The snake's heading: exactly one component is nonzero and equal to plus or
/// minus the unit size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Velocity {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
}

impl Velocity {
    pub(crate) fn new(dx: i32, dy: i32) -> Velocity {
        Velocity { dx, dy }
    }

    pub(crate) fn reversed(self) -> Velocity {
        Velocity::new(-self.dx, -self.dy)
    }
}

/// The fixed 800×400 board, carved into cells of the configured unit size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    unit: i32,
}

impl Board {
    pub(crate) const WIDTH: i32 = consts::BOARD_WIDTH;
    pub(crate) const HEIGHT: i32 = consts::BOARD_HEIGHT;

    pub(crate) fn new(unit: i32) -> Board {
        debug_assert!(unit > 0, "unit size must be positive");
        Board { unit }
    }

    pub(crate) fn unit(self) -> i32 {
        self.unit
    }

    pub(crate) fn in_bounds(self, cell: Cell) -> bool {
        (0..Self::WIDTH).contains(&cell.x) && (0..Self::HEIGHT).contains(&cell.y)
    }

    /// Number of cell columns, counting the partial column at the right edge
    /// when the unit size does not divide the board width evenly.
    pub(crate) fn columns(self) -> i32 {
        (Self::WIDTH + self.unit - 1) / self.unit
    }

    pub(crate) fn rows(self) -> i32 {
        (Self::HEIGHT + self.unit - 1) / self.unit
    }

    /// Draw a uniformly random cell from the board's valid cell set.
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        let x = rng.random_range(0..self.columns()) * self.unit;
        let y = rng.random_range(0..self.rows()) * self.unit;
        Cell::new(x, y)
    }
}
