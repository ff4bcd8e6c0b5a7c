use super::grid::{Cell, Velocity};
use crate::consts;
use std::collections::VecDeque;

/// The snake's body: an ordered sequence of cells, tail first, head last.
/// Adjacent cells differ by exactly one unit in exactly one axis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) cells: VecDeque<Cell>,
}

impl Snake {
    /// A fresh snake lying along the top edge with its head at the right end,
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] segments long.
    pub(crate) fn new(unit: i32) -> Snake {
        Snake {
            cells: (0..consts::INITIAL_SNAKE_LENGTH)
                .map(|i| Cell::new(i * unit, 0))
                .collect(),
        }
    }

    pub(crate) fn head(&self) -> Cell {
        *self.cells.back().expect("snake is never empty")
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Move one step in the direction of `velocity`.  Returns `true` if the
    /// new head landed on `food`, in which case the tail is retained and the
    /// snake has grown by one cell; the caller must then relocate the food
    /// and bump the score.
    ///
    /// The growth check happens before the tail drop: a snake eating food on
    /// the cell its tail is about to vacate must not read as a self-collision
    /// on the following tick.
    pub(crate) fn advance(&mut self, velocity: Velocity, food: Cell) -> bool {
        let head = self.head() + velocity;
        self.cells.push_back(head);
        if head == food {
            true
        } else {
            let _ = self.cells.pop_front();
            false
        }
    }

    /// Whether the head occupies the same cell as any other segment.
    pub(crate) fn self_collision(&self) -> bool {
        let head = self.head();
        self.cells
            .iter()
            .take(self.cells.len() - 1)
            .any(|&cell| cell == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFF_BOARD: Cell = Cell { x: 775, y: 375 };

    #[test]
    fn initial_layout() {
        let snake = Snake::new(25);
        assert_eq!(
            Vec::from_iter(snake.cells()),
            vec![
                Cell::new(0, 0),
                Cell::new(25, 0),
                Cell::new(50, 0),
                Cell::new(75, 0),
                Cell::new(100, 0),
            ]
        );
        assert_eq!(snake.head(), Cell::new(100, 0));
    }

    #[test]
    fn advance_drops_tail() {
        let mut snake = Snake::new(25);
        let grew = snake.advance(Velocity::new(25, 0), OFF_BOARD);
        assert!(!grew);
        assert_eq!(
            Vec::from_iter(snake.cells()),
            vec![
                Cell::new(25, 0),
                Cell::new(50, 0),
                Cell::new(75, 0),
                Cell::new(100, 0),
                Cell::new(125, 0),
            ]
        );
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn advance_onto_food_retains_tail() {
        let mut snake = Snake::new(25);
        let grew = snake.advance(Velocity::new(25, 0), Cell::new(125, 0));
        assert!(grew);
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.head(), Cell::new(125, 0));
        assert!(snake.contains(Cell::new(0, 0)));
    }

    #[test]
    fn straight_snake_has_no_self_collision() {
        assert!(!Snake::new(25).self_collision());
    }

    #[test]
    fn head_on_body_is_a_self_collision() {
        // Tail→head loop whose head has wrapped back onto the body
        let mut snake = Snake {
            cells: VecDeque::from([
                Cell::new(0, 0),
                Cell::new(25, 0),
                Cell::new(50, 0),
                Cell::new(50, 25),
                Cell::new(25, 25),
            ]),
        };
        assert!(!snake.self_collision());
        let grew = snake.advance(Velocity::new(0, -25), OFF_BOARD);
        assert!(!grew);
        assert_eq!(snake.head(), Cell::new(25, 0));
        assert!(snake.self_collision());
    }

    #[test]
    fn moving_into_vacated_tail_cell_is_not_a_collision() {
        // A 2×2 loop: the head moves onto the cell the tail vacates this
        // same step.
        let mut snake = Snake {
            cells: VecDeque::from([
                Cell::new(0, 0),
                Cell::new(25, 0),
                Cell::new(25, 25),
                Cell::new(0, 25),
            ]),
        };
        let grew = snake.advance(Velocity::new(0, -25), OFF_BOARD);
        assert!(!grew);
        assert_eq!(snake.head(), Cell::new(0, 0));
        assert!(!snake.self_collision());
    }
}
