use super::grid::{Board, Cell};
use super::snake::Snake;
use rand::Rng;

/// Choose a cell for the food: rejection-sample uniformly random cells until
/// one lands off the snake.  The board always has more cells than the snake
/// has segments, so the loop terminates.
pub(crate) fn place<R: Rng>(rng: &mut R, snake: &Snake, board: Board) -> Cell {
    loop {
        let cell = board.random_cell(rng);
        if !snake.contains(cell) {
            return cell;
        }
    }
}
