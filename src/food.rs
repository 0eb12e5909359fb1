use crate::snake::Snake;
use crate::{Cell, GridInt};

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Food {
    pub cell: Cell,
    pub special: bool,
}

/// Places a food item on a uniformly chosen free cell. Returns `None` when
/// the snake occupies the whole board, which the game treats as a win.
pub fn spawn<R: Rng>(rng: &mut R, snake: &Snake, grid_size: GridInt, special: bool) -> Option<Food> {
    let free: Vec<Cell> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| (x, y)))
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    free.choose(rng).map(|&cell| Food { cell, special })
}
