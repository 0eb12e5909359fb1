use crate::{Cell, GridInt};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn offset(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    pending: Direction,
}

impl Snake {
    pub fn new(head: Cell, size: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        let body = (0..size)
            .map(|i| (head.0 - dx * i as GridInt, head.1 - dy * i as GridInt))
            .collect();
        Snake { body, direction, pending: direction }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Records a steering intent for the next tick. The exact reverse of the
    /// current heading is rejected so the snake can never fold onto its own
    /// neck. Returns whether the intent was accepted.
    pub fn steer(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            false
        } else {
            self.pending = new_direction;
            true
        }
    }

    /// Commits the pending heading and shifts the body one cell along it.
    /// No bounds checking happens here; callers evaluate `is_collided`
    /// against the post-move head.
    pub fn advance(&mut self) -> Cell {
        self.direction = self.pending;
        let (dx, dy) = self.direction.offset();
        let head = self.head();
        let new_head = (head.0 + dx, head.1 + dy);

        self.body.insert(0, new_head);
        self.body.pop();
        new_head
    }

    /// Duplicates the tail cell. The duplicate is consumed by the next
    /// `advance`, so each growth event extends the body by exactly one.
    pub fn grow(&mut self) {
        let tail = *self.body.last().unwrap();
        self.body.push(tail);
    }

    pub fn is_collided(&self, grid_size: GridInt) -> bool {
        let head = self.head();

        if head.0 < 0 || head.1 < 0 || head.0 >= grid_size || head.1 >= grid_size {
            return true;
        }

        self.body[1..].contains(&head)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn head_glyph(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_right() -> Snake {
        Snake::new((10, 10), 3, Right)
    }

    #[test]
    fn new_snake_extends_behind_the_head() {
        assert_eq!(snake_right().body(), &[(10, 10), (9, 10), (8, 10)]);
    }

    #[test]
    fn advance_shifts_the_whole_body_one_cell() {
        let mut snake = snake_right();
        snake.advance();
        assert_eq!(snake.body(), &[(11, 10), (10, 10), (9, 10)]);
    }

    #[test]
    fn advance_commits_the_pending_heading() {
        let mut snake = snake_right();
        assert!(snake.steer(Up));
        snake.advance();
        assert_eq!(snake.head(), (10, 9));
        assert_eq!(snake.head_glyph(), '^');
    }

    #[test]
    fn reverse_steering_is_rejected() {
        let mut snake = snake_right();
        assert!(!snake.steer(Left));
        snake.advance();
        assert_eq!(snake.head(), (11, 10));
    }

    #[test]
    fn reverse_check_uses_the_current_heading_not_the_pending_one() {
        let mut snake = snake_right();
        assert!(snake.steer(Up));
        // Still moving right until the next tick commits the turn.
        assert!(!snake.steer(Left));
        snake.advance();
        assert_eq!(snake.head(), (10, 9));
    }

    #[test]
    fn grow_extends_by_exactly_one_across_the_next_advance() {
        let mut snake = snake_right();
        snake.grow();
        assert_eq!(snake.body(), &[(10, 10), (9, 10), (8, 10), (8, 10)]);

        snake.advance();
        assert_eq!(snake.body(), &[(11, 10), (10, 10), (9, 10), (8, 10)]);

        snake.advance();
        assert_eq!(snake.body().len(), 4);
    }

    #[test]
    fn in_bounds_head_is_not_a_collision() {
        assert!(!snake_right().is_collided(20));
    }

    #[test]
    fn running_into_a_wall_collides() {
        let mut snake = Snake::new((19, 10), 3, Right);
        snake.advance();
        assert_eq!(snake.head(), (20, 10));
        assert!(snake.is_collided(20));
    }

    #[test]
    fn reentering_the_body_collides() {
        let mut snake = Snake::new((10, 10), 5, Right);
        snake.steer(Down);
        snake.advance();
        snake.steer(Left);
        snake.advance();
        snake.steer(Up);
        snake.advance();
        assert_eq!(snake.head(), (9, 10));
        assert!(snake.is_collided(20));
    }

    #[test]
    fn overlapping_tail_duplicates_count_as_body_cells() {
        let mut snake = Snake::new((5, 5), 1, Right);
        snake.grow();
        assert_eq!(snake.body(), &[(5, 5), (5, 5)]);
        assert!(snake.is_collided(20));
    }
}
