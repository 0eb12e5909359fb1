use std::time::{Duration, Instant};

use crate::food::{self, Food};
use crate::snake::{Direction, Snake};
use crate::GridInt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const GRID_SIZE: GridInt = 20;

const INITIAL_SNAKE_LENGTH: usize = 3;
const NORMAL_FOOD_POINTS: u32 = 10;
const SPECIAL_FOOD_POINTS: u32 = 20;
const SPECIAL_FOOD_CHANCE: f64 = 0.1;
const SPECIAL_FOOD_LIFETIME: Duration = Duration::from_secs(10);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    Over,
}

/// What happened during one tick, reported so the caller can drive sound
/// cues and persistence without the game state touching IO.
#[derive(Default)]
pub struct TickEvents {
    pub ate_food: bool,
    pub ate_special: bool,
    pub crashed: bool,
    pub won: bool,
    pub new_high_score: bool,
}

pub struct GameState {
    grid_size: GridInt,
    snake: Snake,
    food: Food,
    special_food: Option<Food>,
    special_expiry: Option<Instant>,
    score: u32,
    high_score: u32,
    status: GameStatus,
    difficulty: Difficulty,
    won: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(high_score: u32) -> Self {
        Self::with_rng(high_score, StdRng::from_entropy())
    }

    fn with_rng(high_score: u32, mut rng: StdRng) -> Self {
        let snake = Self::starting_snake();
        let food = food::spawn(&mut rng, &snake, GRID_SIZE, false).unwrap();

        GameState {
            grid_size: GRID_SIZE,
            snake,
            food,
            special_food: None,
            special_expiry: None,
            score: 0,
            high_score,
            status: GameStatus::NotStarted,
            difficulty: Difficulty::Easy,
            won: false,
            rng,
        }
    }

    /// Starts a fresh round. The high score carries over; everything else
    /// resets to its defaults.
    pub fn start(&mut self) {
        self.snake = Self::starting_snake();
        self.food = food::spawn(&mut self.rng, &self.snake, self.grid_size, false).unwrap();
        self.special_food = None;
        self.special_expiry = None;
        self.score = 0;
        self.won = false;
        self.status = GameStatus::Running;
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.status = GameStatus::Paused,
            GameStatus::Paused => self.status = GameStatus::Running,
            _ => {}
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        self.snake.steer(direction)
    }

    /// Advances the game by one tick. Food consumption and collision are
    /// independent reads of the same post-move head, so a tick that lands on
    /// food and crashes credits the food before the game ends.
    pub fn update(&mut self, now: Instant) -> TickEvents {
        let mut events = TickEvents::default();
        if self.status != GameStatus::Running {
            return events;
        }

        if let Some(expiry) = self.special_expiry {
            if now >= expiry {
                self.special_food = None;
                self.special_expiry = None;
            }
        }

        self.snake.advance();
        let head = self.snake.head();

        if head == self.food.cell {
            events.ate_food = true;
            self.snake.grow();
            self.score += NORMAL_FOOD_POINTS;

            match food::spawn(&mut self.rng, &self.snake, self.grid_size, false) {
                Some(replacement) => self.food = replacement,
                None => {
                    events.won = true;
                    self.won = true;
                    self.status = GameStatus::Over;
                }
            }

            if self.special_food.is_none() && self.rng.gen_bool(SPECIAL_FOOD_CHANCE) {
                if let Some(special) = food::spawn(&mut self.rng, &self.snake, self.grid_size, true) {
                    self.special_food = Some(special);
                    self.special_expiry = Some(now + SPECIAL_FOOD_LIFETIME);
                }
            }
        }

        if let Some(special) = self.special_food {
            if head == special.cell {
                events.ate_special = true;
                self.snake.grow();
                self.score += SPECIAL_FOOD_POINTS;
                self.special_food = None;
                self.special_expiry = None;
            }
        }

        if self.score > self.high_score {
            self.high_score = self.score;
            events.new_high_score = true;
        }

        if self.snake.is_collided(self.grid_size) {
            events.crashed = true;
            self.status = GameStatus::Over;
        }

        events
    }

    ///////////////////////////////////////////////////////////////////////////

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn special_food(&self) -> Option<Food> {
        self.special_food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn won(&self) -> bool {
        self.won
    }

    fn starting_snake() -> Snake {
        Snake::new((GRID_SIZE / 2, GRID_SIZE / 2), INITIAL_SNAKE_LENGTH, Direction::Right)
    }
}
