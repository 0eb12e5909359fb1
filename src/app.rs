use std::{process::exit, thread::sleep, time::{Duration, Instant}};

use crate::game::{GameState, GameStatus};
use crate::input::{InputTranslator, Intent};
use crate::score::HighScoreStore;
use crate::sound::SoundManager;
use crate::term::TermManager;

const POLL_INTERVAL_MS: u64 = 5;

/// Wires the pure game state to its terminal, input, sound and persistence
/// adapters and runs the cooperative loop. All mutation happens here: input
/// events only record intents, and the game steps on a single deadline.
pub struct App {
    term: TermManager,
    input: InputTranslator,
    store: HighScoreStore,
    sound: SoundManager,
    state: GameState,
}

impl App {
    pub fn new() -> Self {
        let store = HighScoreStore::new();
        let state = GameState::new(store.load());

        App {
            term: TermManager::new(),
            input: InputTranslator::new(),
            store,
            sound: SoundManager::new(),
            state,
        }
    }

    pub fn run(&mut self) {
        self.term.setup();
        self.term.draw(&self.state);
        self.show_intro();

        let mut next_step = Instant::now() + self.state.difficulty().tick_interval();

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for event in self.term.read_events() {
                if let Some(intent) = self.input.translate(&event) {
                    self.apply(intent, &mut next_step);
                }
            }

            if self.state.status() == GameStatus::Running && Instant::now() >= next_step {
                self.step();
                next_step = Instant::now() + self.state.difficulty().tick_interval();
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn apply(&mut self, intent: Intent, next_step: &mut Instant) {
        match intent {
            Intent::Quit => self.clean_exit(),

            Intent::Steer(direction) => {
                if self.state.steer(direction) {
                    self.sound.play_move();
                }
            }

            Intent::Start => {
                self.state.start();
                *next_step = Instant::now() + self.state.difficulty().tick_interval();
                self.term.draw(&self.state);
            }

            Intent::TogglePause => {
                self.state.toggle_pause();
                match self.state.status() {
                    GameStatus::Paused => {
                        self.term.show_message(&["Paused", "", "Esc to resume", "Ctrl+C to quit"]);
                    }
                    GameStatus::Running => {
                        *next_step = Instant::now() + self.state.difficulty().tick_interval();
                        self.term.draw(&self.state);
                    }
                    _ => {}
                }
            }

            Intent::SetDifficulty(difficulty) => {
                self.state.set_difficulty(difficulty);
                // Re-arm the single pending step at the new interval; there is
                // never more than one scheduled step.
                *next_step = Instant::now() + difficulty.tick_interval();
                if self.state.status() != GameStatus::Paused {
                    self.term.draw(&self.state);
                }
            }
        }
    }

    fn step(&mut self) {
        let events = self.state.update(Instant::now());

        if events.ate_food || events.ate_special {
            self.sound.play_eat();
        }
        if events.new_high_score {
            self.store.save(self.state.high_score());
        }

        self.term.draw(&self.state);

        if events.crashed || events.won {
            self.sound.play_game_over();
            self.show_game_over();
        }
    }

    fn show_intro(&mut self) {
        self.term.show_message(&[
            "S N A K E",
            "",
            "Arrow keys or WASD to steer",
            "Drag the mouse to swipe",
            "Esc to pause, 1/2/3 for difficulty",
            "Ctrl+C to quit",
            "",
            "Press Enter to begin",
        ]);
    }

    fn show_game_over(&mut self) {
        let title = if self.state.won() { "You won!" } else { "Game over!" };
        let score_line = format!("Score: {}", self.state.score());
        let high_line = format!("High score: {}", self.state.high_score());

        self.term.show_message(&[
            title,
            &score_line,
            &high_line,
            "",
            "Enter to play again,",
            "or Ctrl+C to quit.",
        ]);
    }

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }
}
