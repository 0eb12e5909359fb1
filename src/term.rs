use crate::game::{GameState, GameStatus, GRID_SIZE};
use crate::Cell;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

// Each grid cell is two terminal columns wide so the board is roughly square.
const CELL_WIDTH: u16 = 2;
const BOARD_TOP: u16 = 1;

const BODY_GLYPH: char = '█';
const FOOD_GLYPH: char = 'O';
const SPECIAL_FOOD_GLYPH: char = '*';

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture)
            .expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        terminal::disable_raw_mode().expect("Error unsetting raw mode.");
        execute!(self.stdout, DisableMouseCapture, LeaveAlternateScreen)
            .expect("Error leaving alt screen");
    }

    pub fn read_events(&self) -> Vec<Event> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            events.push(read().unwrap());
        }

        events
    }

    /// Redraws the whole frame from the game state: HUD, borders, food and
    /// snake. Overlay messages are drawn separately on top.
    pub fn draw(&mut self, state: &GameState) {
        queue!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");

        self.draw_hud(state);
        self.draw_borders();

        self.print_cell(state.food().cell, FOOD_GLYPH);
        if let Some(special) = state.special_food() {
            self.print_cell(special.cell, SPECIAL_FOOD_GLYPH);
        }

        let snake = state.snake();
        for (i, &cell) in snake.body().iter().enumerate() {
            let glyph = if i == 0 { snake.head_glyph() } else { BODY_GLYPH };
            self.print_cell(cell, glyph);
        }

        self.flush();
    }

    /// Prints a centered message box over the board, used for the intro,
    /// pause and game-over overlays. The next full `draw` erases it.
    pub fn show_message(&mut self, lines: &[&str]) {
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 4) as u16;
        let msg_height = lines.len() as u16 + 2;
        let left = board_width().saturating_sub(msg_width) / 2;
        let top = BOARD_TOP + (GRID_SIZE as u16 + 2).saturating_sub(msg_height) / 2;

        for row in 0..msg_height {
            let content = if row == 0 || row == msg_height - 1 {
                " ".repeat(msg_width as usize)
            } else {
                let line = lines[row as usize - 1];
                format!("{line: ^width$}", line = line, width = msg_width as usize)
            };
            queue!(self.stdout, cursor::MoveTo(left, top + row), style::Print(content))
                .expect("Error printing message.");
        }

        self.flush();
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_hud(&mut self, state: &GameState) {
        let status = match state.status() {
            GameStatus::NotStarted => "press Enter",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Over => "over",
        };
        let line = format!(
            "Score: {:>4}   High: {:>4}   Difficulty: {:<6}   [{}]",
            state.score(),
            state.high_score(),
            state.difficulty().label(),
            status
        );
        queue!(self.stdout, cursor::MoveTo(0, 0), style::Print(line)).expect("Error printing.");
    }

    fn draw_borders(&mut self) {
        let width = board_width();
        let bottom = BOARD_TOP + GRID_SIZE as u16 + 1;

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            self.print_at((x, BOARD_TOP), ch);
            self.print_at((x, bottom), ch);
        }

        for y in BOARD_TOP + 1..bottom {
            self.print_at((0, y), '|');
            self.print_at((width - 1, y), '|');
        }
    }

    fn print_cell(&mut self, cell: Cell, glyph: char) {
        // Cells past an edge only exist transiently on a fatal move.
        if cell.0 < 0 || cell.1 < 0 || cell.0 >= GRID_SIZE || cell.1 >= GRID_SIZE {
            return;
        }

        let col = 1 + cell.0 as u16 * CELL_WIDTH;
        let row = BOARD_TOP + 1 + cell.1 as u16;
        let pair = glyph.to_string().repeat(CELL_WIDTH as usize);
        queue!(self.stdout, cursor::MoveTo(col, row), style::Print(pair)).expect("Error printing.");
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).expect("Error printing.");
    }
}

fn board_width() -> u16 {
    GRID_SIZE as u16 * CELL_WIDTH + 2
}
