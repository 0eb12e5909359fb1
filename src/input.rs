use crate::game::Difficulty;
use crate::snake::Direction;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};

/// A discrete control intent, independent of whether it came from the
/// keyboard or from a mouse drag.
pub enum Intent {
    Steer(Direction),
    Start,
    TogglePause,
    SetDifficulty(Difficulty),
    Quit,
}

/// Turns raw terminal events into intents. Mouse drags play the role of
/// touch swipes: the press-to-release delta is reduced to its dominant axis.
pub struct InputTranslator {
    drag_start: Option<(i32, i32)>,
}

impl InputTranslator {
    pub fn new() -> Self {
        InputTranslator { drag_start: None }
    }

    pub fn translate(&mut self, event: &Event) -> Option<Intent> {
        match event {
            Event::Key(key) => translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            _ => None,
        }
    }

    fn translate_mouse(&mut self, event: &MouseEvent) -> Option<Intent> {
        match event {
            MouseEvent::Down(MouseButton::Left, x, y, _) => {
                self.drag_start = Some((i32::from(*x), i32::from(*y)));
                None
            }
            MouseEvent::Up(MouseButton::Left, x, y, _) => {
                let (start_x, start_y) = self.drag_start.take()?;
                let direction = drag_direction(i32::from(*x) - start_x, i32::from(*y) - start_y)?;
                Some(Intent::Steer(direction))
            }
            _ => None,
        }
    }
}

fn translate_key(event: &KeyEvent) -> Option<Intent> {
    if is_ctrl_c(event) {
        return Some(Intent::Quit);
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Intent::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Intent::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Intent::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Intent::Steer(Direction::Right)),
        KeyCode::Enter => Some(Intent::Start),
        KeyCode::Esc | KeyCode::Char('p') => Some(Intent::TogglePause),
        KeyCode::Char('1') => Some(Intent::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Intent::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Intent::SetDifficulty(Difficulty::Hard)),
        _ => None,
    }
}

/// Dominant-axis swipe translation; ties and taps carry no direction.
fn drag_direction(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else if dy.abs() > dx.abs() {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    } else {
        None
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent { code, modifiers: KeyModifiers::empty() })
    }

    #[test]
    fn keys_translate_to_intents() {
        let mut input = InputTranslator::new();

        assert!(matches!(input.translate(&key(KeyCode::Up)), Some(Intent::Steer(Direction::Up))));
        assert!(matches!(input.translate(&key(KeyCode::Char('a'))), Some(Intent::Steer(Direction::Left))));
        assert!(matches!(input.translate(&key(KeyCode::Enter)), Some(Intent::Start)));
        assert!(matches!(input.translate(&key(KeyCode::Esc)), Some(Intent::TogglePause)));
        assert!(matches!(
            input.translate(&key(KeyCode::Char('2'))),
            Some(Intent::SetDifficulty(Difficulty::Medium))
        ));
        assert!(input.translate(&key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut input = InputTranslator::new();
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(matches!(input.translate(&ev), Some(Intent::Quit)));
    }

    #[test]
    fn dominant_axis_picks_the_swipe_direction() {
        assert_eq!(drag_direction(5, 2), Some(Direction::Right));
        assert_eq!(drag_direction(-7, 3), Some(Direction::Left));
        assert_eq!(drag_direction(1, 4), Some(Direction::Down));
        assert_eq!(drag_direction(0, -6), Some(Direction::Up));
    }

    #[test]
    fn ties_and_taps_are_discarded() {
        assert_eq!(drag_direction(0, 0), None);
        assert_eq!(drag_direction(3, 3), None);
        assert_eq!(drag_direction(-2, 2), None);
    }

    #[test]
    fn mouse_drag_maps_to_a_steer() {
        let mut input = InputTranslator::new();
        let down = Event::Mouse(MouseEvent::Down(MouseButton::Left, 10, 10, KeyModifiers::empty()));
        let up = Event::Mouse(MouseEvent::Up(MouseButton::Left, 30, 14, KeyModifiers::empty()));

        assert!(input.translate(&down).is_none());
        assert!(matches!(input.translate(&up), Some(Intent::Steer(Direction::Right))));
    }

    #[test]
    fn a_release_without_a_press_is_ignored() {
        let mut input = InputTranslator::new();
        let up = Event::Mouse(MouseEvent::Up(MouseButton::Left, 30, 14, KeyModifiers::empty()));
        assert!(input.translate(&up).is_none());
    }
}
