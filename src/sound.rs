use std::io::{stdout, Write};

/// Fire-and-forget audio cues via the terminal bell. Playback is cosmetic:
/// a failed write is dropped and never reaches game logic.
pub struct SoundManager;

impl SoundManager {
    pub fn new() -> Self {
        SoundManager
    }

    pub fn play_move(&self) {
        self.bell();
    }

    pub fn play_eat(&self) {
        self.bell();
    }

    pub fn play_game_over(&self) {
        self.bell();
    }

    fn bell(&self) {
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
