use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SAVE_FILE: &str = "snake_save.json";

#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    high_score: u32,
}

/// A single read/write slot for the high score, kept in a small JSON file
/// next to the binary. Reads default to zero on any failure; writes are
/// best-effort since losing a high score is not worth failing the session.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new() -> Self {
        Self::at(PathBuf::from(SAVE_FILE))
    }

    pub fn at(path: PathBuf) -> Self {
        HighScoreStore { path }
    }

    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<SaveData>(&text).ok())
            .map(|data| data.high_score)
            .unwrap_or(0)
    }

    pub fn save(&self, high_score: u32) {
        let data = SaveData { high_score };
        if let Ok(text) = serde_json::to_string_pretty(&data) {
            let _ = fs::write(&self.path, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_zero() {
        let store = HighScoreStore::at(std::env::temp_dir().join("snake-arcade-missing.json"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let path = std::env::temp_dir().join("snake-arcade-roundtrip.json");
        let _ = fs::remove_file(&path);

        let store = HighScoreStore::at(path.clone());
        store.save(120);
        assert_eq!(store.load(), 120);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_defaults_to_zero() {
        let path = std::env::temp_dir().join("snake-arcade-corrupt.json");
        fs::write(&path, "not json").unwrap();

        let store = HighScoreStore::at(path.clone());
        assert_eq!(store.load(), 0);

        let _ = fs::remove_file(&path);
    }
}
