//! Saving and loading the game state as a JSON snapshot on disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION};
use crate::core::game_state::GameState;

#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    last_save_time: i64,
    state: GameState,
}

pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Uses `~/.dragonfell` as the save directory, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_dir(home_dir.join(".dragonfell"))
    }

    pub fn with_dir(save_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    fn save_path(&self) -> PathBuf {
        self.save_dir.join(SAVE_FILE_NAME)
    }

    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let save_data = SaveData {
            version: SAVE_VERSION,
            last_save_time: chrono::Utc::now().timestamp(),
            state: state.clone(),
        };

        let json = serde_json::to_string_pretty(&save_data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.save_path(), json)
    }

    pub fn load(&self) -> io::Result<GameState> {
        let json = fs::read_to_string(self.save_path())?;
        let save_data: SaveData = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(save_data.state)
    }

    pub fn has_save(&self) -> bool {
        self.save_path().exists()
    }

    pub fn delete_save(&self) -> io::Result<()> {
        fs::remove_file(self.save_path())
    }
}
