// Experience-point progression, persisted as a small TOML save file.
// Read once on startup, written on every change; last-write-wins is fine
// for a single-player save.

use crate::style;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveData {
    pub xp: u64,
    pub last_played: String,
}

impl Default for SaveData {
    fn default() -> Self {
        Self { xp: 0, last_played: String::new() }
    }
}

pub struct Progress {
    pub xp: u64,
    /// Sections reached this run; each first visit awards XP.
    visited: HashSet<String>,
    /// Target recorded at transition start, consumed at completion.
    pending_arrival: Option<String>,
}

impl Progress {
    pub fn new(xp: u64) -> Self {
        Self { xp, visited: HashSet::new(), pending_arrival: None }
    }

    fn save_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "retrofolio")
            .map(|dirs| dirs.data_dir().join("save.toml"))
    }

    /// Load the save file, or start a fresh run on any failure.
    pub fn load() -> Self {
        let data = Self::save_path()
            .filter(|path| path.exists())
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| toml::from_str::<SaveData>(&contents).ok())
            .unwrap_or_default();
        Self::new(data.xp)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::save_path().ok_or("could not determine data directory")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = SaveData {
            xp: self.xp,
            last_played: chrono::Local::now().to_rfc3339(),
        };
        fs::write(path, toml::to_string_pretty(&data)?)?;
        Ok(())
    }

    /// Transition start: remember where we are headed.
    pub fn note_departure(&mut self, target_path: &str) {
        self.pending_arrival = Some(target_path.to_string());
    }

    /// Transition complete: award XP on the first visit per run. Returns
    /// true when XP changed (the caller persists).
    pub fn arrive(&mut self) -> bool {
        let Some(path) = self.pending_arrival.take() else {
            return false;
        };
        if self.visited.insert(path) {
            self.xp += style::XP_PER_SECTION;
            true
        } else {
            false
        }
    }

    pub fn level(&self) -> u64 {
        self.xp / style::XP_PER_LEVEL + 1
    }

    /// Fill fraction of the XP bar toward the next level.
    pub fn xp_fraction(&self) -> f32 {
        (self.xp % style::XP_PER_LEVEL) as f32 / style::XP_PER_LEVEL as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_data_serialization() {
        let data = SaveData { xp: 125, last_played: "2026-08-08T10:00:00+00:00".to_string() };
        let toml_str = toml::to_string(&data).expect("Failed to serialize");
        let back: SaveData = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(back.xp, 125);
        assert_eq!(back.last_played, data.last_played);
    }

    #[test]
    fn test_first_visit_awards_xp_once() {
        let mut progress = Progress::new(0);

        progress.note_departure("/about");
        assert!(progress.arrive());
        assert_eq!(progress.xp, style::XP_PER_SECTION);

        // Revisiting the same section this run awards nothing
        progress.note_departure("/about");
        assert!(!progress.arrive());
        assert_eq!(progress.xp, style::XP_PER_SECTION);
    }

    #[test]
    fn test_arrive_without_departure_is_noop() {
        let mut progress = Progress::new(40);
        assert!(!progress.arrive());
        assert_eq!(progress.xp, 40);
    }

    #[test]
    fn test_level_math() {
        let progress = Progress::new(style::XP_PER_LEVEL * 2 + 30);
        assert_eq!(progress.level(), 3);
        assert!((progress.xp_fraction() - 0.3).abs() < f32::EPSILON);
    }
}
