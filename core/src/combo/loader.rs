//! Combo file loading
//!
//! The replay parser writes one JSON document per game: the game start
//! metadata and every combo it detected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ComboFileError;
use super::{Combo, GameStart};

/// All combos detected in one game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComboFile {
    pub game_start: GameStart,
    #[serde(default)]
    pub combos: Vec<Combo>,
}

impl ComboFile {
    pub fn load(path: &Path) -> Result<Self, ComboFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ComboFileError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_json_str(&content).map_err(|source| ComboFileError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            players = file.game_start.player_count(),
            combos = file.combos.len(),
            "Loaded combo file"
        );
        Ok(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::Character;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test-fixtures")
            .join(name)
    }

    #[test]
    fn loads_fixture_game() {
        let file = ComboFile::load(&fixture("singles_game.json")).expect("fixture should load");
        assert_eq!(file.game_start.player_count(), 2);
        assert_eq!(file.game_start.character_of(0), Some(Character::Fox));
        assert_eq!(file.combos.len(), 4);
        assert_eq!(file.combos[0].moves.len(), 4);
        assert_eq!(file.combos[0].moves[0].hit_count, 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ComboFile::load(&fixture("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, ComboFileError::ReadFile { .. }));
        assert!(err.to_string().contains("does_not_exist.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(ComboFile::from_json_str("{ \"combos\": [] }").is_err());
        let empty = ComboFile::from_json_str(r#"{ "game_start": { "players": [] } }"#).unwrap();
        assert!(empty.combos.is_empty());
    }
}
