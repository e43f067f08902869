//! Static per-match facts recorded at game start.

use serde::{Deserialize, Serialize};

use crate::game_data::Character;

/// Who is controlling a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    #[default]
    Human,
    Cpu,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player_index: u8,
    pub character: Character,
    #[serde(default)]
    pub kind: PlayerKind,
    #[serde(default)]
    pub name_tag: String,
}

impl PlayerInfo {
    pub fn is_cpu(&self) -> bool {
        self.kind == PlayerKind::Cpu
    }
}

/// Match metadata consumed alongside every combo of that match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStart {
    #[serde(default)]
    pub stage_id: u16,
    #[serde(default)]
    pub is_teams: bool,
    pub players: Vec<PlayerInfo>,
}

impl GameStart {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, player_index: u8) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| p.player_index == player_index)
    }

    /// Character on `player_index`, if that port is in the match
    pub fn character_of(&self, player_index: u8) -> Option<Character> {
        self.player(player_index).map(|p| p.character)
    }
}
