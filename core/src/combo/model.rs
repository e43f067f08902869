//! Combo data handed over by the upstream replay parser.

use serde::{Deserialize, Serialize};

use crate::game_data::{MoveKind, move_kind};

/// One landed hit inside a combo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub frame: i32,
    pub attacker_index: u8,
    pub defender_index: u8,
    pub move_id: u8,
    #[serde(default = "default_hit_count")]
    pub hit_count: u32,
    /// Damage dealt by this move, in percent
    pub damage: f32,
}

fn default_hit_count() -> u32 {
    1
}

impl MoveEvent {
    pub fn kind(&self) -> MoveKind {
        move_kind(self.move_id)
    }

    pub fn is_pummel(&self) -> bool {
        self.kind() == MoveKind::Pummel
    }
}

/// A string of hits by one player on another, ending in a kill or an escape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    pub attacker_index: u8,
    pub defender_index: u8,
    pub start_frame: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_frame: Option<i32>,
    #[serde(default)]
    pub moves: Vec<MoveEvent>,
    pub did_kill: bool,
}

impl Combo {
    /// Total percent dealt across every move (0 for an empty combo)
    pub fn total_damage(&self) -> f32 {
        self.moves.iter().fold(0.0, |acc, m| acc + m.damage)
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The single hit that dealt the most damage
    pub fn largest_hit(&self) -> Option<&MoveEvent> {
        self.moves.iter().max_by(|a, b| a.damage.total_cmp(&b.damage))
    }

    /// Share of total damage dealt by the largest hit. Zero when no damage was dealt.
    pub fn largest_hit_fraction(&self) -> f32 {
        let total = self.total_damage();
        if total <= 0.0 {
            return 0.0;
        }
        self.largest_hit().map_or(0.0, |m| m.damage / total)
    }

    /// Share of moves that are pummels or throws. Zero for an empty or damageless combo.
    pub fn grab_class_fraction(&self) -> f32 {
        if self.moves.is_empty() || self.total_damage() <= 0.0 {
            return 0.0;
        }
        let grabs = self
            .moves
            .iter()
            .filter(|m| m.kind().is_grab_class())
            .count();
        grabs as f32 / self.moves.len() as f32
    }

    /// Length of the longest run of back-to-back pummels
    pub fn longest_pummel_run(&self) -> u32 {
        let mut longest: u32 = 0;
        let mut current: u32 = 0;
        for m in &self.moves {
            if m.is_pummel() {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }

    /// Combo length in frames, if the combo has ended
    pub fn duration_frames(&self) -> Option<i32> {
        self.end_frame.map(|end| end - self.start_frame)
    }

    /// True if `player_index` is the attacker or the defender
    pub fn involves(&self, player_index: u8) -> bool {
        self.attacker_index == player_index || self.defender_index == player_index
    }
}
