//! Builders shared by the combo unit tests.

use super::{Combo, GameStart, MoveEvent, PlayerInfo, PlayerKind};
use crate::game_data::Character;

pub const ATTACKER: u8 = 0;
pub const DEFENDER: u8 = 1;

/// A hit from the attacker port on the defender port
pub fn hit(move_id: u8, damage: f32) -> MoveEvent {
    MoveEvent {
        frame: 0,
        attacker_index: ATTACKER,
        defender_index: DEFENDER,
        move_id,
        hit_count: 1,
        damage,
    }
}

pub fn combo(moves: Vec<MoveEvent>, did_kill: bool) -> Combo {
    let moves = moves
        .into_iter()
        .enumerate()
        .map(|(i, m)| MoveEvent {
            frame: i as i32 * 10,
            ..m
        })
        .collect();
    Combo {
        attacker_index: ATTACKER,
        defender_index: DEFENDER,
        start_frame: 0,
        end_frame: None,
        moves,
        did_kill,
    }
}

pub fn player(player_index: u8, character: Character, kind: PlayerKind, name_tag: &str) -> PlayerInfo {
    PlayerInfo {
        player_index,
        character,
        kind,
        name_tag: name_tag.to_string(),
    }
}

/// Human vs human singles match
pub fn singles(attacker: Character, defender: Character) -> GameStart {
    GameStart {
        stage_id: 31,
        is_teams: false,
        players: vec![
            player(ATTACKER, attacker, PlayerKind::Human, ""),
            player(DEFENDER, defender, PlayerKind::Human, ""),
        ],
    }
}

/// Combo dealing `total` percent where the largest single hit deals `largest_share` of it
pub fn spread_combo(total: f32, largest_share: f32, did_kill: bool) -> Combo {
    let big = total * largest_share;
    let rest = total - big;
    // Non-grab moves only, each smaller than the big hit
    let moves = vec![
        hit(10, big),
        hit(13, rest / 3.0),
        hit(14, rest / 3.0),
        hit(16, rest / 3.0),
    ];
    combo(moves, did_kill)
}
