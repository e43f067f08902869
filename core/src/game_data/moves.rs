//! Move identifiers as recorded on each landed hit.
//!
//! Maps move IDs to display names and a coarse classification used by the
//! chain grab and wobble criteria.

use phf::phf_map;

/// Move ID of a grab pummel
pub const PUMMEL: u8 = 52;

/// Coarse move classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Ground,
    Aerial,
    Special,
    Pummel,
    Throw,
    Getup,
    Edge,
    Misc,
}

impl MoveKind {
    /// Pummels and throws, the building blocks of a chain grab
    pub const fn is_grab_class(&self) -> bool {
        matches!(self, MoveKind::Pummel | MoveKind::Throw)
    }
}

/// Move lookup data
#[derive(Debug, Clone, Copy)]
pub struct MoveInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub kind: MoveKind,
}

impl MoveInfo {
    const fn new(name: &'static str, short_name: &'static str, kind: MoveKind) -> Self {
        Self {
            name,
            short_name,
            kind,
        }
    }
}

/// Get move info for a move ID
pub fn get_move_info(move_id: u8) -> Option<&'static MoveInfo> {
    MOVES.get(&move_id)
}

/// Classify a move ID. Unknown IDs are `Misc`.
pub fn move_kind(move_id: u8) -> MoveKind {
    get_move_info(move_id).map_or(MoveKind::Misc, |info| info.kind)
}

/// Display name for a move ID, falling back to a generic label
pub fn move_name(move_id: u8) -> &'static str {
    get_move_info(move_id).map_or("Unknown Move", |info| info.name)
}

/// Compact label for a move ID, as used in one-line combo summaries
pub fn move_short_name(move_id: u8) -> &'static str {
    get_move_info(move_id).map_or("unknown", |info| info.short_name)
}

/// Move info lookup table indexed by move ID
pub static MOVES: phf::Map<u8, MoveInfo> = phf_map! {
    1u8 => MoveInfo::new("Miscellaneous", "misc", MoveKind::Misc),

    // Grounded normals
    2u8 => MoveInfo::new("Jab", "jab1", MoveKind::Ground),
    3u8 => MoveInfo::new("Jab", "jab2", MoveKind::Ground),
    4u8 => MoveInfo::new("Jab", "jab3", MoveKind::Ground),
    5u8 => MoveInfo::new("Rapid Jabs", "jabm", MoveKind::Ground),
    6u8 => MoveInfo::new("Dash Attack", "dash", MoveKind::Ground),
    7u8 => MoveInfo::new("Forward Tilt", "ftilt", MoveKind::Ground),
    8u8 => MoveInfo::new("Up Tilt", "utilt", MoveKind::Ground),
    9u8 => MoveInfo::new("Down Tilt", "dtilt", MoveKind::Ground),
    10u8 => MoveInfo::new("Forward Smash", "fsmash", MoveKind::Ground),
    11u8 => MoveInfo::new("Up Smash", "usmash", MoveKind::Ground),
    12u8 => MoveInfo::new("Down Smash", "dsmash", MoveKind::Ground),

    // Aerials
    13u8 => MoveInfo::new("Neutral Air", "nair", MoveKind::Aerial),
    14u8 => MoveInfo::new("Forward Air", "fair", MoveKind::Aerial),
    15u8 => MoveInfo::new("Back Air", "bair", MoveKind::Aerial),
    16u8 => MoveInfo::new("Up Air", "uair", MoveKind::Aerial),
    17u8 => MoveInfo::new("Down Air", "dair", MoveKind::Aerial),

    // Specials
    18u8 => MoveInfo::new("Neutral B", "neutral-b", MoveKind::Special),
    19u8 => MoveInfo::new("Side B", "side-b", MoveKind::Special),
    20u8 => MoveInfo::new("Up B", "up-b", MoveKind::Special),
    21u8 => MoveInfo::new("Down B", "down-b", MoveKind::Special),

    // Getup / ledge
    50u8 => MoveInfo::new("Getup Attack", "getup", MoveKind::Getup),
    51u8 => MoveInfo::new("Getup Attack (Slow)", "getup-slow", MoveKind::Getup),
    61u8 => MoveInfo::new("Edge Attack (Slow)", "edge-slow", MoveKind::Edge),
    62u8 => MoveInfo::new("Edge Attack", "edge", MoveKind::Edge),

    // Grab game
    52u8 => MoveInfo::new("Grab Pummel", "pummel", MoveKind::Pummel),
    53u8 => MoveInfo::new("Forward Throw", "fthrow", MoveKind::Throw),
    54u8 => MoveInfo::new("Back Throw", "bthrow", MoveKind::Throw),
    55u8 => MoveInfo::new("Up Throw", "uthrow", MoveKind::Throw),
    56u8 => MoveInfo::new("Down Throw", "dthrow", MoveKind::Throw),
};
