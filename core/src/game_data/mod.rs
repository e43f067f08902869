//! Game lookup tables
//!
//! - **moves**: move IDs, names and grab/pummel classification
//! - the character roster lives in `slipreel-types` so settings can key on it

pub mod moves;

pub use moves::{MoveInfo, MoveKind, PUMMEL, get_move_info, move_kind, move_name, move_short_name};
pub use slipreel_types::Character;
