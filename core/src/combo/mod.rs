//! Combo classification
//!
//! - **model / game_start**: the combo and match data handed over by the replay parser
//! - **criteria**: independent predicates a combo has to satisfy
//! - **filter**: `ComboFilter`, the ordered criterion chain and its settings
//! - **loader**: reading combo files from disk

pub mod criteria;
mod error;
mod filter;
mod game_start;
mod loader;
mod model;

#[cfg(test)]
pub(crate) mod test_support;

pub use criteria::{
    Criterion, ExcludesChainGrabs, ExcludesCpus, ExcludesLargeSingleHit, ExcludesWobbles,
    IsOneVsOne, MatchesPlayerName, SatisfiesMinComboPercent, default_criteria,
};
pub use error::ComboFileError;
pub use filter::{ComboFilter, Verdict};
pub use game_start::{GameStart, PlayerInfo, PlayerKind};
pub use loader::ComboFile;
pub use model::{Combo, MoveEvent};
