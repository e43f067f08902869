pub mod combo;
pub mod config;
pub mod game_data;

// Re-exports for convenience
pub use combo::{
    Combo, ComboFile, ComboFileError, ComboFilter, Criterion, GameStart, MoveEvent, PlayerInfo,
    PlayerKind, Verdict,
};
pub use config::ConfigError;
pub use game_data::{Character, MoveKind};
pub use slipreel_types::{FilterSettings, FilterSettingsPatch};
