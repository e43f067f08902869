//! Shared settings types for slipreel
//!
//! This crate contains the serializable types shared between the
//! classification engine (slipreel-core) and its front ends: the playable
//! character roster and the combo filter settings.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ─────────────────────────────────────────────────────────────────────────────
// Character Roster
// ─────────────────────────────────────────────────────────────────────────────

/// Playable characters, keyed by their external (character select) ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    CaptainFalcon,
    DonkeyKong,
    Fox,
    GameAndWatch,
    Kirby,
    Bowser,
    Link,
    Luigi,
    Mario,
    Marth,
    Mewtwo,
    Ness,
    Peach,
    Pikachu,
    IceClimbers,
    Jigglypuff,
    Samus,
    Yoshi,
    Zelda,
    Sheik,
    Falco,
    YoungLink,
    DrMario,
    Roy,
    Pichu,
    Ganondorf,
}

impl Character {
    /// Every playable character in external ID order.
    pub const ALL: [Character; 26] = [
        Character::CaptainFalcon,
        Character::DonkeyKong,
        Character::Fox,
        Character::GameAndWatch,
        Character::Kirby,
        Character::Bowser,
        Character::Link,
        Character::Luigi,
        Character::Mario,
        Character::Marth,
        Character::Mewtwo,
        Character::Ness,
        Character::Peach,
        Character::Pikachu,
        Character::IceClimbers,
        Character::Jigglypuff,
        Character::Samus,
        Character::Yoshi,
        Character::Zelda,
        Character::Sheik,
        Character::Falco,
        Character::YoungLink,
        Character::DrMario,
        Character::Roy,
        Character::Pichu,
        Character::Ganondorf,
    ];

    /// External character ID as written by the replay format.
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    /// Resolve an external character ID. Non-playable IDs return `None`.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Character::CaptainFalcon => "Captain Falcon",
            Character::DonkeyKong => "Donkey Kong",
            Character::Fox => "Fox",
            Character::GameAndWatch => "Mr. Game & Watch",
            Character::Kirby => "Kirby",
            Character::Bowser => "Bowser",
            Character::Link => "Link",
            Character::Luigi => "Luigi",
            Character::Mario => "Mario",
            Character::Marth => "Marth",
            Character::Mewtwo => "Mewtwo",
            Character::Ness => "Ness",
            Character::Peach => "Peach",
            Character::Pikachu => "Pikachu",
            Character::IceClimbers => "Ice Climbers",
            Character::Jigglypuff => "Jigglypuff",
            Character::Samus => "Samus",
            Character::Yoshi => "Yoshi",
            Character::Zelda => "Zelda",
            Character::Sheik => "Sheik",
            Character::Falco => "Falco",
            Character::YoungLink => "Young Link",
            Character::DrMario => "Dr. Mario",
            Character::Roy => "Roy",
            Character::Pichu => "Pichu",
            Character::Ganondorf => "Ganondorf",
        }
    }

    /// Abbreviated name used in compact listings
    pub const fn short_name(&self) -> &'static str {
        match self {
            Character::CaptainFalcon => "Falcon",
            Character::DonkeyKong => "DK",
            Character::GameAndWatch => "G&W",
            Character::IceClimbers => "ICs",
            Character::Jigglypuff => "Puff",
            Character::YoungLink => "YLink",
            Character::DrMario => "Doc",
            Character::Ganondorf => "Ganon",
            other => other.name(),
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Thresholds and toggles consumed by the combo criteria.
///
/// Always complete: partial changes go through [`FilterSettingsPatch`] and
/// [`FilterSettings::merged`], which builds a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Characters exempt from chain grab exclusion
    pub chain_grabbers: BTreeSet<Character>,
    /// When non-empty, one of the combo's participants must carry one of these tags
    pub name_tags: Vec<String>,
    pub min_combo_percent: f32,
    /// Minimum percent overrides keyed by the attacking character
    pub per_character_min_combo_percent: BTreeMap<Character, f32>,
    pub exclude_cpus: bool,
    pub exclude_chain_grabs: bool,
    pub exclude_wobbles: bool,
    /// Share of total damage (0-1) a single hit may deal before the combo counts as one big hit
    pub large_hit_threshold: f32,
    /// Consecutive pummels before a grab counts as a wobble
    pub wobble_threshold: u32,
    /// Share of moves (0-1) that are grab-class before the combo counts as a chain grab
    pub chain_grab_threshold: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            chain_grabbers: BTreeSet::from([
                Character::Marth,
                Character::Peach,
                Character::Pikachu,
                Character::DrMario,
            ]),
            name_tags: Vec::new(),
            min_combo_percent: 60.0,
            per_character_min_combo_percent: BTreeMap::from([(Character::Jigglypuff, 85.0)]),
            exclude_cpus: true,
            exclude_chain_grabs: true,
            exclude_wobbles: true,
            large_hit_threshold: 0.8,
            wobble_threshold: 8,
            chain_grab_threshold: 0.8,
        }
    }
}

impl FilterSettings {
    /// Build new settings with every field present in `patch` taking precedence.
    ///
    /// Collections are replaced wholesale, never merged entry by entry: a patch
    /// carrying `per_character_min_combo_percent` drops every override it does
    /// not repeat.
    pub fn merged(&self, patch: &FilterSettingsPatch) -> Self {
        Self {
            chain_grabbers: patch
                .chain_grabbers
                .clone()
                .unwrap_or_else(|| self.chain_grabbers.clone()),
            name_tags: patch
                .name_tags
                .clone()
                .unwrap_or_else(|| self.name_tags.clone()),
            min_combo_percent: patch.min_combo_percent.unwrap_or(self.min_combo_percent),
            per_character_min_combo_percent: patch
                .per_character_min_combo_percent
                .clone()
                .unwrap_or_else(|| self.per_character_min_combo_percent.clone()),
            exclude_cpus: patch.exclude_cpus.unwrap_or(self.exclude_cpus),
            exclude_chain_grabs: patch.exclude_chain_grabs.unwrap_or(self.exclude_chain_grabs),
            exclude_wobbles: patch.exclude_wobbles.unwrap_or(self.exclude_wobbles),
            large_hit_threshold: patch.large_hit_threshold.unwrap_or(self.large_hit_threshold),
            wobble_threshold: patch.wobble_threshold.unwrap_or(self.wobble_threshold),
            chain_grab_threshold: patch
                .chain_grab_threshold
                .unwrap_or(self.chain_grab_threshold),
        }
    }

    /// Minimum total percent required for a combo by `attacker`.
    pub fn min_percent_for(&self, attacker: Option<Character>) -> f32 {
        attacker
            .and_then(|c| self.per_character_min_combo_percent.get(&c).copied())
            .unwrap_or(self.min_combo_percent)
    }
}

/// Partial settings update. Absent fields inherit from the settings it is merged over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_grabbers: Option<BTreeSet<Character>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_combo_percent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_character_min_combo_percent: Option<BTreeMap<Character, f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_cpus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_chain_grabs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_wobbles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_hit_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wobble_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_grab_threshold: Option<f32>,
}

impl FilterSettingsPatch {
    /// Returns true if merging this patch changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of this patch; fields present in `other` win.
    pub fn overlay(self, other: FilterSettingsPatch) -> Self {
        Self {
            chain_grabbers: other.chain_grabbers.or(self.chain_grabbers),
            name_tags: other.name_tags.or(self.name_tags),
            min_combo_percent: other.min_combo_percent.or(self.min_combo_percent),
            per_character_min_combo_percent: other
                .per_character_min_combo_percent
                .or(self.per_character_min_combo_percent),
            exclude_cpus: other.exclude_cpus.or(self.exclude_cpus),
            exclude_chain_grabs: other.exclude_chain_grabs.or(self.exclude_chain_grabs),
            exclude_wobbles: other.exclude_wobbles.or(self.exclude_wobbles),
            large_hit_threshold: other.large_hit_threshold.or(self.large_hit_threshold),
            wobble_threshold: other.wobble_threshold.or(self.wobble_threshold),
            chain_grab_threshold: other.chain_grab_threshold.or(self.chain_grab_threshold),
        }
    }
}
