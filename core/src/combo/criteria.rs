//! Combo criteria
//!
//! Each criterion is an independent, stateless predicate over a combo, the
//! match it came from, and the current filter settings. A combo is only
//! accepted if every criterion passes.

use slipreel_types::FilterSettings;

use super::{Combo, GameStart};

/// A single rule a combo has to satisfy.
pub trait Criterion: Send + Sync {
    /// Stable identifier used in verdicts and logs
    fn name(&self) -> &'static str;

    /// Returns true if `combo` satisfies this rule.
    fn check(&self, combo: &Combo, game: &GameStart, settings: &FilterSettings) -> bool;
}

/// The stock rule set, in evaluation order.
pub fn default_criteria() -> Vec<Box<dyn Criterion>> {
    vec![
        Box::new(MatchesPlayerName),
        Box::new(ExcludesChainGrabs),
        Box::new(ExcludesWobbles),
        Box::new(SatisfiesMinComboPercent),
        Box::new(ExcludesLargeSingleHit),
        Box::new(ExcludesCpus),
        Box::new(IsOneVsOne),
    ]
}

/// Attacker or defender carries one of the configured name tags (exact match).
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchesPlayerName;

impl Criterion for MatchesPlayerName {
    fn name(&self) -> &'static str {
        "matches_player_name"
    }

    fn check(&self, combo: &Combo, game: &GameStart, settings: &FilterSettings) -> bool {
        if settings.name_tags.is_empty() {
            return true;
        }
        game.players
            .iter()
            .filter(|p| combo.involves(p.player_index))
            .any(|p| settings.name_tags.iter().any(|tag| *tag == p.name_tag))
    }
}

/// Rejects combos made mostly of pummels and throws, unless the attacker is an exempt chain grabber.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludesChainGrabs;

impl Criterion for ExcludesChainGrabs {
    fn name(&self) -> &'static str {
        "excludes_chain_grabs"
    }

    fn check(&self, combo: &Combo, game: &GameStart, settings: &FilterSettings) -> bool {
        if !settings.exclude_chain_grabs {
            return true;
        }
        if game
            .character_of(combo.attacker_index)
            .is_some_and(|c| settings.chain_grabbers.contains(&c))
        {
            return true;
        }
        combo.grab_class_fraction() < settings.chain_grab_threshold
    }
}

/// Rejects combos containing a long uninterrupted pummel string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludesWobbles;

impl Criterion for ExcludesWobbles {
    fn name(&self) -> &'static str {
        "excludes_wobbles"
    }

    fn check(&self, combo: &Combo, _game: &GameStart, settings: &FilterSettings) -> bool {
        !settings.exclude_wobbles || combo.longest_pummel_run() < settings.wobble_threshold
    }
}

/// Total damage reaches the attacker's minimum percent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatisfiesMinComboPercent;

impl Criterion for SatisfiesMinComboPercent {
    fn name(&self) -> &'static str {
        "satisfies_min_combo_percent"
    }

    fn check(&self, combo: &Combo, game: &GameStart, settings: &FilterSettings) -> bool {
        let required = settings.min_percent_for(game.character_of(combo.attacker_index));
        combo.total_damage() >= required
    }
}

/// Rejects combos where one hit accounts for most of the damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludesLargeSingleHit;

impl Criterion for ExcludesLargeSingleHit {
    fn name(&self) -> &'static str {
        "excludes_large_single_hit"
    }

    fn check(&self, combo: &Combo, _game: &GameStart, settings: &FilterSettings) -> bool {
        combo.largest_hit_fraction() < settings.large_hit_threshold
    }
}

/// Rejects combos performed by a CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludesCpus;

impl Criterion for ExcludesCpus {
    fn name(&self) -> &'static str {
        "excludes_cpus"
    }

    fn check(&self, combo: &Combo, game: &GameStart, settings: &FilterSettings) -> bool {
        !settings.exclude_cpus || !game.player(combo.attacker_index).is_some_and(|p| p.is_cpu())
    }
}

/// Only singles matches qualify.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsOneVsOne;

impl Criterion for IsOneVsOne {
    fn name(&self) -> &'static str {
        "is_one_vs_one"
    }

    fn check(&self, _combo: &Combo, game: &GameStart, _settings: &FilterSettings) -> bool {
        game.player_count() == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::test_support::{ATTACKER, DEFENDER, combo, hit, player, singles, spread_combo};
    use crate::combo::PlayerKind;
    use crate::game_data::{Character, PUMMEL};
    use std::collections::{BTreeMap, BTreeSet};

    fn defaults() -> FilterSettings {
        FilterSettings::default()
    }

    fn tagged_singles(attacker_tag: &str, defender_tag: &str) -> GameStart {
        GameStart {
            players: vec![
                player(ATTACKER, Character::Fox, PlayerKind::Human, attacker_tag),
                player(DEFENDER, Character::Falco, PlayerKind::Human, defender_tag),
            ],
            ..Default::default()
        }
    }

    fn chain_grab() -> Combo {
        combo(
            vec![hit(55, 7.0), hit(55, 7.0), hit(55, 7.0), hit(55, 7.0), hit(14, 16.0)],
            true,
        )
    }

    fn wobble(pummels: usize) -> Combo {
        let mut moves = vec![hit(PUMMEL, 3.0); pummels];
        moves.push(hit(53, 8.0));
        combo(moves, true)
    }

    #[test]
    fn player_name_passes_without_tags() {
        let game = tagged_singles("AAAA", "BBBB");
        assert!(MatchesPlayerName.check(&spread_combo(65.0, 0.5, true), &game, &defaults()));
    }

    #[test]
    fn player_name_matches_either_participant_exactly() {
        let game = tagged_singles("AAAA", "BBBB");
        let c = spread_combo(65.0, 0.5, true);
        let mut settings = defaults();

        settings.name_tags = vec!["BBBB".into()];
        assert!(MatchesPlayerName.check(&c, &game, &settings));

        settings.name_tags = vec!["bbbb".into(), "CCCC".into()];
        assert!(!MatchesPlayerName.check(&c, &game, &settings));
    }

    #[test]
    fn player_name_ignores_ports_outside_the_combo() {
        let mut game = tagged_singles("AAAA", "BBBB");
        game.players.push(player(2, Character::Roy, PlayerKind::Human, "CCCC"));
        let mut settings = defaults();
        settings.name_tags = vec!["CCCC".into()];
        assert!(!MatchesPlayerName.check(&spread_combo(65.0, 0.5, true), &game, &settings));
    }

    #[test]
    fn chain_grab_rejected_for_non_exempt_attacker() {
        let game = singles(Character::Fox, Character::Falco);
        assert!(!ExcludesChainGrabs.check(&chain_grab(), &game, &defaults()));
    }

    #[test]
    fn chain_grab_allowed_for_exempt_attacker() {
        let game = singles(Character::Marth, Character::Fox);
        assert!(ExcludesChainGrabs.check(&chain_grab(), &game, &defaults()));
    }

    #[test]
    fn chain_grab_allowed_when_toggle_off_or_below_threshold() {
        let game = singles(Character::Fox, Character::Falco);
        let mut settings = defaults();
        settings.exclude_chain_grabs = false;
        assert!(ExcludesChainGrabs.check(&chain_grab(), &game, &settings));

        let mut settings = defaults();
        settings.chain_grabbers = BTreeSet::new();
        settings.chain_grab_threshold = 0.9;
        assert!(ExcludesChainGrabs.check(&chain_grab(), &game, &settings));
    }

    #[test]
    fn chain_grab_passes_for_zero_damage() {
        let game = singles(Character::Fox, Character::Falco);
        let c = combo(vec![hit(55, 0.0), hit(55, 0.0)], true);
        assert!(ExcludesChainGrabs.check(&c, &game, &defaults()));
    }

    #[test]
    fn wobble_threshold_is_exclusive() {
        let game = singles(Character::IceClimbers, Character::Fox);
        assert!(ExcludesWobbles.check(&wobble(7), &game, &defaults()));
        assert!(!ExcludesWobbles.check(&wobble(8), &game, &defaults()));

        let mut settings = defaults();
        settings.exclude_wobbles = false;
        assert!(ExcludesWobbles.check(&wobble(20), &game, &settings));
    }

    #[test]
    fn min_percent_uses_per_character_override() {
        let puff = singles(Character::Jigglypuff, Character::Fox);
        let fox = singles(Character::Fox, Character::Jigglypuff);

        assert!(!SatisfiesMinComboPercent.check(&spread_combo(70.0, 0.5, true), &puff, &defaults()));
        assert!(SatisfiesMinComboPercent.check(&spread_combo(90.0, 0.5, true), &puff, &defaults()));
        assert!(SatisfiesMinComboPercent.check(&spread_combo(70.0, 0.5, true), &fox, &defaults()));
        assert!(!SatisfiesMinComboPercent.check(&spread_combo(50.0, 0.5, true), &fox, &defaults()));
    }

    #[test]
    fn min_percent_threshold_is_inclusive() {
        let game = singles(Character::Fox, Character::Falco);
        let c = combo(vec![hit(13, 20.0), hit(14, 20.0), hit(16, 20.0)], true);
        assert!(SatisfiesMinComboPercent.check(&c, &game, &defaults()));
    }

    #[test]
    fn min_percent_falls_back_for_unknown_attacker() {
        let mut game = singles(Character::Jigglypuff, Character::Fox);
        game.players.retain(|p| p.player_index != ATTACKER);
        let mut settings = defaults();
        settings.per_character_min_combo_percent = BTreeMap::from([(Character::Jigglypuff, 99.0)]);
        assert!(SatisfiesMinComboPercent.check(&spread_combo(70.0, 0.5, true), &game, &settings));
    }

    #[test]
    fn large_single_hit_rejected_at_threshold() {
        let game = singles(Character::Fox, Character::Falco);
        assert!(ExcludesLargeSingleHit.check(&spread_combo(65.0, 0.5, true), &game, &defaults()));
        assert!(!ExcludesLargeSingleHit.check(&spread_combo(65.0, 0.85, true), &game, &defaults()));
        let exact = combo(vec![hit(10, 80.0), hit(13, 20.0)], true);
        assert!(!ExcludesLargeSingleHit.check(&exact, &game, &defaults()));
    }

    #[test]
    fn large_single_hit_passes_for_zero_damage() {
        let game = singles(Character::Fox, Character::Falco);
        assert!(ExcludesLargeSingleHit.check(&combo(vec![], true), &game, &defaults()));
        assert!(ExcludesLargeSingleHit.check(&combo(vec![hit(13, 0.0)], true), &game, &defaults()));
    }

    #[test]
    fn cpu_attacker_rejected_only_when_enabled() {
        let mut game = singles(Character::Fox, Character::Falco);
        let c = spread_combo(65.0, 0.5, true);
        assert!(ExcludesCpus.check(&c, &game, &defaults()));

        game.players[0].kind = PlayerKind::Cpu;
        assert!(!ExcludesCpus.check(&c, &game, &defaults()));

        let mut settings = defaults();
        settings.exclude_cpus = false;
        assert!(ExcludesCpus.check(&c, &game, &settings));
    }

    #[test]
    fn cpu_defender_does_not_matter() {
        let mut game = singles(Character::Fox, Character::Falco);
        game.players[1].kind = PlayerKind::Cpu;
        assert!(ExcludesCpus.check(&spread_combo(65.0, 0.5, true), &game, &defaults()));
    }

    #[test]
    fn one_vs_one_requires_exactly_two_players() {
        let c = spread_combo(65.0, 0.5, true);
        let mut game = singles(Character::Fox, Character::Falco);
        assert!(IsOneVsOne.check(&c, &game, &defaults()));

        game.players.push(player(2, Character::Roy, PlayerKind::Human, ""));
        assert!(!IsOneVsOne.check(&c, &game, &defaults()));

        assert!(!IsOneVsOne.check(&c, &GameStart::default(), &defaults()));
    }

    #[test]
    fn default_criteria_order_is_fixed() {
        let names: Vec<_> = default_criteria().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            [
                "matches_player_name",
                "excludes_chain_grabs",
                "excludes_wobbles",
                "satisfies_min_combo_percent",
                "excludes_large_single_hit",
                "excludes_cpus",
                "is_one_vs_one",
            ]
        );
    }
}
