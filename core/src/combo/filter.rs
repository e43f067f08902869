//! Combo classification entrypoint.

use std::sync::Arc;

use slipreel_types::{FilterSettings, FilterSettingsPatch};

use super::criteria::{Criterion, default_criteria};
use super::{Combo, GameStart};

/// Outcome of evaluating a combo against the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// The named criterion failed. Criteria after it were not evaluated.
    Rejected { criterion: &'static str },
    /// Every criterion passed but the combo did not end in a kill
    NoKill,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("accepted"),
            Verdict::Rejected { criterion } => write!(f, "rejected by {criterion}"),
            Verdict::NoKill => f.write_str("rejected: no kill"),
        }
    }
}

/// Ordered criterion chain plus the settings it is evaluated against.
///
/// Settings changes need `&mut self` and swap in a freshly merged value;
/// snapshots returned by [`ComboFilter::settings`] are never touched again.
/// Share a filter between threads behind a `RwLock`.
pub struct ComboFilter {
    settings: Arc<FilterSettings>,
    criteria: Vec<Box<dyn Criterion>>,
}

impl Default for ComboFilter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for ComboFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboFilter")
            .field("settings", &self.settings)
            .field("criteria", &self.criterion_names())
            .finish()
    }
}

impl ComboFilter {
    /// Filter with the stock criteria and default settings overlaid by `patch`.
    pub fn new(patch: Option<FilterSettingsPatch>) -> Self {
        Self::with_criteria(patch, default_criteria())
    }

    /// Filter evaluating a caller-supplied criterion list, in the given order.
    pub fn with_criteria(
        patch: Option<FilterSettingsPatch>,
        criteria: Vec<Box<dyn Criterion>>,
    ) -> Self {
        let settings = match patch {
            Some(patch) => FilterSettings::default().merged(&patch),
            None => FilterSettings::default(),
        };
        Self {
            settings: Arc::new(settings),
            criteria,
        }
    }

    /// Merge `patch` over the current settings. Values are not validated.
    pub fn update_settings(&mut self, patch: &FilterSettingsPatch) {
        self.settings = Arc::new(self.settings.merged(patch));
        tracing::debug!(settings = ?self.settings, "Combo filter settings updated");
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Arc<FilterSettings> {
        Arc::clone(&self.settings)
    }

    /// Drop every override and return to the default settings
    pub fn reset_settings(&mut self) {
        self.settings = Arc::new(FilterSettings::default());
        tracing::debug!("Combo filter settings reset to defaults");
    }

    pub fn criterion_names(&self) -> Vec<&'static str> {
        self.criteria.iter().map(|c| c.name()).collect()
    }

    /// Run the criterion chain, stopping at the first failure.
    pub fn evaluate(&self, combo: &Combo, game: &GameStart) -> Verdict {
        for criterion in &self.criteria {
            if !criterion.check(combo, game, &self.settings) {
                tracing::trace!(
                    criterion = criterion.name(),
                    attacker = combo.attacker_index,
                    start_frame = combo.start_frame,
                    "Combo rejected"
                );
                return Verdict::Rejected {
                    criterion: criterion.name(),
                };
            }
        }

        if combo.did_kill {
            Verdict::Accepted
        } else {
            Verdict::NoKill
        }
    }

    /// True if every criterion passes and the combo ended in a kill.
    pub fn is_combo(&self, combo: &Combo, game: &GameStart) -> bool {
        self.evaluate(combo, game).is_accepted()
    }

    /// Keep only the combos that pass [`ComboFilter::is_combo`], in order.
    pub fn filter_combos<'a>(&self, combos: &'a [Combo], game: &GameStart) -> Vec<&'a Combo> {
        let accepted: Vec<_> = combos.iter().filter(|c| self.is_combo(c, game)).collect();
        tracing::debug!(
            total = combos.len(),
            accepted = accepted.len(),
            "Filtered combos"
        );
        accepted
    }
}
