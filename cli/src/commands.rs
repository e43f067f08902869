use anyhow::Context;
use clap::Args;
use slipreel_core::config::{self, FilterSettingsPatch};
use slipreel_core::game_data::{move_name, move_short_name};
use slipreel_core::{Character, Combo, ComboFile, GameStart, Verdict};
use std::io::Write;
use std::path::Path;

use crate::CliContext;

/// Filter flags that override the settings file
#[derive(Debug, Clone, Default, Args)]
pub struct FilterOverrides {
    /// Minimum total percent for every character without an override
    #[arg(long)]
    pub min_percent: Option<f32>,
    /// Only keep combos involving this name tag (repeatable)
    #[arg(long = "name-tag")]
    pub name_tags: Vec<String>,
    /// Keep combos performed by CPUs
    #[arg(long)]
    pub include_cpus: bool,
    /// Keep chain grabs
    #[arg(long)]
    pub allow_chain_grabs: bool,
    /// Keep wobbles
    #[arg(long)]
    pub allow_wobbles: bool,
}

impl FilterOverrides {
    /// Only flags the user actually passed end up in the patch
    pub fn to_patch(&self) -> FilterSettingsPatch {
        FilterSettingsPatch {
            min_combo_percent: self.min_percent,
            name_tags: (!self.name_tags.is_empty()).then(|| self.name_tags.clone()),
            exclude_cpus: self.include_cpus.then_some(false),
            exclude_chain_grabs: self.allow_chain_grabs.then_some(false),
            exclude_wobbles: self.allow_wobbles.then_some(false),
            ..Default::default()
        }
    }
}

pub fn filter(path: &Path, explain: bool, ctx: &CliContext) -> anyhow::Result<()> {
    let file = ComboFile::load(path).with_context(|| format!("loading {}", path.display()))?;
    let filter = ctx.combo_filter();
    let mut out = std::io::stdout().lock();

    let mut accepted = 0;
    for combo in &file.combos {
        let verdict = filter.evaluate(combo, &file.game_start);
        if verdict.is_accepted() {
            accepted += 1;
        } else {
            tracing::debug!(
                start_frame = combo.start_frame,
                finisher = combo.moves.last().map(|m| move_name(m.move_id)),
                %verdict,
                "Combo rejected"
            );
        }
        if verdict.is_accepted() || explain {
            writeln!(out, "{}", describe_combo(combo, &file.game_start, verdict))?;
        }
    }

    writeln!(out, "{accepted}/{} combos kept", file.combos.len())?;
    tracing::info!(
        path = %path.display(),
        accepted,
        total = file.combos.len(),
        "Filtered combo file"
    );
    Ok(())
}

pub fn show_settings(ctx: &CliContext) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match &ctx.config_path {
        Some(path) => writeln!(out, "# settings file: {}", path.display())?,
        None => writeln!(out, "# settings file: none (defaults)")?,
    }
    write!(out, "{}", config::settings_to_toml(&ctx.settings())?)?;
    Ok(())
}

pub fn list_characters(ctx: &CliContext) -> anyhow::Result<()> {
    let settings = ctx.settings();
    let mut out = std::io::stdout().lock();
    for character in Character::ALL {
        let mut notes = Vec::new();
        if settings.chain_grabbers.contains(&character) {
            notes.push("chain grabber".to_string());
        }
        if let Some(min) = settings.per_character_min_combo_percent.get(&character) {
            notes.push(format!("min {min}%"));
        }
        writeln!(
            out,
            "{:>2}  {:<18} {:<8} {}",
            character.id(),
            character.name(),
            character.short_name(),
            notes.join(", ")
        )?;
    }
    Ok(())
}

/// One-line summary of a combo and its verdict
pub fn describe_combo(combo: &Combo, game: &GameStart, verdict: Verdict) -> String {
    let name_of = |index: u8| {
        game.character_of(index)
            .map_or_else(|| format!("P{}", u16::from(index) + 1), |c| c.short_name().to_string())
    };
    let frames = match combo.end_frame {
        Some(end) => format!("{}-{}", combo.start_frame, end),
        None => format!("{}-", combo.start_frame),
    };
    let finisher = combo.moves.last().map_or("-", |m| move_short_name(m.move_id));
    format!(
        "[{frames}] {} -> {}  {:.1}%  {} moves  ends {finisher}  {verdict}",
        name_of(combo.attacker_index),
        name_of(combo.defender_index),
        combo.total_damage(),
        combo.move_count(),
    )
}
