use clap::{Parser, Subcommand};
use slipreel_cli::commands::{self, FilterOverrides};
use slipreel_cli::{CliContext, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Pick highlight-worthy combos out of replay combo files")]
struct Cli {
    /// Filter settings file (defaults to the user config file if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging for slipreel crates
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Also append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the combos in a combo file that pass the filter
    Filter {
        path: PathBuf,
        /// Print every combo with the reason it was kept or dropped
        #[arg(long)]
        explain: bool,
        #[command(flatten)]
        overrides: FilterOverrides,
    },
    /// Print the effective filter settings as TOML
    Settings {
        #[command(flatten)]
        overrides: FilterOverrides,
    },
    /// List the character roster with chain grab and minimum percent notes
    Characters,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref());

    let ctx = CliContext::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Filter {
            path,
            explain,
            overrides,
        } => commands::filter(path, *explain, &ctx.with_overrides(overrides.to_patch())),
        Commands::Settings { overrides } => {
            commands::show_settings(&ctx.with_overrides(overrides.to_patch()))
        }
        Commands::Characters => commands::list_characters(&ctx),
    }
}
