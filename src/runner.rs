use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::agent::Agent;
use crate::config::MeetupConfig;
use crate::error::MeetupError;
use crate::listing::{load_listing, sample_listing};
use crate::log::{apply_log_levels, LevelFilter, LogLevels};
use crate::meetup::{meetup_round, RoundSummary};
use crate::report::write_listing_file;
use crate::{info, trace};

/// Command line arguments for the meetup runner
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "meetup", version, about = "Run one round of pairwise agent meetings")]
pub struct RunnerArgs {
    /// Agent listing to read (.csv or .json). Defaults to a built-in sample listing
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Optional path of a CSV file to write the resulting listing to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Optional path for a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable logging: a level (`info`) and/or comma-separated `module=level` entries
    #[arg(long)]
    pub log_level: Option<String>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the resulting listing
    #[arg(short, long)]
    pub quiet: bool,
}

impl RunnerArgs {
    /// Fills in anything not given on the command line from `config`.
    fn merge(mut self, config: MeetupConfig) -> RunnerArgs {
        self.input = self.input.or(config.input);
        self.output = self.output.or(config.output);
        self.overwrite |= config.overwrite;
        self.log_level = self.log_level.or(config.log_level);
        self
    }
}

fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn configure_logging(args: &RunnerArgs) -> Result<(), MeetupError> {
    let mut levels = match &args.log_level {
        Some(spec) => spec.parse::<LogLevels>()?,
        None => LogLevels::default(),
    };
    if let Some(level) = verbosity_level(args.verbose) {
        levels.global = Some(levels.global.map_or(level, |global| global.max(level)));
    }
    if levels.global.is_none() && levels.modules.is_empty() {
        return Ok(());
    }
    apply_log_levels(&levels);
    for (module, level) in &levels.modules {
        info!("Logging enabled for {} at level {}", module, level);
    }
    if let Some(level) = levels.global {
        info!("Logging enabled at level {}", level);
    }
    Ok(())
}

/// Writes each agent as `(name, CATEGORY)` on its own line.
///
/// # Errors
///
/// Propagates write errors.
pub fn print_listing<W: Write>(mut writer: W, agents: &[Agent]) -> Result<(), MeetupError> {
    for agent in agents {
        writeln!(writer, "{agent}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Runs one round as described by `args`.
///
/// # Errors
///
/// Returns an error if the config file, the input listing, or the output file cannot be
/// processed.
pub fn run(args: RunnerArgs) -> Result<RoundSummary, MeetupError> {
    let args = match args.config.clone() {
        Some(path) => {
            let config = MeetupConfig::load(&path)?;
            args.merge(config)
        }
        None => args,
    };
    configure_logging(&args)?;
    trace!("Runner arguments: {:?}", args);

    let agents = match &args.input {
        Some(path) => load_listing(path)?,
        None => {
            info!("No input listing given; using the sample listing");
            sample_listing()
        }
    };

    let summary = meetup_round(&agents)?;
    info!(
        "Round complete: {} agents, {} cured pairs, {} worsened pairs",
        summary.agents.len(),
        summary.cured_pairs,
        summary.worsened_pairs
    );

    if let Some(path) = &args.output {
        write_listing_file(path, &summary.agents, args.overwrite)?;
        info!("Wrote resulting listing to {}", path.display());
    }

    if !args.quiet {
        print_listing(io::stdout().lock(), &summary.agents)?;
    }
    Ok(summary)
}

/// Parses the process command line and runs one round.
///
/// # Errors
///
/// See [`run`]. Invalid arguments make clap print usage and exit the process.
pub fn run_with_args() -> Result<RoundSummary, MeetupError> {
    run(RunnerArgs::parse())
}
