use clap::{CommandFactory, Parser};
use meowpass_catnames::CatNames;
use meowpass_cli_helpers::{messages::success, CommandTree};
use meowpass_password::{
    rand::{rngs::StdRng, Rng, SeedableRng},
    time_seed, Config, Generator, Selection, WordList, DEFAULT_MAX_LENGTH,
    DEFAULT_SYMBOLS,
};
use serde::Serialize;
use std::io::Write;

use crate::{
    helpers::{clipboard, display},
    Error, Result, TARGET,
};

/// Range of the digit count chosen when none is given.
const RANDOM_DIGITS: std::ops::RangeInclusive<i64> = 1..=4;

/// Generate memorable passwords from cat names.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Meowpass {
    /// Number of random numbers to insert (1-10, default: random 1-4).
    #[clap(
        long,
        env = "MEOWPASS_NUMBERS",
        allow_negative_numbers = true
    )]
    pub numbers: Option<i64>,

    /// Number of letters replaced with symbols (1-10).
    #[clap(
        long,
        env = "MEOWPASS_SYMBOLS",
        default_value_t = DEFAULT_SYMBOLS as i64,
        allow_negative_numbers = true
    )]
    pub symbols: i64,

    /// Maximum password length (15-50).
    #[clap(
        long,
        env = "MEOWPASS_MAX_LENGTH",
        default_value_t = DEFAULT_MAX_LENGTH as i64,
        allow_negative_numbers = true
    )]
    pub max_length: i64,

    /// Copy the selected password to the clipboard.
    #[clap(long)]
    pub copy: bool,

    /// Copy the selected password to the clipboard without
    /// printing the candidates.
    #[clap(long, conflicts_with = "json")]
    pub psssst: bool,

    /// Print the candidates and selection as JSON.
    #[clap(long)]
    pub json: bool,

    /// Seed for reproducible output.
    #[clap(long, hide = true)]
    pub seed: Option<u64>,
}

impl Meowpass {
    /// Build the configuration clamping each value into range.
    ///
    /// When no digit count was given a random count is drawn.
    pub fn config<R: Rng + ?Sized>(&self, rng: &mut R) -> Config {
        let numbers = self
            .numbers
            .unwrap_or_else(|| rng.gen_range(RANDOM_DIGITS));
        Config::clamped(numbers, self.symbols, self.max_length)
    }
}

/// Configuration and candidates printed in JSON mode.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a Config,
    selection: &'a Selection,
}

/// Parse arguments and run the generator.
pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("MEOWPASS_CLI_JSON").ok().is_some() {
        let cmd = Meowpass::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        return Ok(());
    }

    let args = Meowpass::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let selection = execute(&args, CatNames::builtin(), &mut out)?;

    if args.psssst {
        clipboard::copy(&selection.best().text)?;
        writeln!(out, "----> copied!")?;
    } else if args.copy {
        clipboard::copy(&selection.best().text)?;
        if !args.json {
            writeln!(out)?;
            success("Password copied to clipboard!");
        }
    } else if !args.json {
        writeln!(out)?;
        writeln!(
            out,
            "Use 'meowpass --copy' to copy password to clipboard"
        )?;
    }

    Ok(())
}

/// Log a failed run.
pub fn report(error: &Error) {
    tracing::error!(target: TARGET, "{}", error);
}

/// Generate and print a selection of candidates.
///
/// Nothing is printed in silent mode.
pub fn execute<L, W>(
    args: &Meowpass,
    list: &L,
    out: &mut W,
) -> Result<Selection>
where
    L: WordList + ?Sized,
    W: Write,
{
    let seed = args.seed.unwrap_or_else(time_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let config = args.config(&mut rng);
    tracing::debug!(
        target: TARGET,
        digits = config.digits(),
        symbols = config.symbols(),
        max_length = config.max_length(),
        "meowpass::config"
    );

    let mut generator = Generator::from_rng(config, rng);
    let selection = generator.select(list)?;

    if args.json {
        let report = Report {
            config: &config,
            selection: &selection,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if !args.psssst {
        display::header(out)?;
        display::summary(out, list.count(), &config)?;
        for (index, candidate) in selection.candidates().iter().enumerate() {
            display::candidate(out, index + 1, candidate)?;
        }
        display::final_selection(out, selection.best())?;
    }

    Ok(selection)
}
