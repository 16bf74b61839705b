//! Bulls & Bears - CLI
//!
//! Time-boxed five-letter word game with TUI and line modes, plus tools to
//! evaluate guesses, simulate players and summarize recorded games.

use anyhow::{Context, Result, bail};
use bulls_bears::{
    commands::{SimulationConfig, evaluate_words, load_player_stats, run_simple, run_simulation},
    core::Word,
    game::{GameConfig, MAX_ATTEMPTS, MAX_TIME, SessionManager},
    logging::{self, LogTarget},
    output::{print_evaluation, print_player_stats, print_simulation_report},
    sink::{JsonlSink, NullSink, PersistenceSink},
    source::BankWordSource,
    wordlists::{WORD_BANK, loader::words_from_slice},
};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Player id used by the interactive modes when none is given
const DEFAULT_PLAYER: &str = "player";

#[derive(Parser)]
#[command(
    name = "bulls_bears",
    about = "Guess the five-letter word in six tries before the clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Seconds allowed per game
    #[arg(long, global = true, default_value_t = MAX_TIME.as_secs())]
    max_time: u64,

    /// Target word list, one word per line (default: built-in bank)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Append guesses and results to this JSON-lines file
    #[arg(short, long, global = true)]
    record: Option<PathBuf>,

    /// Player id (play/simple), or the player to report (stats)
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the feedback for one guess against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Play many random games in parallel through one session manager
    Simulate {
        /// Number of simulated players
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the simulated players' guesses
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Player statistics from a recorded JSON-lines file
    Stats {
        /// File written with --record
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    let config = GameConfig::with_limits(cli.max_attempts, Duration::from_secs(cli.max_time));
    config.validate()?;

    match command {
        Commands::Evaluate { guess, target } => {
            let evaluation = evaluate_words(&guess, &target)?;
            print_evaluation(&evaluation);
            Ok(())
        }
        Commands::Stats { file } => {
            let stats = load_player_stats(&file, cli.player.as_deref())
                .with_context(|| format!("failed to read {}", file.display()))?;
            print_player_stats(&stats);
            Ok(())
        }
        Commands::Play => {
            let (manager, _) = build_manager(config, cli.words.as_ref(), cli.record.as_ref())?;
            run_play_command(&manager, cli.player.as_deref().unwrap_or(DEFAULT_PLAYER))
        }
        Commands::Simple => {
            let (manager, _) = build_manager(config, cli.words.as_ref(), cli.record.as_ref())?;
            run_simple(&manager, cli.player.as_deref().unwrap_or(DEFAULT_PLAYER))?;
            Ok(())
        }
        Commands::Simulate { count, seed } => {
            let (manager, words) = build_manager(config, cli.words.as_ref(), cli.record.as_ref())?;
            run_simulate_command(&manager, &words, count, seed);
            Ok(())
        }
    }
}

/// Load target words
///
/// Returns the built-in bank unless a custom list is given.
fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    use bulls_bears::wordlists::loader::load_from_file;

    let Some(path) = path else {
        return Ok(words_from_slice(WORD_BANK));
    };
    let words = load_from_file(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    if words.is_empty() {
        bail!("word list {} has no five-letter words", path.display());
    }
    tracing::info!(count = words.len(), path = %path.display(), "loaded word list");
    Ok(words)
}

/// Wire the session manager to its word source and record sink
///
/// Also returns the target words, which the simulator guesses from.
fn build_manager(
    config: GameConfig,
    words: Option<&PathBuf>,
    record: Option<&PathBuf>,
) -> Result<(SessionManager, Vec<Word>)> {
    let words = load_words(words)?;
    let sink: Arc<dyn PersistenceSink> = match record {
        Some(path) => Arc::new(
            JsonlSink::open(path)
                .with_context(|| format!("failed to open record file {}", path.display()))?,
        ),
        None => Arc::new(NullSink),
    };
    let source = Arc::new(BankWordSource::new(words.clone()));

    Ok((SessionManager::new(config, source, sink), words))
}

fn run_play_command(manager: &SessionManager, player_id: &str) -> Result<()> {
    use bulls_bears::interactive::{App, run_tui};

    let app = App::new(manager, player_id);
    run_tui(app)
}

fn run_simulate_command(manager: &SessionManager, words: &[Word], count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    println!("Simulating {count} players (seed {seed})...");

    let report = run_simulation(
        manager,
        words,
        &SimulationConfig {
            players: count,
            seed,
            show_progress: true,
        },
    );
    print_simulation_report(&report);
}
