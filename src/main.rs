//! Word Scramble - CLI
//!
//! Word game with TUI and line-based modes, plus tools for inspecting root words.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{analyze_root, load_dictionary, load_word_list, run_simple, run_survey},
    core::{DEFAULT_LANGUAGE, Feasibility, Rules},
    game::Session,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_survey_statistics},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'bundled' (default) or path to a newline-separated file
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORD_SCRAMBLE_WORDLIST",
        default_value = "bundled"
    )]
    wordlist: String,

    /// Dictionary: 'bundled' (default, English) or path to a newline-separated file
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "WORD_SCRAMBLE_DICTIONARY",
        default_value = "bundled"
    )]
    dictionary: String,

    /// Language tag passed to the spell checker
    #[arg(
        short = 'l',
        long,
        global = true,
        env = "WORD_SCRAMBLE_LANGUAGE",
        default_value = DEFAULT_LANGUAGE
    )]
    language: String,

    /// Use each root letter at most as often as it appears in the root
    #[arg(long, global = true)]
    strict_letters: bool,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List every word a root word accepts and the maximum score
    Analyze {
        /// The root word to analyze
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Analyze every root in the word list
    Survey {
        /// Limit number of roots to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let rules = rules_from_cli(&cli);
    let dictionary = load_dictionary(&cli.dictionary, &rules.language)?;

    if !dictionary.speaks(&rules.language) {
        warn!(
            dictionary = dictionary.language(),
            language = %rules.language,
            "dictionary language does not match; every word will be rejected"
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = new_session(&cli.wordlist, cli.seed, dictionary, rules)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = new_session(&cli.wordlist, cli.seed, dictionary, rules)?;
            run_simple(&mut session)
        }
        Commands::Analyze { root, limit } => {
            let result = analyze_root(&root, &dictionary, &rules)?;
            print_analysis_result(&result, limit);
            Ok(())
        }
        Commands::Survey { limit } => {
            let words = load_word_list(&cli.wordlist, &mut std::io::stderr())?;
            let stats = run_survey(&words, &dictionary, &rules, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn rules_from_cli(cli: &Cli) -> Rules {
    let feasibility = if cli.strict_letters {
        Feasibility::Multiset
    } else {
        Feasibility::Letters
    };

    Rules::default()
        .with_feasibility(feasibility)
        .with_language(cli.language.clone())
}

fn new_session(
    wordlist: &str,
    seed: Option<u64>,
    dictionary: Dictionary,
    rules: Rules,
) -> Result<Session<Dictionary>> {
    let words = load_word_list(wordlist, &mut std::io::stderr())?;
    info!(roots = words.len(), dictionary = dictionary.len(), "sources loaded");

    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Ok(Session::new(words, dictionary, rules, rng))
}
