//! Sanapeli - CLI
//!
//! Word game helper with TUI and CLI modes: subword search, word lookup and
//! difficulty-tiered random suggestions.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sanapeli::{
    catalog::loader::load_by_name,
    commands::{SubwordsConfig, SuggestConfig, find_sub_words, lookup_word, suggest_word},
    core::{CaseMode, MatchConfig},
    engine::{DEFAULT_TIER, DifficultyTable, Helper, SolutionOrder, SortKey},
    engine::lookup::DEFAULT_REFERENCE_BASE,
    output::{SubwordsView, print_lookup_result, print_subwords_result, print_suggest_result},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sanapeli",
    about = "Word game helper: find subwords, check words and draw words by difficulty",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a JSON catalog
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Compare words case-sensitively
    #[arg(long, global = true)]
    case_sensitive: bool,

    /// JSON file with difficulty ranges, easiest first
    #[arg(long, global = true)]
    tiers: Option<PathBuf>,

    /// Base URL for dictionary links
    #[arg(long, global = true, default_value = DEFAULT_REFERENCE_BASE)]
    reference_base: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the words that can be made from a word's letters
    Subwords {
        /// The word whose letters are available
        word: String,

        /// Sort by 'name' (default) or 'length'
        #[arg(short, long, default_value = "name")]
        sort: String,

        /// Reverse the sort direction
        #[arg(short, long)]
        reverse: bool,

        /// Only print how many subwords there are
        #[arg(short, long, conflicts_with = "meanings")]
        count_only: bool,

        /// Print each subword with its meanings
        #[arg(short, long)]
        meanings: bool,
    },

    /// Check whether a word is in the word list
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Draw a random word of a given difficulty
    Suggest {
        /// Difficulty tier, 0 (common words) to 4 (rare words)
        #[arg(short, long, default_value_t = DEFAULT_TIER)]
        difficulty: usize,

        /// Letters the word must contain
        #[arg(short, long, default_value = "")]
        letters: String,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sanapeli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// One generator per process; seeded from the OS unless a seed is given
fn session_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let catalog = load_by_name(&cli.wordlist)
        .with_context(|| format!("Failed to load word list '{}'", cli.wordlist))?;
    let tiers = match &cli.tiers {
        Some(path) => DifficultyTable::load_from_file(path)
            .with_context(|| format!("Failed to load difficulty table {}", path.display()))?,
        None => DifficultyTable::default(),
    };
    let case = if cli.case_sensitive {
        CaseMode::Sensitive
    } else {
        CaseMode::Insensitive
    };
    tracing::debug!(words = catalog.len(), ?case, tiers = tiers.len(), "configuration ready");

    let helper = Helper::with_tiers(&catalog, MatchConfig::new(case), tiers);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(helper, cli.reference_base, seed),
        Commands::Subwords {
            word,
            sort,
            reverse,
            count_only,
            meanings,
        } => {
            let view = if count_only {
                SubwordsView::Count
            } else if meanings {
                SubwordsView::Meanings
            } else {
                SubwordsView::Words
            };
            run_subwords_command(&helper, word, &sort, reverse, view)
        }
        Commands::Lookup { word } => {
            run_lookup_command(&helper, &word, &cli.reference_base);
            Ok(())
        }
        Commands::Suggest {
            difficulty,
            letters,
            seed,
        } => run_suggest_command(&helper, difficulty, letters, seed),
    }
}

fn run_subwords_command(
    helper: &Helper<'_>,
    word: String,
    sort: &str,
    reverse: bool,
    view: SubwordsView,
) -> Result<()> {
    let Some(key) = SortKey::from_name(sort) else {
        bail!("Unknown sort order '{sort}', expected 'name' or 'length'");
    };
    let config = SubwordsConfig {
        query: word,
        order: SolutionOrder::new(key, reverse),
    };
    let result = find_sub_words(helper, config)?;

    print_subwords_result(&result, view);
    Ok(())
}

fn run_lookup_command(helper: &Helper<'_>, word: &str, reference_base: &str) {
    let result = lookup_word(helper, word, reference_base);
    print_lookup_result(&result);
}

fn run_suggest_command(
    helper: &Helper<'_>,
    difficulty: usize,
    letters: String,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = session_rng(seed);
    let result = suggest_word(helper, SuggestConfig::new(difficulty, letters), &mut rng)?;

    print_suggest_result(&result);
    Ok(())
}

fn run_play_command(helper: Helper<'_>, reference_base: String, seed: Option<u64>) -> Result<()> {
    use sanapeli::interactive::{App, run_tui};

    let app = App::new(helper, reference_base, session_rng(seed));
    run_tui(app)
}
