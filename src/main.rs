use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wordle_cliques::dot::{to_dot, EXAMPLE_WORDS};
use wordle_cliques::source::read_word_list;
use wordle_cliques::{candidate_corpus, Alphabet, DisjointGraph, SearchConfig};

/// Find sets of words that have no letter in common.
#[derive(Parser)]
#[command(name = "wordle-cliques", version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a word list and write every clique as a JSON line
    Solve {
        /// Word list, one word per line (plain text or brotli `.br`)
        #[arg(short, long, default_value = "words_alpha.txt")]
        words: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "cliques.jsonl")]
        output: PathBuf,

        /// Word length
        #[arg(short = 'n', long, default_value = "5")]
        length: usize,

        /// Words per clique (defaults to the word length)
        #[arg(short = 'k', long)]
        size: Option<usize>,

        /// Stop after this many cliques
        #[arg(short, long)]
        limit: Option<usize>,

        /// Letters words may use
        #[arg(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
        alphabet: String,

        /// Build the graph and search on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Write the disjointness graph of a few words as Graphviz DOT
    Plot {
        /// Output file
        #[arg(short, long, default_value = "cliques.dot")]
        output: PathBuf,

        /// Draw the first N words in red
        #[arg(long, default_value = "5")]
        highlight: usize,

        /// Words to plot (defaults to a nine-word example)
        words: Vec<String>,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install logger")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Solve {
            words,
            output,
            length,
            size,
            limit,
            alphabet,
            parallel,
        } => {
            let config = SearchConfig {
                word_len: length,
                clique_size: size.unwrap_or(length),
                limit,
                alphabet: Alphabet::new(&alphabet)?,
                parallel,
            };
            let lines = read_word_list(&words)?;
            let out = File::create(&output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            let (summary, _) = config
                .run(lines, out)
                .with_context(|| format!("failed writing {}", output.display()))?;
            info!(
                words = summary.corpus_size,
                edges = summary.edge_count,
                cliques = summary.records,
                output = %output.display(),
                "done"
            );
            println!("{}", summary.records);
        }
        Commands::Plot {
            output,
            highlight,
            words,
        } => {
            let words = if words.is_empty() {
                EXAMPLE_WORDS.iter().map(|w| w.to_string()).collect()
            } else {
                words
            };
            let word_len = words[0].chars().count();
            let corpus = candidate_corpus(&words, word_len, &Alphabet::english());
            let graph = DisjointGraph::build(&corpus);
            let highlight: Vec<usize> = (0..highlight.min(corpus.len())).collect();
            std::fs::write(&output, to_dot(&corpus, &graph, &highlight))
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                output = %output.display(),
                "wrote graph"
            );
        }
    }
    Ok(())
}
