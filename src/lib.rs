//! Sets of equal-length words that share no letter.
//!
//! The pipeline runs in four steps:
//!
//! 1. [`filter::candidate_corpus`] keeps words of length `n` with `n` distinct
//!    letters, one word per letter set.
//! 2. [`graph::DisjointGraph`] joins every pair of words with disjoint letters.
//! 3. [`clique::Cliques`] lazily enumerates every clique of exactly `k` words.
//! 4. [`emit`] numbers the cliques and writes them as JSON lines.
//!
//! [`SearchConfig::run`] strings these together.

pub mod clique;
pub mod config;
pub mod dot;
pub mod emit;
pub mod error;
pub mod filter;
pub mod graph;
pub mod letters;
pub mod source;

pub use clique::{par_cliques, Cliques};
pub use config::{RunSummary, SearchConfig};
pub use emit::{RecordWriter, Records, ResultRecord};
pub use error::{Error, Result};
pub use filter::{candidate_corpus, Corpus};
pub use graph::DisjointGraph;
pub use letters::{Alphabet, LetterSet};

/// Every set of `k` corpus words with pairwise disjoint letters, numbered in
/// the order found.
///
/// Records are produced on demand, so `.take(n)` stops the search early.
pub fn find_cliques(corpus: &Corpus, k: usize) -> Records<'_, Cliques<DisjointGraph>> {
    let graph = DisjointGraph::build(corpus);
    Records::new(corpus, Cliques::new(graph, k))
}
