//! Search parameters and the end-to-end pipeline.

use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::clique::{par_cliques, Cliques};
use crate::emit::{RecordWriter, Records};
use crate::error::Result;
use crate::filter::{candidate_corpus, Corpus};
use crate::graph::DisjointGraph;
use crate::letters::Alphabet;

/// Cliques that may wait between the search threads and the writer.
const PARALLEL_BACKLOG: usize = 1024;

#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Length of every word, `n`.
    pub word_len: usize,
    /// Words per clique, `k`.
    pub clique_size: usize,
    /// Stop after this many records.
    pub limit: Option<usize>,
    pub alphabet: Alphabet,
    /// Build the graph and search on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            word_len: 5,
            clique_size: 5,
            limit: None,
            alphabet: Alphabet::english(),
            parallel: false,
        }
    }
}

/// What a pipeline run saw and produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub corpus_size: usize,
    pub edge_count: usize,
    pub records: usize,
}

impl SearchConfig {
    /// Why this configuration cannot produce any clique, if it cannot.
    pub fn degenerate_reason(&self, corpus_size: usize) -> Option<String> {
        if self.word_len == 0 {
            Some("word length is zero".into())
        } else if self.clique_size == 0 {
            Some("clique size is zero".into())
        } else if self.clique_size > corpus_size {
            Some(format!(
                "clique size {} exceeds corpus of {corpus_size} words",
                self.clique_size
            ))
        } else if self.limit == Some(0) {
            Some("result limit is zero".into())
        } else {
            None
        }
    }

    pub fn corpus<I, S>(&self, lines: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidate_corpus(lines, self.word_len, &self.alphabet)
    }

    /// Filter `lines`, search, and write every record to `out`.
    ///
    /// A degenerate configuration writes nothing and is not an error.
    pub fn run<I, S, W>(&self, lines: I, out: W) -> Result<(RunSummary, W)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let start = Instant::now();
        let mut writer = RecordWriter::new(out);

        let corpus = self.corpus(lines);
        let mut summary = RunSummary {
            corpus_size: corpus.len(),
            ..RunSummary::default()
        };
        info!(words = corpus.len(), n = self.word_len, "candidate corpus ready");

        if let Some(reason) = self.degenerate_reason(corpus.len()) {
            warn!(%reason, "nothing to search");
            return Ok((summary, writer.finish()?));
        }

        let graph = if self.parallel {
            DisjointGraph::build_parallel(&corpus)
        } else {
            DisjointGraph::build(&corpus)
        };
        summary.edge_count = graph.edge_count();
        info!(edges = graph.edge_count(), "graph ready");

        summary.records = if self.parallel {
            self.write_parallel(&graph, &corpus, &mut writer)?
        } else {
            let cliques = Cliques::new(&graph, self.clique_size);
            writer.write_all(Records::new(&corpus, cliques), self.limit)?
        };

        let out = writer.finish()?;
        info!(
            records = summary.records,
            elapsed = ?start.elapsed(),
            "search finished"
        );
        Ok((summary, out))
    }

    /// Search on the rayon pool while this thread writes.
    ///
    /// Cliques pass through a bounded channel and are numbered as they
    /// arrive. Once the writer stops, at the limit or on an error, the
    /// channel closes and every search branch stops at its next send.
    fn write_parallel<W: Write>(
        &self,
        graph: &DisjointGraph,
        corpus: &Corpus,
        writer: &mut RecordWriter<W>,
    ) -> Result<usize> {
        let k = self.clique_size;
        let (sender, receiver) = mpsc::sync_channel(PARALLEL_BACKLOG);
        thread::scope(|scope| {
            scope.spawn(move || {
                let sent = par_cliques(graph, k)
                    .try_for_each_with(sender, |sender, clique| sender.send(clique));
                if sent.is_err() {
                    debug!("writer hung up, search stopped early");
                }
            });
            writer.write_all(Records::new(corpus, receiver.into_iter()), self.limit)
        })
    }
}
