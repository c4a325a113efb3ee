//! The disjoint-letters graph over a corpus.
//!
//! Vertices are corpus indices. Two vertices are adjacent when their words
//! have no letter in common. Only forward edges (to a larger index) are
//! stored, which is all the clique search needs to avoid permutations.

use rayon::prelude::*;
use tracing::debug;

use crate::filter::Corpus;
use crate::letters::LetterSet;

/// Simple undirected graph, immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisjointGraph {
    /// `forward[i]` holds every `j > i` adjacent to `i`, ascending.
    forward: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DisjointGraph {
    pub fn build(corpus: &Corpus) -> Self {
        Self::from_letter_sets(corpus.letter_sets())
    }

    /// Same edge set as [`DisjointGraph::build`], rows computed on the rayon pool.
    pub fn build_parallel(corpus: &Corpus) -> Self {
        let sets = corpus.letter_sets();
        let forward = (0..sets.len())
            .into_par_iter()
            .map(|i| forward_row(sets, i))
            .collect();
        Self::from_rows(forward)
    }

    pub fn from_letter_sets(sets: &[LetterSet]) -> Self {
        let forward = (0..sets.len()).map(|i| forward_row(sets, i)).collect();
        Self::from_rows(forward)
    }

    /// Graph with the given edges over `vertex_count` vertices.
    ///
    /// Self-loops are ignored and duplicate edges collapse.
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut forward = vec![Vec::new(); vertex_count];
        for (a, b) in edges {
            assert!(
                a < vertex_count && b < vertex_count,
                "edge ({a}, {b}) out of range for {vertex_count} vertices"
            );
            if a == b {
                continue;
            }
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            forward[lo].push(hi);
        }
        for row in &mut forward {
            row.sort_unstable();
            row.dedup();
        }
        Self::from_rows(forward)
    }

    fn from_rows(forward: Vec<Vec<usize>>) -> Self {
        let edge_count = forward.iter().map(Vec::len).sum();
        debug!(vertices = forward.len(), edges = edge_count, "built disjointness graph");
        DisjointGraph {
            forward,
            edge_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.forward.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn forward_neighbours(&self, v: usize) -> &[usize] {
        &self.forward[v]
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        a != b
            && hi < self.vertex_count()
            && self.forward[lo].binary_search(&hi).is_ok()
    }

    /// Number of neighbours of `v` in either direction.
    pub fn degree(&self, v: usize) -> usize {
        let backward = (0..v).filter(|&u| self.has_edge(u, v)).count();
        backward + self.forward[v].len()
    }

    /// All edges as `(i, j)` with `i < j`, ordered by `i` then `j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&j| (i, j)))
    }
}

fn forward_row(sets: &[LetterSet], i: usize) -> Vec<usize> {
    let set = sets[i];
    (i + 1..sets.len())
        .filter(|&j| set.is_disjoint(sets[j]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::candidate_corpus;
    use crate::letters::Alphabet;
    use itertools::Itertools;

    fn corpus(words: &[&str]) -> Corpus {
        candidate_corpus(words.iter().copied(), words[0].len(), &Alphabet::english())
    }

    #[test]
    fn edges_join_disjoint_words() {
        let c = corpus(&["abcde", "fghij", "abfgh", "klmno"]);
        let g = DisjointGraph::build(&c);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(
            g.edges().collect_vec(),
            [(0, 1), (0, 3), (1, 3), (2, 3)]
        );
        assert_eq!(g.edge_count(), 4);
        assert!(g.has_edge(3, 2));
        assert!(!g.has_edge(0, 2));
        assert!(!g.has_edge(1, 1));
        assert!(!g.has_edge(0, 9));
        assert_eq!(g.degree(3), 3);
        assert_eq!(g.degree(2), 1);
    }

    #[test]
    fn overlapping_words_have_no_edge() {
        let c = corpus(&["abcde", "abfgh"]);
        let g = DisjointGraph::build(&c);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn empty_corpus_gives_empty_graph() {
        let g = DisjointGraph::build(&Corpus::default());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let c = corpus(&[
            "fjord", "gucks", "nymph", "vibex", "waltz", "quick", "brown", "jumps", "crwth",
            "vozhd", "glent", "prick", "waqfs",
        ]);
        assert_eq!(DisjointGraph::build(&c), DisjointGraph::build_parallel(&c));
    }

    #[test]
    fn from_edges_normalizes() {
        let g = DisjointGraph::from_edges(4, [(2, 0), (0, 2), (1, 1), (3, 1)]);
        assert_eq!(g.edges().collect_vec(), [(0, 2), (1, 3)]);
    }

    #[test]
    fn forward_rows_hold_full_vertex_indices() {
        let n = 70_000;
        let g = DisjointGraph::from_edges(n, [(0, n - 1), (1, 65_537)]);
        assert_eq!(g.forward_neighbours(0), [n - 1]);
        assert_eq!(g.forward_neighbours(1), [65_537]);
        assert!(g.has_edge(n - 1, 0));
        assert!(!g.has_edge(1, 1));
    }
}
