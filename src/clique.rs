//! Exact-size clique enumeration.
//!
//! A depth-first branch-and-bound over forward neighbours: every clique is
//! built in ascending vertex order, so each vertex set is reached exactly once.
//! The search state lives on an explicit stack inside [`Cliques`], which makes
//! the enumeration lazy. Stop pulling from the iterator and the search stops.

use std::borrow::Borrow;

use rayon::iter::Either;
use rayon::prelude::*;

use crate::graph::DisjointGraph;

struct Frame {
    /// Vertices adjacent to every member of the partial clique, ascending.
    candidates: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn remaining(&self) -> &[usize] {
        &self.candidates[self.cursor..]
    }
}

/// Iterator over every clique of exactly `k` vertices.
///
/// Each clique is a `Vec` of vertex indices in ascending order. Cliques
/// contained in larger cliques are still reported. `G` is the graph or a
/// reference to it.
pub struct Cliques<G> {
    graph: G,
    k: usize,
    partial: Vec<usize>,
    stack: Vec<Frame>,
    /// Recycled candidate buffers.
    spare: Vec<Vec<usize>>,
    /// A clique known before any search, for `k == 0` and rooted `k == 1`.
    pending: Option<Vec<usize>>,
}

impl<G: Borrow<DisjointGraph>> Cliques<G> {
    /// All cliques of size `k`. For `k == 0` this is the single empty clique.
    pub fn new(graph: G, k: usize) -> Self {
        let m = graph.borrow().vertex_count();
        let mut cliques = Cliques::empty(graph, k);
        if k == 0 {
            cliques.pending = Some(Vec::new());
        } else if m >= k {
            cliques.stack.push(Frame {
                candidates: (0..m).collect(),
                cursor: 0,
            });
        }
        cliques
    }

    /// Cliques of size `k` whose smallest vertex is `root`.
    ///
    /// Taken over every root these partition the output of [`Cliques::new`]
    /// for `k >= 1`. Nothing is rooted at a vertex when `k == 0`.
    pub fn rooted(graph: G, k: usize, root: usize) -> Self {
        let m = graph.borrow().vertex_count();
        let mut cliques = Cliques::empty(graph, k);
        if k == 0 || root >= m {
            return cliques;
        }
        if k == 1 {
            cliques.pending = Some(vec![root]);
            return cliques;
        }
        cliques.partial.push(root);
        let candidates = cliques.graph.borrow().forward_neighbours(root).to_vec();
        cliques.stack.push(Frame {
            candidates,
            cursor: 0,
        });
        cliques
    }

    fn empty(graph: G, k: usize) -> Self {
        Cliques {
            graph,
            k,
            partial: Vec::with_capacity(k),
            stack: Vec::with_capacity(k),
            spare: Vec::new(),
            pending: None,
        }
    }

    /// Candidates for the next level after choosing `v`: those left in the
    /// current frame that are also forward neighbours of `v`.
    fn narrow(&mut self, v: usize) -> Vec<usize> {
        let mut out = self.spare.pop().unwrap_or_default();
        out.clear();
        let Some(frame) = self.stack.last() else {
            return out;
        };
        let mut left = frame.remaining().iter().copied().peekable();
        let mut right = self.graph.borrow().forward_neighbours(v).iter().copied().peekable();
        while let (Some(&a), Some(&b)) = (left.peek(), right.peek()) {
            match a.cmp(&b) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    out.push(a);
                    left.next();
                    right.next();
                }
            }
        }
        out
    }

    fn backtrack(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.spare.push(frame.candidates);
        }
        self.partial.pop();
    }

    fn is_clique(&self, members: &[usize]) -> bool {
        let graph = self.graph.borrow();
        members.len() == self.k
            && members
                .iter()
                .enumerate()
                .all(|(i, &a)| members[i + 1..].iter().all(|&b| a < b && graph.has_edge(a, b)))
    }
}

impl<G: Borrow<DisjointGraph>> Iterator for Cliques<G> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if let Some(clique) = self.pending.take() {
            return Some(clique);
        }
        loop {
            let frame = self.stack.last_mut()?;

            // Not enough candidates left to reach size k.
            if self.partial.len() + frame.remaining().len() < self.k {
                self.backtrack();
                continue;
            }

            let v = frame.candidates[frame.cursor];
            frame.cursor += 1;

            if self.partial.len() + 1 == self.k {
                let mut clique = self.partial.clone();
                clique.push(v);
                debug_assert!(self.is_clique(&clique));
                return Some(clique);
            }

            let candidates = self.narrow(v);
            self.partial.push(v);
            self.stack.push(Frame {
                candidates,
                cursor: 0,
            });
        }
    }
}

/// Parallel version of [`Cliques::new`], one task per smallest vertex.
///
/// Yields the same set of cliques; the order is not meaningful.
pub fn par_cliques(
    graph: &DisjointGraph,
    k: usize,
) -> impl ParallelIterator<Item = Vec<usize>> + '_ {
    if k == 0 {
        Either::Left(rayon::iter::once(Vec::new()))
    } else {
        Either::Right(
            (0..graph.vertex_count())
                .into_par_iter()
                .flat_map_iter(move |root| Cliques::rooted(graph, k, root)),
        )
    }
}
