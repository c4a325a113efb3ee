//! Graphviz rendering of small disjointness graphs.

use std::fmt::Write;

use crate::filter::Corpus;
use crate::graph::DisjointGraph;

/// The nine words used to illustrate one five-word clique among near misses.
pub const EXAMPLE_WORDS: [&str; 9] = [
    "burps", "fldxt", "mckay", "vejoz", "whing", "track", "barge", "stink", "wreck",
];

/// DOT source for `graph`, labelled with `corpus` words.
///
/// Vertices listed in `highlight` are drawn red, the rest black. Render with
/// e.g. `neato -Tpng`.
pub fn to_dot(corpus: &Corpus, graph: &DisjointGraph, highlight: &[usize]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "graph disjoint {{");
    let _ = writeln!(out, "  node [shape=point, width=0.1];");
    for (v, word) in corpus.words().iter().enumerate() {
        let color = if highlight.contains(&v) { "red" } else { "black" };
        let _ = writeln!(out, "  {v} [xlabel={word:?}, color={color}];");
    }
    for (a, b) in graph.edges() {
        let _ = writeln!(out, "  {a} -- {b};");
    }
    out.push_str("}\n");
    out
}
