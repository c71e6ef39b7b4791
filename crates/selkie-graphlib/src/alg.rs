//! Helper algorithms over the graph container.

use crate::Graph;
use std::collections::VecDeque;

/// Connected components of the graph, treating every edge as undirected.
///
/// Each component lists node indices in breadth-first discovery order
/// starting from the lowest unvisited index, so the output is stable for a
/// given insertion order. A graph without nodes yields no components; an
/// isolated node yields a component of one.
pub fn components(g: &Graph) -> Vec<Vec<usize>> {
    let n = g.node_count();
    let incidence = g.incidence_lists();
    let edges = g.edges();

    let mut visited = vec![false; n];
    let mut out: Vec<Vec<usize>> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut comp: Vec<usize> = Vec::new();

        while let Some(v) = queue.pop_front() {
            comp.push(v);
            for &e in &incidence[v] {
                let edge = &edges[e];
                let w = if edge.source == v {
                    edge.target
                } else {
                    edge.source
                };
                if !visited[w] {
                    visited[w] = true;
                    queue.push_back(w);
                }
            }
        }

        out.push(comp);
    }

    out
}

/// Whether every node pair is connected by some path. The empty graph is
/// connected by convention.
pub fn is_connected(g: &Graph) -> bool {
    components(g).len() <= 1
}
