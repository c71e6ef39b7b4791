//! All-pairs shortest paths within one component.

use crate::components::Component;
use crate::error::{Error, Result};
use nalgebra::DMatrix;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry, ordered so that [`BinaryHeap`] pops the smallest
/// tentative distance first.
#[derive(Debug, Clone, Copy)]
struct Visit {
    dist: f64,
    node: usize,
}

impl PartialEq for Visit {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.node == other.node
    }
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the dense shortest-path distance matrix of a component by
/// running Dijkstra once per source node.
///
/// Edge weights resolve at traversal time to the per-edge override, else
/// `desired_edge_length`. Instead of a decrease-key, improved nodes are
/// re-pushed and stale heap entries skipped on pop, `O((n + m) log n)` per
/// source.
///
/// Components of 0 or 1 nodes yield the trivial matrix. Unreachable node
/// pairs mean the component splitter's contract was violated and are
/// reported as [`Error::DisconnectedComponent`] rather than left as
/// infinities that would corrupt the downstream weight matrix.
pub fn all_pairs_shortest_paths(
    comp: &Component,
    desired_edge_length: f64,
) -> Result<DMatrix<f64>> {
    let n = comp.nodes.len();
    let mut dist = DMatrix::zeros(n, n);
    if n <= 1 {
        return Ok(dist);
    }

    let mut adjacency: Vec<Vec<(usize, Option<f64>)>> = vec![Vec::new(); n];
    for edge in &comp.edges {
        adjacency[edge.source].push((edge.target, edge.desired_length));
        adjacency[edge.target].push((edge.source, edge.desired_length));
    }

    let mut tentative: Vec<f64> = vec![f64::INFINITY; n];
    let mut heap: BinaryHeap<Visit> = BinaryHeap::new();

    for source in 0..n {
        tentative.fill(f64::INFINITY);
        tentative[source] = 0.0;
        heap.clear();
        heap.push(Visit {
            dist: 0.0,
            node: source,
        });
        let mut settled = 0usize;

        while let Some(Visit { dist: d, node: v }) = heap.pop() {
            if d > tentative[v] {
                continue; // stale entry, superseded by a later improvement
            }
            settled += 1;
            for &(w, override_len) in &adjacency[v] {
                let next = d + override_len.unwrap_or(desired_edge_length);
                if next < tentative[w] {
                    tentative[w] = next;
                    heap.push(Visit { dist: next, node: w });
                }
            }
        }

        if settled < n {
            let unreached = tentative
                .iter()
                .position(|d| !d.is_finite())
                .unwrap_or(source);
            return Err(Error::DisconnectedComponent {
                origin: source,
                unreached,
            });
        }

        for (v, &d) in tentative.iter().enumerate() {
            dist[(source, v)] = d;
        }
    }

    Ok(dist)
}
