//! The layout pipeline: validate, seed, split, solve per component, pack,
//! write back.

use crate::apsp;
use crate::components::{self, Component};
use crate::error::{Error, Result};
use crate::options::StressOptions;
use crate::stress::StressMajorization;
use selkie_graphlib::Graph;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag, polled once per majorization sweep.
///
/// Cancellation stops iterating and keeps the positions reached so far; the
/// iteration limit guarantees termination even for hosts that never cancel.
pub trait CancellationToken {
    fn is_canceled(&self) -> bool;
}

/// Token for hosts that never cancel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCanceled;

impl CancellationToken for NeverCanceled {
    fn is_canceled(&self) -> bool {
        false
    }
}

impl CancellationToken for AtomicBool {
    fn is_canceled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Initial-placement collaborator.
///
/// Stress majorization needs non-degenerate starting coordinates and does
/// not generate them itself; hosts plug a spring embedder or any other
/// seeding pass in here. Passing `None` to [`layout_with`] takes the input
/// positions as given, for interactive hosts whose graphs are already laid
/// out.
pub trait InitialPlacement {
    fn place(&self, graph: &mut Graph);
}

/// Lays out `graph` in place, assuming pre-seeded positions and no
/// cancellation.
pub fn layout(graph: &mut Graph, opts: &StressOptions) -> Result<()> {
    layout_with(graph, opts, None, &NeverCanceled)
}

/// Full-control variant of [`layout`]: optional seeding collaborator and a
/// host cancellation token.
pub fn layout_with(
    graph: &mut Graph,
    opts: &StressOptions,
    placement: Option<&dyn InitialPlacement>,
    cancel: &dyn CancellationToken,
) -> Result<()> {
    opts.validate()?;
    for (e, edge) in graph.edges().iter().enumerate() {
        if let Some(len) = edge.desired_length {
            if !(len > 0.0) || !len.is_finite() {
                return Err(Error::InvalidConfiguration {
                    reason: format!(
                        "desired length of edge {e} must be positive and finite, got {len}"
                    ),
                });
            }
        }
    }
    if opts.iteration_limit == 0 {
        tracing::warn!("iteration limit 0 clamped to 1");
    }

    if graph.is_empty() {
        return Ok(());
    }

    if let Some(placement) = placement {
        placement.place(graph);
    }

    let mut comps: Vec<Component> = if opts.separate_components {
        components::split(graph)
    } else {
        vec![components::whole(graph)]
    };
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        components = comps.len(),
        "stress layout start"
    );

    for comp in &mut comps {
        if comp.node_count() < 2 {
            continue;
        }
        let distances = apsp::all_pairs_shortest_paths(comp, opts.desired_edge_length)?;
        StressMajorization::new(comp, distances, opts).execute(cancel);
    }

    components::pack(&mut comps, opts);
    components::write_back(&comps, graph);

    Ok(())
}
