#![forbid(unsafe_code)]

//! Stress-majorization graph layout (Gansner-Koren-North).
//!
//! `selkie` computes 2D node coordinates whose Euclidean pairwise distances
//! track graph-theoretic shortest-path distances scaled by a desired edge
//! length. The input graph is split into connected components, each
//! component gets an all-pairs shortest-path matrix and an iterative
//! majorization solve, and the finished components are packed into one
//! non-overlapping drawing.
//!
//! The engine is a pure function from (graph, options) to node positions:
//! it neither renders nor persists anything, and it does not produce
//! initial coordinates — see [`InitialPlacement`].

pub use selkie_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod apsp;
pub mod components;
pub mod error;
mod options;
mod pipeline;
pub mod stress;

pub use error::{Error, Result};
pub use graphlib::{Edge, Graph, Node, Point};
pub use options::{Dimension, StressOptions};
pub use pipeline::{CancellationToken, InitialPlacement, NeverCanceled, layout, layout_with};
