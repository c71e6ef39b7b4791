//! Graph container APIs used by `selkie`.
//!
//! The container stores nodes in insertion order and addresses them both by
//! dense index (what the layout algorithms work with) and by string id (what
//! hosts work with). Edges always reference existing nodes; inserting an edge
//! for an unknown id creates the endpoint with a default label first.

mod graph;

pub mod alg;

pub use graph::{Edge, Graph, Node, Point};
