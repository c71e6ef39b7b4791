use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A 2D point. Node positions refer to the node's center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Node label: mutable center position, size, and a pin flag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Node {
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Pinned nodes keep their position; layout algorithms must not move them.
    pub fixed: bool,
}

/// Undirected edge between two nodes, addressed by dense node index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    /// Per-edge override of the globally configured desired length.
    pub desired_length: Option<f64>,
}

/// Undirected graph with insertion-ordered nodes.
///
/// The dense index of a node is its position in insertion order and stays
/// stable for the lifetime of the graph; string ids resolve to indices
/// through a hash index.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    ids: Vec<String>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Inserts a node, or replaces the label of an existing one. Returns the
    /// node's dense index.
    pub fn set_node(&mut self, id: impl Into<String>, label: Node) -> usize {
        let id = id.into();
        if let Some(&v) = self.index.get(&id) {
            self.nodes[v] = label;
            return v;
        }
        let v = self.nodes.len();
        self.ids.push(id.clone());
        self.nodes.push(label);
        self.index.insert(id, v);
        v
    }

    /// Inserts a node with a default label unless the id already exists.
    /// Returns the node's dense index either way.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> usize {
        let id = id.into();
        if let Some(&v) = self.index.get(&id) {
            return v;
        }
        self.set_node(id, Node::default())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The id a dense index was assigned to.
    ///
    /// Panics if `v` is out of bounds, like slice indexing.
    pub fn id(&self, v: usize) -> &str {
        &self.ids[v]
    }

    /// Node label by dense index.
    ///
    /// Panics if `v` is out of bounds, like slice indexing.
    pub fn node(&self, v: usize) -> &Node {
        &self.nodes[v]
    }

    /// Mutable node label by dense index.
    ///
    /// Panics if `v` is out of bounds, like slice indexing.
    pub fn node_mut(&mut self, v: usize) -> &mut Node {
        &mut self.nodes[v]
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&v| &self.nodes[v])
    }

    pub fn node_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.index.get(id).copied().map(|v| &mut self.nodes[v])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }

    /// Inserts an edge between two ids, creating missing endpoints with
    /// default labels. Returns the edge index.
    pub fn set_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> usize {
        self.set_edge_full(source, target, None)
    }

    /// Like [`Graph::set_edge`], with a per-edge desired length override.
    pub fn set_edge_with_length(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        desired_length: f64,
    ) -> usize {
        self.set_edge_full(source, target, Some(desired_length))
    }

    fn set_edge_full(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        desired_length: Option<f64>,
    ) -> usize {
        let source = self.ensure_node(source);
        let target = self.ensure_node(target);
        let e = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            desired_length,
        });
        e
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// For each node, the indices of its incident edges (both directions).
    /// A self-loop appears twice in its node's list.
    pub fn incidence_lists(&self) -> Vec<Vec<usize>> {
        let mut incidence: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
        for (e, edge) in self.edges.iter().enumerate() {
            incidence[edge.source].push(e);
            incidence[edge.target].push(e);
        }
        incidence
    }
}
