//! Splitting the input graph into connected components and packing the
//! laid-out components back into one drawing.

use crate::options::StressOptions;
use rustc_hash::FxHashMap;
use selkie_graphlib::{Edge, Graph, Node, alg};

/// A renumbered subgraph extracted from the input graph.
///
/// Node indices are dense `0..n` locals; `original` maps them back to input
/// graph indices so results can be written to the right nodes. Components
/// produced by [`split`] are internally connected; that connectivity is what
/// makes the downstream solvers well-defined.
#[derive(Debug, Clone)]
pub struct Component {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub original: Vec<usize>,
}

impl Component {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Splits the graph into its weakly connected components, renumbering nodes
/// to dense local indices. No node or edge is duplicated or dropped; output
/// order follows node insertion order.
pub fn split(graph: &Graph) -> Vec<Component> {
    let mut out: Vec<Component> = Vec::new();
    // input index -> (component, local index)
    let mut local: FxHashMap<usize, (usize, usize)> = FxHashMap::default();

    for (c, members) in alg::components(graph).into_iter().enumerate() {
        let mut nodes = Vec::with_capacity(members.len());
        for (l, &v) in members.iter().enumerate() {
            local.insert(v, (c, l));
            nodes.push(*graph.node(v));
        }
        out.push(Component {
            nodes,
            edges: Vec::new(),
            original: members,
        });
    }

    for edge in graph.edges() {
        let (c, source) = local[&edge.source];
        // Both endpoints share a component by construction of the scan.
        let (_, target) = local[&edge.target];
        out[c].edges.push(Edge {
            source,
            target,
            desired_length: edge.desired_length,
        });
    }

    out
}

/// Wraps the whole graph in a single pseudo-component without a
/// connectivity check. A disconnected input surfaces later, from the
/// shortest-path solver.
pub fn whole(graph: &Graph) -> Component {
    Component {
        nodes: graph.nodes().to_vec(),
        edges: graph.edges().to_vec(),
        original: (0..graph.node_count()).collect(),
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

fn bounds(comp: &Component) -> Bounds {
    let mut b = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    for node in &comp.nodes {
        // node positions refer to the center
        b.min_x = b.min_x.min(node.position.x - node.width / 2.0);
        b.min_y = b.min_y.min(node.position.y - node.height / 2.0);
        b.max_x = b.max_x.max(node.position.x + node.width / 2.0);
        b.max_y = b.max_y.max(node.position.y + node.height / 2.0);
    }
    b
}

/// Packs the laid-out components into one drawing without overlap.
///
/// Row-filling placement: components go row by row in bounding-box-area
/// order, rows capped at `max(widest box, sqrt(total area) * aspect_ratio)`
/// and boxes separated by `component_spacing`. Translation moves whole
/// components, pinned nodes included; a single component is left untouched.
pub fn pack(components: &mut [Component], opts: &StressOptions) {
    if components.len() <= 1 {
        return;
    }

    let boxes: Vec<Bounds> = components.iter().map(bounds).collect();
    let mut order: Vec<usize> = (0..components.len()).collect();
    order.sort_by(|&a, &b| boxes[a].area().total_cmp(&boxes[b].area()));

    let mut max_row_width = 0.0f64;
    let mut total_area = 0.0f64;
    for b in &boxes {
        max_row_width = max_row_width.max(b.width());
        total_area += b.area();
    }
    max_row_width = max_row_width.max(total_area.sqrt() * opts.aspect_ratio);
    let spacing = opts.component_spacing;

    let mut xpos = 0.0f64;
    let mut ypos = 0.0f64;
    let mut highest_box = 0.0f64;
    for &c in &order {
        let b = boxes[c];
        if xpos + b.width() > max_row_width {
            // next row
            xpos = 0.0;
            ypos += highest_box + spacing;
            highest_box = 0.0;
        }
        let dx = xpos - b.min_x;
        let dy = ypos - b.min_y;
        for node in &mut components[c].nodes {
            node.position.x += dx;
            node.position.y += dy;
        }
        highest_box = highest_box.max(b.height());
        xpos += b.width() + spacing;
    }
}

/// Writes component node positions back to the input graph through the
/// `original` mapping.
pub fn write_back(components: &[Component], graph: &mut Graph) {
    for comp in components {
        for (l, &v) in comp.original.iter().enumerate() {
            graph.node_mut(v).position = comp.nodes[l].position;
        }
    }
}
