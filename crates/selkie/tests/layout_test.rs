use selkie::{
    Dimension, Error, Graph, InitialPlacement, Node, Point, StressOptions, layout, layout_with,
};
use std::sync::atomic::AtomicBool;

/// Deterministic stand-in for the external seeding pass.
struct Spiral;

impl InitialPlacement for Spiral {
    fn place(&self, graph: &mut Graph) {
        for v in 0..graph.node_count() {
            let a = 2.4 * v as f64;
            let r = 30.0 * ((v + 1) as f64).sqrt();
            graph.node_mut(v).position = Point::new(r * a.cos(), r * a.sin());
        }
    }
}

fn dist(g: &Graph, a: &str, b: &str) -> f64 {
    g.node_by_id(a)
        .unwrap()
        .position
        .distance(g.node_by_id(b).unwrap().position)
}

fn tight() -> StressOptions {
    StressOptions {
        epsilon: 1e-10,
        iteration_limit: 5000,
        ..Default::default()
    }
}

#[test]
fn path_graph_converges_to_collinear_distances() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    g.node_by_id_mut("a").unwrap().position = Point::new(0.0, 0.0);
    g.node_by_id_mut("b").unwrap().position = Point::new(1.2, 0.15);
    g.node_by_id_mut("c").unwrap().position = Point::new(2.3, -0.1);

    let opts = StressOptions {
        desired_edge_length: 1.0,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();

    assert!((dist(&g, "a", "b") - 1.0).abs() < 1e-2);
    assert!((dist(&g, "b", "c") - 1.0).abs() < 1e-2);
    assert!((dist(&g, "a", "c") - 2.0).abs() < 1e-2);
}

#[test]
fn four_cycle_converges_to_a_square() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    g.set_edge("c", "d");
    g.set_edge("d", "a");
    g.node_by_id_mut("a").unwrap().position = Point::new(0.0, 0.0);
    g.node_by_id_mut("b").unwrap().position = Point::new(55.0, 4.0);
    g.node_by_id_mut("c").unwrap().position = Point::new(52.0, 57.0);
    g.node_by_id_mut("d").unwrap().position = Point::new(-4.0, 52.0);

    let opts = StressOptions {
        desired_edge_length: 50.0,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();

    let adjacent = [
        dist(&g, "a", "b"),
        dist(&g, "b", "c"),
        dist(&g, "c", "d"),
        dist(&g, "d", "a"),
    ];
    let diagonals = [dist(&g, "a", "c"), dist(&g, "b", "d")];

    // The stress optimum trades the four side terms against the two diagonal
    // terms, so sides settle a bit above the desired length.
    for side in adjacent {
        assert!((side - 50.0).abs() < 10.0, "side {side} strays from 50");
    }
    for pair in adjacent.windows(2) {
        assert!((pair[0] - pair[1]).abs() < 1.0);
    }
    assert!((diagonals[0] - diagonals[1]).abs() < 1.0);

    let longest_side = adjacent.iter().cloned().fold(0.0f64, f64::max);
    for diag in diagonals {
        assert!(diag > longest_side + 5.0, "diagonal {diag} not clearly longer");
    }
}

#[test]
fn empty_graph_is_a_no_op() {
    let mut g = Graph::new();
    layout(&mut g, &StressOptions::default()).unwrap();
    assert!(g.is_empty());
}

#[test]
fn single_node_passes_through_unchanged() {
    let mut g = Graph::new();
    g.set_node(
        "only",
        Node {
            position: Point::new(3.0, 4.0),
            ..Default::default()
        },
    );
    layout(&mut g, &StressOptions::default()).unwrap();
    assert_eq!(g.node_by_id("only").unwrap().position, Point::new(3.0, 4.0));
}

#[test]
fn components_are_laid_out_independently_and_packed_apart() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    g.set_edge("x", "y");
    for (v, node) in [(0.0, 0.0), (1.2, 0.15), (2.3, -0.1), (0.1, 0.2), (1.3, 0.0)]
        .iter()
        .enumerate()
    {
        g.node_mut(v).position = Point::new(node.0, node.1);
        g.node_mut(v).width = 0.5;
        g.node_mut(v).height = 0.5;
    }

    let opts = StressOptions {
        desired_edge_length: 1.0,
        component_spacing: 2.0,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();

    // Per-component geometry survives packing (translation only).
    assert!((dist(&g, "a", "b") - 1.0).abs() < 1e-2);
    assert!((dist(&g, "a", "c") - 2.0).abs() < 1e-2);
    assert!((dist(&g, "x", "y") - 1.0).abs() < 1e-2);

    // The two components end up clearly apart.
    let mut gap = f64::INFINITY;
    for p in ["a", "b", "c"] {
        for q in ["x", "y"] {
            gap = gap.min(dist(&g, p, q));
        }
    }
    assert!(gap > 1.0, "components packed too close: gap {gap}");
}

#[test]
fn disconnected_input_is_rejected_when_splitting_is_off() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("x", "y");

    let opts = StressOptions {
        separate_components: false,
        ..Default::default()
    };
    let err = layout(&mut g, &opts).unwrap_err();
    assert!(matches!(err, Error::DisconnectedComponent { .. }));
}

#[test]
fn connected_input_works_with_splitting_off() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    g.node_by_id_mut("a").unwrap().position = Point::new(0.0, 0.0);
    g.node_by_id_mut("b").unwrap().position = Point::new(1.2, 0.15);
    g.node_by_id_mut("c").unwrap().position = Point::new(2.3, -0.1);

    let opts = StressOptions {
        desired_edge_length: 1.0,
        separate_components: false,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();
    assert!((dist(&g, "a", "b") - 1.0).abs() < 1e-2);
}

#[test]
fn non_positive_desired_edge_length_is_refused() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut g = Graph::new();
        g.set_edge("a", "b");
        let opts = StressOptions {
            desired_edge_length: bad,
            ..Default::default()
        };
        let err = layout(&mut g, &opts).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }
}

#[test]
fn non_positive_edge_override_is_refused() {
    let mut g = Graph::new();
    g.set_edge_with_length("a", "b", 0.0);
    let err = layout(&mut g, &StressOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

#[test]
fn per_edge_override_stretches_that_edge() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge_with_length("b", "c", 3.0);
    g.node_by_id_mut("a").unwrap().position = Point::new(0.0, 0.0);
    g.node_by_id_mut("b").unwrap().position = Point::new(1.2, 0.15);
    g.node_by_id_mut("c").unwrap().position = Point::new(4.0, -0.1);

    let opts = StressOptions {
        desired_edge_length: 1.0,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();

    assert!((dist(&g, "a", "b") - 1.0).abs() < 1e-2);
    assert!((dist(&g, "b", "c") - 3.0).abs() < 1e-2);
    assert!((dist(&g, "a", "c") - 4.0).abs() < 1e-2);
}

#[test]
fn fixed_node_survives_the_whole_pipeline_bit_for_bit() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    let pinned = Point::new(0.123456789, -9.87654321);
    {
        let a = g.node_by_id_mut("a").unwrap();
        a.position = pinned;
        a.fixed = true;
    }
    g.node_by_id_mut("b").unwrap().position = Point::new(1.2, 0.15);
    g.node_by_id_mut("c").unwrap().position = Point::new(2.3, -0.1);

    let opts = StressOptions {
        desired_edge_length: 1.0,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();

    let a = g.node_by_id("a").unwrap().position;
    assert_eq!(a.x.to_bits(), pinned.x.to_bits());
    assert_eq!(a.y.to_bits(), pinned.y.to_bits());
}

#[test]
fn axis_restricted_layout_only_moves_one_coordinate() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    g.node_by_id_mut("a").unwrap().position = Point::new(0.0, 10.0);
    g.node_by_id_mut("b").unwrap().position = Point::new(1.0, 20.0);
    g.node_by_id_mut("c").unwrap().position = Point::new(2.0, 30.0);
    let before: Vec<Point> = g.nodes().iter().map(|n| n.position).collect();

    let opts = StressOptions {
        desired_edge_length: 1.0,
        dimension: Dimension::X,
        ..tight()
    };
    layout(&mut g, &opts).unwrap();

    for (old, node) in before.iter().zip(g.nodes()) {
        assert_eq!(node.position.y.to_bits(), old.y.to_bits());
    }
}

#[test]
fn placement_collaborator_seeds_before_solving() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "c");

    // Cancel before the first sweep: the final positions are then exactly
    // the collaborator's seed (single component, so packing is a no-op).
    let canceled = AtomicBool::new(true);
    layout_with(&mut g, &StressOptions::default(), Some(&Spiral), &canceled).unwrap();

    let mut expected = Graph::new();
    expected.set_edge("a", "b");
    expected.set_edge("b", "c");
    Spiral.place(&mut expected);

    for id in ["a", "b", "c"] {
        assert_eq!(
            g.node_by_id(id).unwrap().position,
            expected.node_by_id(id).unwrap().position
        );
    }
}

#[test]
fn cancellation_before_the_first_sweep_keeps_input_positions() {
    let mut g = Graph::new();
    g.set_edge("a", "b");
    g.node_by_id_mut("a").unwrap().position = Point::new(1.0, 2.0);
    g.node_by_id_mut("b").unwrap().position = Point::new(3.0, 4.0);

    let canceled = AtomicBool::new(true);
    layout_with(&mut g, &StressOptions::default(), None, &canceled).unwrap();

    assert_eq!(g.node_by_id("a").unwrap().position, Point::new(1.0, 2.0));
    assert_eq!(g.node_by_id("b").unwrap().position, Point::new(3.0, 4.0));
}
