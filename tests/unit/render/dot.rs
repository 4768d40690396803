use super::*;
use crate::graph::{
    attrs::{EdgeDefaults, GraphAttrs, NodeDefaults, NodeStyle},
    state::GraphState,
};

#[test]
fn dot_lists_defaults_nodes_and_edges() {
    let mut g = GraphState::new(
        GraphAttrs::default(),
        NodeDefaults::default(),
        EdgeDefaults::default(),
    );
    g.draw("5", Some("3"), None, NodeStyle::Filled);
    g.draw("5", Some(";5"), None, NodeStyle::Invisible);
    g.highlight("3", "red");

    let dot = scene_to_dot(g.scene());
    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.contains("size=\"19.2, 10.1\""));
    assert!(dot.contains(
        "node [style=filled, fillcolor=\"grey\", shape=circle, color=\"black\", fontcolor=\"black\", width=0.5];"
    ));
    assert!(dot.contains("edge [color=\"blue\", arrowhead=vee, style=solid];"));
    assert!(dot.contains("\"5\" [label=\"5\", fillcolor=\"grey\", style=filled, root=true];"));
    assert!(dot.contains("\"3\" [label=\"3\", fillcolor=\"red\", style=filled];"));
    assert!(dot.contains("\";5\" [label=\";5\", fillcolor=\"grey\", style=invis];"));
    assert!(dot.contains(
        "\"5\" -> \"3\" [style=solid, color=\"blue\", arrowhead=vee, weight=3];"
    ));
    assert!(dot.contains(
        "\"5\" -> \";5\" [style=invis, color=\"white\", arrowhead=none, weight=100];"
    ));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn undirected_graph_uses_plain_edges() {
    let mut g = GraphState::new(
        GraphAttrs {
            directed: false,
            size: None,
            ..GraphAttrs::default()
        },
        NodeDefaults::default(),
        EdgeDefaults::default(),
    );
    g.draw("a", Some("b"), None, NodeStyle::Filled);
    let dot = scene_to_dot(g.scene());
    assert!(dot.starts_with("graph G {"));
    assert!(dot.contains("\"a\" -- \"b\""));
    assert!(!dot.contains("size="));
}

#[test]
fn quotes_are_escaped() {
    assert_eq!(quote(r#"say "hi"\"#), r#""say \"hi\"\\""#);
}
