use super::*;
use crate::graph::{
    attrs::{EdgeDefaults, GraphAttrs, NodeDefaults},
    state::GraphState,
};

fn sketched() -> GraphState {
    let mut g = GraphState::new(
        GraphAttrs::default(),
        NodeDefaults::default(),
        EdgeDefaults::default(),
    );
    g.draw("5", Some(":5"), None, NodeStyle::Invisible);
    g.draw("5", Some("8"), None, NodeStyle::Filled);
    g
}

#[test]
fn invisible_elements_are_not_painted() {
    let svg = scene_to_svg(sketched().scene());
    assert_eq!(svg.matches("<circle").count(), 2);
    assert_eq!(svg.matches("<line").count(), 1);
    assert!(svg.contains(">5</text>"));
    assert!(svg.contains(">8</text>"));
    assert!(!svg.contains(":5"));
}

#[test]
fn highlight_changes_fill() {
    let mut g = sketched();
    g.highlight("8", "#cc9999");
    let svg = scene_to_svg(g.scene());
    assert!(svg.contains(r##"fill="#cc9999""##));
    assert!(svg.contains(r#"fill="grey""#));
}

#[test]
fn directed_edges_get_arrowheads() {
    let g = sketched();
    assert_eq!(scene_to_svg(g.scene()).matches("<polygon").count(), 1);

    let mut undirected = g.clone();
    undirected.set_graph_attrs(GraphAttrs {
        directed: false,
        ..GraphAttrs::default()
    });
    assert_eq!(scene_to_svg(undirected.scene()).matches("<polygon").count(), 0);
}

#[test]
fn labels_are_escaped() {
    assert_eq!(escape(r#"a<b & "c"'"#), "a&lt;b &amp; &quot;c&quot;&apos;");

    let mut g = sketched();
    g.highlight("<x>", "red");
    assert!(scene_to_svg(g.scene()).contains(">&lt;x&gt;</text>"));
}

#[test]
fn engine_reports_format_and_is_deterministic() {
    let g = sketched();
    let mut engine = SvgEngine;
    assert_eq!(engine.format(), OutputFormat::Svg);
    let a = engine.render(g.scene()).unwrap();
    let b = engine.render(g.scene()).unwrap();
    assert_eq!(a, b);
    assert!(a.starts_with(b"<svg"));
}
