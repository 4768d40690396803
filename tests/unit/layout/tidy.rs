use super::*;
use crate::graph::{
    attrs::{EdgeDefaults, GraphAttrs, NodeDefaults, NodeStyle},
    state::GraphState,
};

fn unscaled_state() -> GraphState {
    GraphState::new(
        GraphAttrs {
            size: None,
            ..GraphAttrs::default()
        },
        NodeDefaults::default(),
        EdgeDefaults::default(),
    )
}

#[test]
fn parent_is_centered_over_children() {
    let mut g = unscaled_state();
    g.draw("5", Some("3"), None, NodeStyle::Filled);
    g.draw("5", Some(":5"), None, NodeStyle::Invisible);
    g.draw("5", Some("8"), None, NodeStyle::Filled);

    let scene = g.scene();
    let layout = layout_scene(scene);
    let root = layout.center_of(scene, "5").unwrap();
    let left = layout.center_of(scene, "3").unwrap();
    let mid = layout.center_of(scene, ":5").unwrap();
    let right = layout.center_of(scene, "8").unwrap();

    assert!(left.x < mid.x && mid.x < right.x);
    assert_eq!(root.x, mid.x);
    assert!(root.y < left.y);
    assert_eq!(left.y, right.y);
    assert_eq!(layout.scale, 1.0);
}

#[test]
fn lone_right_child_stays_right_of_parent() {
    let mut g = unscaled_state();
    g.draw("5", Some(":5"), None, NodeStyle::Invisible);
    g.draw("5", Some("8"), None, NodeStyle::Filled);

    let scene = g.scene();
    let layout = layout_scene(scene);
    let root = layout.center_of(scene, "5").unwrap();
    let right = layout.center_of(scene, "8").unwrap();
    assert!(right.x > root.x);
}

#[test]
fn isolated_nodes_are_laid_out_side_by_side() {
    let mut g = unscaled_state();
    g.highlight("a", "red");
    g.highlight("b", "red");

    let scene = g.scene();
    let layout = layout_scene(scene);
    let a = layout.center_of(scene, "a").unwrap();
    let b = layout.center_of(scene, "b").unwrap();
    assert_eq!(a.y, b.y);
    assert!(b.x > a.x);
}

#[test]
fn duplicate_edges_do_not_duplicate_children() {
    let mut g = unscaled_state();
    g.draw("1", Some("2"), None, NodeStyle::Filled);
    g.draw("1", Some("2"), None, NodeStyle::Filled);
    let layout = layout_scene(g.scene());
    let p = layout.center_of(g.scene(), "1").unwrap();
    let c = layout.center_of(g.scene(), "2").unwrap();
    assert_eq!(p.x, c.x);
}

#[test]
fn cycles_terminate() {
    let mut g = unscaled_state();
    g.draw("a", Some("b"), None, NodeStyle::Filled);
    g.draw("b", Some("a"), None, NodeStyle::Filled);
    let layout = layout_scene(g.scene());
    assert_eq!(layout.centers.len(), 2);
}

#[test]
fn wide_drawings_scale_down_to_max_size() {
    let mut g = GraphState::new(
        GraphAttrs {
            size: Some((2.0, 2.0)),
            ..GraphAttrs::default()
        },
        NodeDefaults::default(),
        EdgeDefaults::default(),
    );
    for i in 0..20 {
        g.draw("root", Some(&format!("c{i}")), None, NodeStyle::Filled);
    }
    let layout = layout_scene(g.scene());
    assert!(layout.scale < 1.0);
    assert!(layout.size.width <= 2.0 * 96.0 + 1e-6);
    assert!(layout.size.height <= 2.0 * 96.0 + 1e-6);
}

#[test]
fn deep_chains_do_not_overflow() {
    let mut g = unscaled_state();
    for i in 0..5_000 {
        let p = i.to_string();
        let c = (i + 1).to_string();
        g.draw(&p, Some(&c), None, NodeStyle::Filled);
    }
    let layout = layout_scene(g.scene());
    assert_eq!(layout.centers.len(), 5_001);
}
