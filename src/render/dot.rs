use crate::{
    foundation::error::TreevizResult,
    graph::state::Scene,
    render::engine::{OutputFormat, RenderEngine},
};

/// Writes each frame as Graphviz DOT source, for laying out with `dot` externally.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotEngine;

impl RenderEngine for DotEngine {
    fn format(&self) -> OutputFormat {
        OutputFormat::Dot
    }

    fn render(&mut self, scene: &Scene) -> TreevizResult<Vec<u8>> {
        Ok(scene_to_dot(scene).into_bytes())
    }
}

/// Render `scene` to DOT source. The root of a drawing pass is marked `root=true`.
pub fn scene_to_dot(scene: &Scene) -> String {
    let g = &scene.graph;
    let nd = &scene.node_defaults;
    let ed = &scene.edge_defaults;
    let (kind, op) = if g.directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut out = String::new();
    out.push_str(&format!("{kind} G {{\n"));

    let mut graph_attrs = vec![
        format!("nodesep={}", g.nodesep),
        format!("ranksep={}", g.ranksep),
        format!("pad={}", g.pad),
        format!("dpi={}", g.dpi),
        format!("bgcolor={}", quote(&g.bgcolor)),
    ];
    if let Some((w, h)) = g.size {
        graph_attrs.push(format!("size=\"{w}, {h}\""));
    }
    out.push_str(&format!("graph [{}];\n", graph_attrs.join(", ")));
    out.push_str(&format!(
        "node [style={}, fillcolor={}, shape={}, color={}, fontcolor={}, width={}];\n",
        nd.style.as_dot(),
        quote(&nd.fillcolor),
        nd.shape.as_dot(),
        quote(&nd.color),
        quote(&nd.fontcolor),
        nd.width
    ));
    out.push_str(&format!(
        "edge [color={}, arrowhead={}, style={}];\n",
        quote(&ed.color),
        ed.arrowhead.as_dot(),
        ed.style.as_dot()
    ));

    for node in scene.nodes() {
        out.push_str(&format!(
            "{} [label={}, fillcolor={}, style={}{}];\n",
            quote(&node.label),
            quote(&node.label),
            quote(&node.fillcolor),
            node.style.as_dot(),
            if node.is_root { ", root=true" } else { "" }
        ));
    }

    for edge in scene.edges() {
        out.push_str(&format!(
            "{} {op} {} [style={}, color={}, arrowhead={}, weight={}];\n",
            quote(&edge.parent),
            quote(&edge.child),
            edge.style.as_dot(),
            quote(&edge.color),
            edge.arrowhead.as_dot(),
            edge.weight
        ));
    }

    out.push_str("}\n");
    out
}

/// Quote a DOT identifier.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/dot.rs"]
mod tests;
