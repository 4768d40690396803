use crate::{
    foundation::{
        core::{Point, Vec2},
        error::TreevizResult,
    },
    graph::{
        attrs::{ArrowHead, EdgeStyle, NodeShape, NodeStyle},
        state::{Scene, SceneEdge},
    },
    layout::tidy::{TreeLayout, layout_scene},
    render::engine::{OutputFormat, RenderEngine},
};

/// Writes each frame as a standalone SVG document.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgEngine;

impl RenderEngine for SvgEngine {
    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }

    fn render(&mut self, scene: &Scene) -> TreevizResult<Vec<u8>> {
        Ok(scene_to_svg(scene).into_bytes())
    }
}

/// Render `scene` to SVG markup. Invisible nodes and edges take up space but are not painted.
pub fn scene_to_svg(scene: &Scene) -> String {
    let layout = layout_scene(scene);
    let w = layout.size.width.ceil().max(1.0);
    let h = layout.size.height.ceil().max(1.0);

    let mut out = String::with_capacity(256 + 192 * scene.nodes().len());
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        escape(&scene.graph.bgcolor)
    ));
    out.push('\n');

    for edge in scene.edges() {
        if !edge.style.is_visible() {
            continue;
        }
        let (Some(from), Some(to)) = (
            layout.center_of(scene, &edge.parent),
            layout.center_of(scene, &edge.child),
        ) else {
            continue;
        };
        push_edge(&mut out, scene, &layout, from, to, edge);
    }

    for (node, &center) in scene.nodes().iter().zip(layout.centers.iter()) {
        if !node.style.is_visible() {
            continue;
        }
        push_node(&mut out, scene, &layout, center, &node.label, &node.fillcolor, node.style);
    }

    out.push_str("</svg>\n");
    out
}

fn push_edge(
    out: &mut String,
    scene: &Scene,
    layout: &TreeLayout,
    from: Point,
    to: Point,
    edge: &SceneEdge,
) {
    let d = to - from;
    let len = d.hypot();
    if len <= 2.0 * layout.radius {
        return;
    }
    let dir = d / len;
    let start = from + dir * layout.radius;
    let end = to - dir * layout.radius;
    let stroke = escape(&edge.color);
    let width = 1.5 * layout.scale.max(0.25);

    let dash = match edge.style {
        EdgeStyle::Dashed => dasharray(6.0 * layout.scale, 4.0 * layout.scale),
        EdgeStyle::Dotted => dasharray(1.5 * layout.scale, 3.0 * layout.scale),
        EdgeStyle::Solid | EdgeStyle::Bold | EdgeStyle::Invisible => String::new(),
    };
    let width = if edge.style == EdgeStyle::Bold {
        width * 2.0
    } else {
        width
    };

    let arrow = if scene.graph.directed {
        edge.arrowhead
    } else {
        ArrowHead::None
    };
    let head_len = 10.0 * layout.scale;
    let line_end = match arrow {
        ArrowHead::None => end,
        ArrowHead::Vee => end - dir * (head_len * 0.6),
        ArrowHead::Normal => end - dir * head_len,
    };

    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{stroke}" stroke-width="{width:.2}"{dash}/>"#,
        start.x, start.y, line_end.x, line_end.y
    ));
    out.push('\n');

    if arrow != ArrowHead::None {
        let pts = arrow_points(end, dir, head_len, arrow);
        let pts = pts
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(r#"<polygon points="{pts}" fill="{stroke}"/>"#));
        out.push('\n');
    }
}

fn dasharray(on: f64, off: f64) -> String {
    format!(r#" stroke-dasharray="{on:.2} {off:.2}""#)
}

fn arrow_points(tip: Point, dir: Vec2, len: f64, kind: ArrowHead) -> Vec<Point> {
    let normal = dir.turn_90();
    let back = tip - dir * len;
    let half = len * 0.45;
    match kind {
        ArrowHead::Vee => vec![
            tip,
            back + normal * half,
            tip - dir * (len * 0.6),
            back - normal * half,
        ],
        ArrowHead::Normal | ArrowHead::None => {
            vec![tip, back + normal * half, back - normal * half]
        }
    }
}

fn push_node(
    out: &mut String,
    scene: &Scene,
    layout: &TreeLayout,
    c: Point,
    label: &str,
    fillcolor: &str,
    style: NodeStyle,
) {
    let defaults = &scene.node_defaults;
    let r = layout.radius;
    let fill = match style {
        NodeStyle::Filled => escape(fillcolor),
        NodeStyle::Outline | NodeStyle::Invisible => "none".to_owned(),
    };
    let stroke = escape(&defaults.color);
    let sw = (1.0 * layout.scale).max(0.25);

    match defaults.shape {
        NodeShape::Circle => out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{r:.2}" fill="{fill}" stroke="{stroke}" stroke-width="{sw:.2}"/>"#,
            c.x, c.y
        )),
        NodeShape::Ellipse => out.push_str(&format!(
            r#"<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="{fill}" stroke="{stroke}" stroke-width="{sw:.2}"/>"#,
            c.x,
            c.y,
            r * 1.4,
            r * 0.8
        )),
        NodeShape::Box => out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{fill}" stroke="{stroke}" stroke-width="{sw:.2}"/>"#,
            c.x - r,
            c.y - r,
            2.0 * r,
            2.0 * r
        )),
        NodeShape::Point => {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{fill}" stroke="{stroke}"/>"#,
                c.x,
                c.y,
                (r * 0.15).max(1.0)
            ));
            out.push('\n');
            return;
        }
    }
    out.push('\n');

    let font_size = r * 0.8;
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{font_size:.2}" text-anchor="middle" fill="{}">{}</text>"#,
        c.x,
        c.y + font_size * 0.35,
        escape(&defaults.fontcolor),
        escape(label)
    ));
    out.push('\n');
}

/// Escape text for use in XML attribute values and character data.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
