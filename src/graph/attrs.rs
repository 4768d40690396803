//! Styling defaults for graphs, nodes and edges.
//!
//! Lengths are in inches (Graphviz convention) and converted to pixels with [`GraphAttrs::dpi`].
//! Colors are SVG/Graphviz color strings (`"grey"`, `"#cc9999"`).

use serde::{Deserialize, Serialize};

/// Fill used when a caller does not supply one.
pub const DEFAULT_FILL: &str = "grey";
/// Stroke color of placeholder edges.
pub const INVISIBLE_EDGE_COLOR: &str = "white";
/// Layout weight of visible edges.
pub const VISIBLE_EDGE_WEIGHT: u32 = 3;
/// Layout weight of placeholder edges; higher keeps them short.
pub const INVISIBLE_EDGE_WEIGHT: u32 = 100;

/// How a node is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    /// Shape filled with the node's fill color.
    #[default]
    Filled,
    /// Border only.
    Outline,
    /// Laid out but not painted; used for placeholders.
    Invisible,
}

impl NodeStyle {
    /// `false` only for [`NodeStyle::Invisible`].
    pub fn is_visible(self) -> bool {
        self != Self::Invisible
    }

    /// Graphviz `style` value.
    pub fn as_dot(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outline => "solid",
            Self::Invisible => "invis",
        }
    }
}

/// Node outline shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    /// Circle of diameter `width`.
    #[default]
    Circle,
    /// Ellipse wider than it is tall.
    Ellipse,
    /// Square of side `width`.
    Box,
    /// Small dot; the label is not drawn.
    Point,
}

impl NodeShape {
    /// Graphviz `shape` value.
    pub fn as_dot(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Box => "box",
            Self::Point => "point",
        }
    }
}

/// How an edge stroke is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots.
    Dotted,
    /// Double-width line.
    Bold,
    /// Laid out but not painted; used for placeholder edges.
    Invisible,
}

impl EdgeStyle {
    /// `false` only for [`EdgeStyle::Invisible`].
    pub fn is_visible(self) -> bool {
        self != Self::Invisible
    }

    /// Graphviz `style` value.
    pub fn as_dot(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Bold => "bold",
            Self::Invisible => "invis",
        }
    }
}

impl From<NodeStyle> for EdgeStyle {
    fn from(style: NodeStyle) -> Self {
        match style {
            NodeStyle::Invisible => Self::Invisible,
            NodeStyle::Filled | NodeStyle::Outline => Self::Solid,
        }
    }
}

/// Arrowhead drawn at the child end of a directed edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowHead {
    /// Open barbed head.
    #[default]
    Vee,
    /// Solid triangle.
    Normal,
    /// No head.
    None,
}

impl ArrowHead {
    /// Graphviz `arrowhead` value.
    pub fn as_dot(self) -> &'static str {
        match self {
            Self::Vee => "vee",
            Self::Normal => "normal",
            Self::None => "none",
        }
    }
}

/// Graph-level layout hints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphAttrs {
    /// Draw edges as arrows.
    pub directed: bool,
    /// Minimum horizontal gap between neighbouring nodes.
    pub nodesep: f64,
    /// Minimum vertical gap between ranks.
    pub ranksep: f64,
    /// Margin around the drawing.
    pub pad: f64,
    /// Maximum drawing size `(width, height)`; larger drawings are scaled down to fit.
    pub size: Option<(f64, f64)>,
    /// Pixels per inch.
    pub dpi: f64,
    /// Background color.
    pub bgcolor: String,
}

impl Default for GraphAttrs {
    fn default() -> Self {
        Self {
            directed: true,
            nodesep: 0.5,
            ranksep: 0.75,
            pad: 0.3,
            size: Some((19.2, 10.1)),
            dpi: 96.0,
            bgcolor: "white".to_owned(),
        }
    }
}

/// Attributes applied to every node unless a draw call overrides them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    /// Style of visible nodes.
    pub style: NodeStyle,
    /// Fill used when a draw call passes none.
    pub fillcolor: String,
    /// Outline shape.
    pub shape: NodeShape,
    /// Border color.
    pub color: String,
    /// Label color.
    pub fontcolor: String,
    /// Node diameter (or box height).
    pub width: f64,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            style: NodeStyle::Filled,
            fillcolor: DEFAULT_FILL.to_owned(),
            shape: NodeShape::Circle,
            color: "black".to_owned(),
            fontcolor: "black".to_owned(),
            width: 0.5,
        }
    }
}

/// Attributes applied to every visible edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDefaults {
    /// Stroke color.
    pub color: String,
    /// Head drawn on directed graphs.
    pub arrowhead: ArrowHead,
    /// Stroke style.
    pub style: EdgeStyle,
}

impl Default for EdgeDefaults {
    fn default() -> Self {
        Self {
            color: "blue".to_owned(),
            arrowhead: ArrowHead::Vee,
            style: EdgeStyle::Solid,
        }
    }
}

impl EdgeDefaults {
    /// Defaults applied while a placeholder edge is added.
    pub fn invisible() -> Self {
        Self {
            color: INVISIBLE_EDGE_COLOR.to_owned(),
            arrowhead: ArrowHead::None,
            style: EdgeStyle::Invisible,
        }
    }
}

/// Fill colors used while searching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchColors {
    /// Node currently being examined.
    pub visiting: String,
    /// Breadcrumb left on examined nodes.
    pub visited: String,
    /// Node matching the search target.
    pub found: String,
}

impl Default for SearchColors {
    fn default() -> Self {
        Self {
            visiting: "red".to_owned(),
            visited: "#cc9999".to_owned(),
            found: "green".to_owned(),
        }
    }
}
