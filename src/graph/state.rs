use std::collections::HashMap;

use crate::graph::attrs::{
    ArrowHead, EdgeDefaults, EdgeStyle, GraphAttrs, INVISIBLE_EDGE_WEIGHT, NodeDefaults,
    NodeStyle, VISIBLE_EDGE_WEIGHT,
};

/// Index of a node inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub usize);

/// One drawn node.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Identity and displayed text.
    pub label: String,
    /// Current fill; overwritten by highlights.
    pub fillcolor: String,
    /// Placeholders are [`NodeStyle::Invisible`].
    pub style: NodeStyle,
    /// First node registered by a drawing pass.
    pub is_root: bool,
}

/// One drawn edge, with the edge defaults in effect when it was added.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
    /// Parent label.
    pub parent: String,
    /// Child label.
    pub child: String,
    /// Stroke style.
    pub style: EdgeStyle,
    /// Stroke color.
    pub color: String,
    /// Head at the child end.
    pub arrowhead: ArrowHead,
    /// Layout weight: [`VISIBLE_EDGE_WEIGHT`] or [`INVISIBLE_EDGE_WEIGHT`].
    pub weight: u32,
}

/// Everything drawn so far in a session, plus the styling defaults used to paint it.
///
/// Nodes are unique by label and keep registration order. Edges are kept in insertion order and
/// may repeat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Graph-level attributes.
    pub graph: GraphAttrs,
    /// Node styling defaults.
    pub node_defaults: NodeDefaults,
    /// Edge styling defaults.
    pub edge_defaults: EdgeDefaults,
    nodes: Vec<SceneNode>,
    index: HashMap<String, NodeHandle>,
    edges: Vec<SceneEdge>,
}

impl Scene {
    /// Empty scene with the given defaults.
    pub fn new(graph: GraphAttrs, node_defaults: NodeDefaults, edge_defaults: EdgeDefaults) -> Self {
        Self {
            graph,
            node_defaults,
            edge_defaults,
            ..Self::default()
        }
    }

    /// Nodes in registration order.
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[SceneEdge] {
        &self.edges
    }

    /// Handle of the node labelled `label`.
    pub fn handle(&self, label: &str) -> Option<NodeHandle> {
        self.index.get(label).copied()
    }

    /// Node labelled `label`.
    pub fn node(&self, label: &str) -> Option<&SceneNode> {
        self.handle(label).and_then(|h| self.nodes.get(h.0))
    }

    /// Nothing drawn yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Create `label`, or overwrite its attributes if it already exists.
    fn put_node(&mut self, label: &str, fillcolor: &str, style: NodeStyle) -> NodeHandle {
        if let Some(h) = self.handle(label) {
            let node = &mut self.nodes[h.0];
            node.fillcolor = fillcolor.to_owned();
            node.style = style;
            return h;
        }
        let h = NodeHandle(self.nodes.len());
        self.nodes.push(SceneNode {
            label: label.to_owned(),
            fillcolor: fillcolor.to_owned(),
            style,
            is_root: false,
        });
        self.index.insert(label.to_owned(), h);
        h
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
    }
}

/// Drawing state of one session: the persistent [`Scene`] and the per-pass node registry.
///
/// The registry maps labels to scene handles and is reset at the start of every traversal pass,
/// so each label is created at most once per pass. The scene persists across passes, which lets
/// a search highlight a tree sketched by an earlier pass.
///
/// Labels are identity here: two distinct tree nodes with the same label share one scene node.
/// Re-creating a registered label is a no-op and highlights are last-write-wins.
#[derive(Clone, Debug, Default)]
pub struct GraphState {
    scene: Scene,
    registry: HashMap<String, NodeHandle>,
}

impl GraphState {
    /// Empty drawing with the given defaults.
    pub fn new(graph: GraphAttrs, node_defaults: NodeDefaults, edge_defaults: EdgeDefaults) -> Self {
        Self {
            scene: Scene::new(graph, node_defaults, edge_defaults),
            registry: HashMap::new(),
        }
    }

    /// Everything drawn so far.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of distinct labels registered in the current pass.
    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    /// Whether `label` was drawn or highlighted in the current pass.
    pub fn is_registered(&self, label: &str) -> bool {
        self.registry.contains_key(label)
    }

    /// Start a new traversal pass. The scene is kept.
    pub fn begin_pass(&mut self) {
        self.registry.clear();
    }

    /// Drop everything drawn so far, keeping styling defaults.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.scene.clear();
    }

    /// Replace graph-level attributes.
    pub fn set_graph_attrs(&mut self, attrs: GraphAttrs) {
        self.scene.graph = attrs;
    }

    /// Replace node defaults. Existing nodes keep their fill and style.
    pub fn set_node_defaults(&mut self, defaults: NodeDefaults) {
        self.scene.node_defaults = defaults;
    }

    /// Replace edge defaults for edges added from now on.
    pub fn set_edge_defaults(&mut self, defaults: EdgeDefaults) {
        self.scene.edge_defaults = defaults;
    }

    /// Draw a node, or an edge plus whichever endpoints are not yet registered.
    ///
    /// Without `child`, `parent` is drawn as an isolated node. With `child`, the edge is always
    /// added. An invisible `style` makes the edge and a newly registered child placeholders; the
    /// parent is a real tree node and is always registered visible.
    pub fn draw(&mut self, parent: &str, child: Option<&str>, fill: Option<&str>, style: NodeStyle) {
        let fill = fill
            .map(str::to_owned)
            .unwrap_or_else(|| self.scene.node_defaults.fillcolor.clone());

        let Some(child) = child else {
            let h = self.scene.put_node(parent, &fill, style);
            self.registry.insert(parent.to_owned(), h);
            return;
        };

        self.add_edge(parent, child, EdgeStyle::from(style));

        let parent_style = if style.is_visible() {
            style
        } else {
            self.scene.node_defaults.style
        };
        if self.registry.is_empty() {
            let h = self.register(parent, &fill, parent_style);
            self.scene.nodes[h.0].is_root = true;
        }
        if !self.is_registered(parent) {
            self.register(parent, &fill, parent_style);
        }
        if !self.is_registered(child) {
            self.register(child, &fill, style);
        }
    }

    /// Overwrite the fill of `label`. Unknown labels are added as isolated filled nodes.
    pub fn highlight(&mut self, label: &str, color: &str) {
        let h = match self.scene.handle(label) {
            Some(h) => {
                let node = &mut self.scene.nodes[h.0];
                node.fillcolor = color.to_owned();
                if !node.style.is_visible() {
                    node.style = NodeStyle::Filled;
                }
                h
            }
            None => self.scene.put_node(label, color, NodeStyle::Filled),
        };
        self.registry.entry(label.to_owned()).or_insert(h);
    }

    fn register(&mut self, label: &str, fill: &str, style: NodeStyle) -> NodeHandle {
        let h = self.scene.put_node(label, fill, style);
        self.registry.insert(label.to_owned(), h);
        h
    }

    fn add_edge(&mut self, parent: &str, child: &str, style: EdgeStyle) {
        if style.is_visible() {
            self.push_edge(parent, child, VISIBLE_EDGE_WEIGHT);
            return;
        }
        let saved = std::mem::replace(&mut self.scene.edge_defaults, EdgeDefaults::invisible());
        self.push_edge(parent, child, INVISIBLE_EDGE_WEIGHT);
        self.scene.edge_defaults = saved;
    }

    fn push_edge(&mut self, parent: &str, child: &str, weight: u32) {
        let d = &self.scene.edge_defaults;
        let edge = SceneEdge {
            parent: parent.to_owned(),
            child: child.to_owned(),
            style: d.style,
            color: d.color.clone(),
            arrowhead: d.arrowhead,
            weight,
        };
        self.scene.edges.push(edge);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/state.rs"]
mod tests;
