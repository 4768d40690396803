use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::TreevizResult,
    graph::attrs::NodeStyle,
    tree::node::TreeNode,
};

/// Prefix of the placeholder drawn for a missing left child.
pub const MISSING_LEFT_MARKER: char = ':';
/// Prefix of the placeholder drawn for a missing right child.
pub const MISSING_RIGHT_MARKER: char = ';';

/// Drawing and frame-emission capabilities traversal drives.
pub trait RenderSink {
    /// Draw `parent` alone, or an edge from `parent` to `child`. `fill: None` uses the node default.
    fn draw(
        &mut self,
        parent: &str,
        child: Option<&str>,
        fill: Option<&str>,
        style: NodeStyle,
    ) -> TreevizResult<()>;

    /// Overwrite the fill color of `label`.
    fn highlight(&mut self, label: &str, color: &str) -> TreevizResult<()>;

    /// Persist the current drawing as a frame.
    fn emit_frame(&mut self) -> TreevizResult<()>;
}

/// Pending nodes. Always popped from the front; algorithms choose which end to insert at.
#[derive(Debug)]
pub struct WorkList<N> {
    items: VecDeque<N>,
}

impl<N> WorkList<N> {
    /// Work list holding only `root`.
    pub fn new(root: N) -> Self {
        Self {
            items: VecDeque::from([root]),
        }
    }

    /// Next node to visit.
    pub fn pop_front(&mut self) -> Option<N> {
        self.items.pop_front()
    }

    /// Visit `node` next.
    pub fn push_front(&mut self, node: N) {
        self.items.push_front(node);
    }

    /// Visit `node` after everything queued.
    pub fn push_back(&mut self, node: N) {
        self.items.push_back(node);
    }

    fn extend_back(&mut self, nodes: impl IntoIterator<Item = N>) {
        self.items.extend(nodes);
    }

    /// Pending nodes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// No pending nodes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Traversal kinds. Each decides which children of a visited node join the work list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Pre-order depth-first: node, left subtree, right subtree.
    DepthFirst,
    /// Level order, left to right.
    BreadthFirst,
    /// Binary-search descent: only the branch that can hold the target.
    Ordered,
    /// Draw the complete tree once, with placeholders keeping lone children on their side.
    Sketch,
}

impl Algorithm {
    /// Queue the children of `node` this algorithm visits, drawing them when sketching.
    pub fn step<N: TreeNode>(
        self,
        node: &N,
        work: &mut WorkList<N>,
        target: Option<&str>,
        sink: &mut dyn RenderSink,
    ) -> TreevizResult<()> {
        match self {
            Self::DepthFirst => {
                depth_first(node, work);
                Ok(())
            }
            Self::BreadthFirst => {
                breadth_first(node, work);
                Ok(())
            }
            Self::Ordered => {
                ordered(node, work, target);
                Ok(())
            }
            Self::Sketch => sketch(node, work, sink),
        }
    }
}

fn depth_first<N: TreeNode>(node: &N, work: &mut WorkList<N>) {
    if let Some(right) = node.right() {
        work.push_front(right);
    }
    if let Some(left) = node.left() {
        work.push_front(left);
    }
}

fn breadth_first<N: TreeNode>(node: &N, work: &mut WorkList<N>) {
    if let Some(left) = node.left() {
        work.push_back(left);
    }
    if let Some(right) = node.right() {
        work.push_back(right);
    }
}

/// Without a target there is no branch to follow and nothing is queued.
fn ordered<N: TreeNode>(node: &N, work: &mut WorkList<N>, target: Option<&str>) {
    let Some(target) = target else {
        return;
    };
    let value = node.label();
    if let Some(right) = node.right().filter(|_| target > value.as_str()) {
        work.push_front(right);
    }
    if let Some(left) = node.left().filter(|_| target < value.as_str()) {
        work.push_front(left);
    }
}

fn sketch<N: TreeNode>(
    node: &N,
    work: &mut WorkList<N>,
    sink: &mut dyn RenderSink,
) -> TreevizResult<()> {
    let label = node.label();
    let left = node.left();
    let right = node.right();

    match (&left, &right) {
        (Some(l), _) => {
            sink.draw(&label, Some(&l.label()), None, NodeStyle::Filled)?;
            if right.is_some() {
                // Spacer between the two children.
                let spacer = format!("{MISSING_LEFT_MARKER}{label}");
                sink.draw(&label, Some(&spacer), None, NodeStyle::Invisible)?;
            }
        }
        (None, Some(_)) => {
            let spacer = format!("{MISSING_LEFT_MARKER}{label}");
            sink.draw(&label, Some(&spacer), None, NodeStyle::Invisible)?;
        }
        (None, None) => {}
    }

    match (&left, &right) {
        (_, Some(r)) => sink.draw(&label, Some(&r.label()), None, NodeStyle::Filled)?,
        (Some(_), None) => {
            let spacer = format!("{MISSING_RIGHT_MARKER}{label}");
            sink.draw(&label, Some(&spacer), None, NodeStyle::Invisible)?;
        }
        (None, None) => {}
    }

    if left.is_none() && right.is_none() && !node.has_parent() {
        sink.draw(&label, None, None, NodeStyle::Filled)?;
    }

    work.extend_back(left.into_iter().chain(right));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/traversal/algorithm.rs"]
mod tests;
