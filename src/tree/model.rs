use std::{cmp::Ordering, fmt, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{TreevizError, TreevizResult},
    tree::node::TreeNode,
};

/// Nested, serde-friendly description of a binary tree.
///
/// ```json
/// { "value": 5, "left": { "value": 3 }, "right": { "value": "8" } }
/// ```
///
/// `value` may be a string, number or bool; it is stored as its string conversion.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeSpec {
    /// Node value; must be a string, number or bool.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Left subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeSpec>>,
    /// Right subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeSpec>>,
}

impl TreeSpec {
    /// Node with a string value and no children.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: Some(serde_json::Value::String(value.into())),
            left: None,
            right: None,
        }
    }

    /// Set the left subtree.
    pub fn with_left(mut self, child: TreeSpec) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Set the right subtree.
    pub fn with_right(mut self, child: TreeSpec) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    fn value_string(&self, path: &str) -> TreevizResult<String> {
        match &self.value {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
            Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
            Some(serde_json::Value::Null) | None => Err(TreevizError::missing_capability(
                format!("tree node at '{path}' has no value"),
            )),
            Some(other) => Err(TreevizError::missing_capability(format!(
                "tree node at '{path}' has a value that is not string-convertible: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    value: String,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Arena-backed binary tree with parent links.
#[derive(Clone, Debug, Default)]
pub struct BinaryTree {
    slots: Vec<Slot>,
    root: Option<usize>,
}

impl BinaryTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a nested spec. Nodes without a usable value are rejected with their path.
    pub fn from_spec(spec: &TreeSpec) -> TreevizResult<Self> {
        let mut tree = Self::new();
        let root = tree.push_spec(spec, None, "root")?;
        tree.root = Some(root);
        Ok(tree)
    }

    /// Parse a nested JSON tree.
    pub fn from_json_str(s: &str) -> TreevizResult<Self> {
        let spec: TreeSpec =
            serde_json::from_str(s).map_err(|e| TreevizError::serde(format!("tree JSON: {e}")))?;
        Self::from_spec(&spec)
    }

    /// Read a nested JSON tree from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> TreevizResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read tree '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Build an ordered tree by repeated insertion, comparing values as strings.
    ///
    /// Values equal to an existing node are skipped.
    pub fn bst_from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::new();
        for v in values {
            tree.bst_insert(v.into());
        }
        tree
    }

    /// Insert `value` at its ordered position. Returns `false` if an equal value already exists.
    pub fn bst_insert(&mut self, value: String) -> bool {
        let Some(mut cur) = self.root else {
            self.root = Some(self.push_slot(value, None));
            return true;
        };
        loop {
            let slot = &self.slots[cur];
            let next = match value.as_str().cmp(slot.value.as_str()) {
                Ordering::Equal => return false,
                Ordering::Less => slot.left,
                Ordering::Greater => slot.right,
            };
            match next {
                Some(n) => cur = n,
                None => {
                    let is_left = value.as_str() < self.slots[cur].value.as_str();
                    let idx = self.push_slot(value, Some(cur));
                    if is_left {
                        self.slots[cur].left = Some(idx);
                    } else {
                        self.slots[cur].right = Some(idx);
                    }
                    return true;
                }
            }
        }
    }

    /// Root handle; `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|idx| NodeRef { tree: self, idx })
    }

    /// Handle for arena slot `idx`.
    pub fn node(&self, idx: usize) -> Option<NodeRef<'_>> {
        (idx < self.slots.len()).then_some(NodeRef { tree: self, idx })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// No nodes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Depth of the deepest node (root is 0). `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        let root = self.root()?;
        let mut max = 0usize;
        let mut stack = vec![(root, 0usize)];
        while let Some((n, d)) = stack.pop() {
            max = max.max(d);
            stack.extend(n.left().map(|c| (c, d + 1)));
            stack.extend(n.right().map(|c| (c, d + 1)));
        }
        Some(max)
    }

    fn push_slot(&mut self, value: String, parent: Option<usize>) -> usize {
        self.slots.push(Slot {
            value,
            parent,
            left: None,
            right: None,
        });
        self.slots.len() - 1
    }

    fn push_spec(
        &mut self,
        spec: &TreeSpec,
        parent: Option<usize>,
        path: &str,
    ) -> TreevizResult<usize> {
        let idx = self.push_slot(spec.value_string(path)?, parent);
        if let Some(left) = &spec.left {
            let l = self.push_spec(left, Some(idx), &format!("{path}.left"))?;
            self.slots[idx].left = Some(l);
        }
        if let Some(right) = &spec.right {
            let r = self.push_spec(right, Some(idx), &format!("{path}.right"))?;
            self.slots[idx].right = Some(r);
        }
        Ok(idx)
    }
}

/// Borrowed handle to one node of a [`BinaryTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a BinaryTree,
    idx: usize,
}

impl<'a> NodeRef<'a> {
    /// Stored value.
    pub fn value(&self) -> &'a str {
        &self.tree.slots[self.idx].value
    }

    /// Parent handle; `None` at the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(self.tree.slots[self.idx].parent)
    }

    /// Edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut d = 0usize;
        let mut cur = *self;
        while let Some(p) = cur.parent() {
            d += 1;
            cur = p;
        }
        d
    }

    fn link(&self, idx: Option<usize>) -> Option<NodeRef<'a>> {
        idx.map(|idx| NodeRef {
            tree: self.tree,
            idx,
        })
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("idx", &self.idx)
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl TreeNode for NodeRef<'_> {
    fn left(&self) -> Option<Self> {
        self.link(self.tree.slots[self.idx].left)
    }

    fn right(&self) -> Option<Self> {
        self.link(self.tree.slots[self.idx].right)
    }

    fn has_parent(&self) -> bool {
        self.tree.slots[self.idx].parent.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/model.rs"]
mod tests;
