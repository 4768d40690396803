use std::fmt;

/// Capability a binary-tree node must provide to be traversed and drawn.
///
/// Implementors are cheap handles (typically `Copy`) into a tree owned elsewhere; the tree itself
/// is never mutated by traversal. The `Display` conversion is used both as the drawing label and
/// as the search comparison key.
pub trait TreeNode: fmt::Display + Sized {
    /// Left child, if any.
    fn left(&self) -> Option<Self>;

    /// Right child, if any.
    fn right(&self) -> Option<Self>;

    /// Whether this node has a parent. Only used to detect the root of a one-node tree.
    fn has_parent(&self) -> bool;

    /// Drawing label and comparison key.
    fn label(&self) -> String {
        self.to_string()
    }
}
