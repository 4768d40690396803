use crate::{
    foundation::error::TreevizResult,
    graph::attrs::SearchColors,
    traversal::algorithm::{Algorithm, RenderSink, WorkList},
    tree::node::TreeNode,
};

/// Walk the tree from `root` with `algorithm`, looking for a node labelled `target`.
///
/// With a target, every examined node is blinked (`visiting` frame, then `visited` frame) and a
/// match is painted `found`, emitted, and ends the walk. Without a target the walk only runs the
/// algorithm's step on every node it reaches.
///
/// Returns whether the target was found; an exhausted work list is `Ok(false)`.
pub fn search<N: TreeNode>(
    root: N,
    algorithm: Algorithm,
    target: Option<&str>,
    colors: &SearchColors,
    sink: &mut dyn RenderSink,
) -> TreevizResult<bool> {
    let mut work = WorkList::new(root);
    while let Some(node) = work.pop_front() {
        let label = node.label();
        if let Some(target) = target {
            if label == target {
                sink.highlight(&label, &colors.found)?;
                sink.emit_frame()?;
                tracing::debug!(label, "target found");
                return Ok(true);
            }
            sink.highlight(&label, &colors.visiting)?;
            sink.emit_frame()?;
            sink.highlight(&label, &colors.visited)?;
            sink.emit_frame()?;
        }
        algorithm.step(&node, &mut work, target, sink)?;
    }
    Ok(false)
}

#[cfg(test)]
#[path = "../../tests/unit/traversal/engine.rs"]
mod tests;
