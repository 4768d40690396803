use std::collections::{HashMap, HashSet};

use crate::{
    foundation::core::{Point, Size, inches_to_px},
    graph::state::Scene,
};

/// Pixel positions for every node of a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLayout {
    /// Node centers, indexed like [`Scene::nodes`].
    pub centers: Vec<Point>,
    /// Node radius after scaling.
    pub radius: f64,
    /// Uniform scale applied to fit the configured maximum size (`<= 1.0`).
    pub scale: f64,
    /// Drawing size including padding.
    pub size: Size,
}

impl TreeLayout {
    /// Center of the node labelled `label`.
    pub fn center_of(&self, scene: &Scene, label: &str) -> Option<Point> {
        scene
            .handle(label)
            .and_then(|h| self.centers.get(h.0))
            .copied()
    }
}

/// Lay out `scene` as a layered forest.
///
/// Roots are nodes without incoming edges, in registration order. Children are the distinct edge
/// targets of a node in insertion order. Leaves take consecutive slots left to right and every
/// parent is centered over its first and last child, so placeholder children keep a lone child
/// off-center on the correct side.
pub fn layout_scene(scene: &Scene) -> TreeLayout {
    let attrs = &scene.graph;
    let dpi = attrs.dpi;
    let n = scene.nodes().len();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut has_parent = vec![false; n];
    for edge in scene.edges() {
        let (Some(p), Some(c)) = (scene.handle(&edge.parent), scene.handle(&edge.child)) else {
            continue;
        };
        if p == c || children[p.0].contains(&c.0) {
            continue;
        }
        children[p.0].push(c.0);
        has_parent[c.0] = true;
    }

    let mut slots = vec![0.0f64; n];
    let mut depths = vec![0usize; n];
    let mut placed = HashSet::<usize>::with_capacity(n);
    let mut next_slot = 0.0f64;

    let roots = (0..n).filter(|&i| !has_parent[i]).collect::<Vec<_>>();
    let stragglers = 0..n;
    for start in roots.into_iter().chain(stragglers) {
        if placed.contains(&start) {
            continue;
        }
        place(
            start,
            &children,
            &mut placed,
            &mut slots,
            &mut depths,
            &mut next_slot,
        );
    }

    let diameter = inches_to_px(scene.node_defaults.width, dpi).max(1.0);
    let slot_w = diameter + inches_to_px(attrs.nodesep, dpi).max(0.0);
    let row_h = diameter + inches_to_px(attrs.ranksep, dpi).max(0.0);
    let pad = inches_to_px(attrs.pad, dpi).max(0.0);
    let r = diameter / 2.0;

    let max_slot = slots.iter().copied().fold(0.0f64, f64::max);
    let max_depth = depths.iter().copied().max().unwrap_or(0);
    let natural = Size::new(
        2.0 * pad + diameter + max_slot * slot_w,
        2.0 * pad + diameter + (max_depth as f64) * row_h,
    );

    let scale = fit_scale(natural, attrs.size.map(|(w, h)| (w * dpi, h * dpi)));

    let centers = slots
        .iter()
        .zip(depths.iter())
        .map(|(&slot, &depth)| {
            Point::new(
                (pad + r + slot * slot_w) * scale,
                (pad + r + (depth as f64) * row_h) * scale,
            )
        })
        .collect();

    TreeLayout {
        centers,
        radius: r * scale,
        scale,
        size: Size::new(natural.width * scale, natural.height * scale),
    }
}

fn fit_scale(natural: Size, max: Option<(f64, f64)>) -> f64 {
    let Some((max_w, max_h)) = max else {
        return 1.0;
    };
    if max_w <= 0.0 || max_h <= 0.0 {
        return 1.0;
    }
    (max_w / natural.width).min(max_h / natural.height).min(1.0)
}

/// Post-order placement with an explicit stack, so degenerate (list-shaped) trees do not recurse.
fn place(
    start: usize,
    children: &[Vec<usize>],
    placed: &mut HashSet<usize>,
    slots: &mut [f64],
    depths: &mut [usize],
    next_slot: &mut f64,
) {
    // (node, depth, expanded)
    let mut stack = vec![(start, 0usize, false)];
    placed.insert(start);
    let mut owned: HashMap<usize, Vec<usize>> = HashMap::new();

    while let Some((node, depth, expanded)) = stack.pop() {
        if !expanded {
            depths[node] = depth;
            let kids = children[node]
                .iter()
                .copied()
                .filter(|&c| placed.insert(c))
                .collect::<Vec<_>>();
            stack.push((node, depth, true));
            for &c in kids.iter().rev() {
                stack.push((c, depth + 1, false));
            }
            owned.insert(node, kids);
            continue;
        }

        let kids = owned.remove(&node).unwrap_or_default();
        match (kids.first(), kids.last()) {
            (Some(&first), Some(&last)) => slots[node] = (slots[first] + slots[last]) / 2.0,
            _ => {
                slots[node] = *next_slot;
                *next_slot += 1.0;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tidy.rs"]
mod tests;
