//! treeviz renders binary-tree traversals and searches as numbered still frames.
//!
//! A [`Visualizer`] owns one drawing session: it sketches a tree, walks it with a chosen
//! [`Algorithm`], and writes a frame every time a node is visited or found. Frames are numbered
//! contiguously (`bst_graph00001.png`, `bst_graph00002.png`, ...) so the directory can be fed
//! straight to an image-sequence video encoder.
//!
//! # Pipeline overview
//!
//! 1. **Traverse**: a work list of [`TreeNode`] handles, popped from the front; the algorithm
//!    decides which children to push and at which end.
//! 2. **Draw**: [`GraphState`] records nodes and edges into a [`Scene`], once per label per pass.
//! 3. **Render**: a [`RenderEngine`] lays the scene out and encodes it (PNG, SVG or DOT).
//! 4. **Persist**: [`FrameSequencer`] writes the encoded frame to one or more numbered files.
//!
//! ```no_run
//! use treeviz::{Algorithm, BinaryTree, Visualizer, VisualizerOpts};
//!
//! # fn main() -> treeviz::TreevizResult<()> {
//! let tree = BinaryTree::bst_from_values(["m", "f", "t", "c", "h"]);
//! let root = tree.root().expect("non-empty");
//!
//! let mut opts = VisualizerOpts::default();
//! opts.sequencer.dir = "frames/".to_owned();
//! let mut viz = Visualizer::with_default_engine(opts)?;
//! viz.sketch(root)?;
//! let found = viz.search(root, Algorithm::Ordered, Some("h"))?;
//! assert!(found);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod frames;
mod graph;
mod layout;
mod render;
mod session;
mod traversal;
mod tree;

pub use foundation::core::{Canvas, Point, Size, Vec2, inches_to_px};
pub use foundation::error::{TreevizError, TreevizResult};
pub use frames::sequencer::{FrameSequencer, SequencerOpts, compute_file_path};
pub use graph::attrs::{
    ArrowHead, DEFAULT_FILL, EdgeDefaults, EdgeStyle, GraphAttrs, INVISIBLE_EDGE_COLOR,
    INVISIBLE_EDGE_WEIGHT, NodeDefaults, NodeShape, NodeStyle, SearchColors, VISIBLE_EDGE_WEIGHT,
};
pub use graph::state::{GraphState, NodeHandle, Scene, SceneEdge, SceneNode};
pub use layout::tidy::{TreeLayout, layout_scene};
pub use render::dot::{DotEngine, scene_to_dot};
pub use render::engine::{OutputFormat, RenderEngine, create_engine};
pub use render::raster::RasterEngine;
pub use render::svg::{SvgEngine, scene_to_svg};
pub use session::visualizer::{FrameManifest, Visualizer, VisualizerOpts};
pub use traversal::algorithm::{
    Algorithm, MISSING_LEFT_MARKER, MISSING_RIGHT_MARKER, RenderSink, WorkList,
};
pub use traversal::engine::search;
pub use tree::model::{BinaryTree, NodeRef, TreeSpec};
pub use tree::node::TreeNode;
