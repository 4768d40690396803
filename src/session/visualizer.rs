use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{TreevizError, TreevizResult},
    frames::sequencer::{FrameSequencer, SequencerOpts},
    graph::{
        attrs::{EdgeDefaults, GraphAttrs, NodeDefaults, NodeStyle, SearchColors},
        state::GraphState,
    },
    render::engine::{OutputFormat, RenderEngine, create_engine},
    traversal::{
        algorithm::{Algorithm, RenderSink},
        engine::search,
    },
    tree::node::TreeNode,
};

/// Session options. Every field has a default, so a partial JSON object is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerOpts {
    /// Frame naming and duplication.
    pub sequencer: SequencerOpts,
    /// Graph-level attributes.
    pub graph: GraphAttrs,
    /// Node defaults.
    pub node: NodeDefaults,
    /// Edge defaults.
    pub edge: EdgeDefaults,
    /// Search highlight colors.
    pub colors: SearchColors,
    /// Engine used by [`Visualizer::with_default_engine`].
    pub format: OutputFormat,
}

impl VisualizerOpts {
    /// Parse and validate options JSON.
    pub fn from_json_str(s: &str) -> TreevizResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| TreevizError::serde(format!("visualizer options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Read options JSON from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> TreevizResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check sequencer options and that lengths are finite and non-negative.
    pub fn validate(&self) -> TreevizResult<()> {
        self.sequencer.validate()?;
        let g = &self.graph;
        if !(g.dpi.is_finite() && g.dpi > 0.0) {
            return Err(TreevizError::validation("graph dpi must be > 0"));
        }
        for (name, v) in [
            ("nodesep", g.nodesep),
            ("ranksep", g.ranksep),
            ("pad", g.pad),
            ("node width", self.node.width),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(TreevizError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if let Some((w, h)) = g.size
            && !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0)
        {
            return Err(TreevizError::validation("graph size must be positive"));
        }
        Ok(())
    }
}

/// Ordered frame list handed to downstream players and encoders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameManifest {
    /// One path per emitted frame, in emission order.
    pub frames: Vec<PathBuf>,
    /// Counter value of the last file written.
    pub frame_count: u64,
    /// Counter value of the first file written.
    pub first_frame: u64,
    /// Encoding of every frame file.
    pub format: OutputFormat,
}

/// Renders traversals of a tree as a numbered frame sequence.
///
/// One visualizer is one session: its frame counter is monotonic across every call, and what has
/// been drawn persists until [`Visualizer::clear_scene`].
pub struct Visualizer {
    graph: GraphState,
    sequencer: FrameSequencer,
    engine: Box<dyn RenderEngine>,
    colors: SearchColors,
    frames: Vec<PathBuf>,
}

impl std::fmt::Debug for Visualizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualizer")
            .field("format", &self.engine.format())
            .field("frame_count", &self.sequencer.frame_count())
            .field("frames", &self.frames.len())
            .finish()
    }
}

impl Visualizer {
    /// Start a session rendering through `engine`.
    pub fn new(opts: VisualizerOpts, engine: Box<dyn RenderEngine>) -> TreevizResult<Self> {
        opts.validate()?;
        if !opts
            .sequencer
            .extension
            .eq_ignore_ascii_case(engine.format().default_extension())
        {
            tracing::warn!(
                extension = %opts.sequencer.extension,
                format = ?engine.format(),
                "frame extension does not match output format"
            );
        }
        Ok(Self {
            graph: GraphState::new(opts.graph, opts.node, opts.edge),
            sequencer: FrameSequencer::new(opts.sequencer)?,
            engine,
            colors: opts.colors,
            frames: Vec::new(),
        })
    }

    /// Build with the built-in engine for `opts.format`.
    pub fn with_default_engine(opts: VisualizerOpts) -> TreevizResult<Self> {
        let engine = create_engine(opts.format);
        Self::new(opts, engine)
    }

    /// Run `algorithm` from `root`, highlighting and emitting frames as it goes.
    ///
    /// Returns whether `target` was found. A missing target is `Ok(false)`; so is a walk without
    /// a target.
    #[tracing::instrument(skip(self, root), fields(root = %root))]
    pub fn search<N: TreeNode>(
        &mut self,
        root: N,
        algorithm: Algorithm,
        target: Option<&str>,
    ) -> TreevizResult<bool> {
        self.graph.begin_pass();
        let before = self.frames.len();
        let mut sink = SessionSink {
            graph: &mut self.graph,
            sequencer: &mut self.sequencer,
            engine: self.engine.as_mut(),
            frames: &mut self.frames,
        };
        let found = search(root, algorithm, target, &self.colors, &mut sink)?;
        tracing::debug!(
            found,
            frames = self.frames.len() - before,
            frame_count = self.sequencer.frame_count(),
            "search finished"
        );
        Ok(found)
    }

    /// Draw the complete tree and persist it as one frame.
    pub fn sketch<N: TreeNode>(&mut self, root: N) -> TreevizResult<PathBuf> {
        self.search(root, Algorithm::Sketch, None)?;
        self.emit_frame()
    }

    /// Persist the current drawing and record it in the frame list.
    pub fn emit_frame(&mut self) -> TreevizResult<PathBuf> {
        let path = self
            .sequencer
            .emit(self.engine.as_mut(), self.graph.scene())?;
        self.frames.push(path.clone());
        Ok(path)
    }

    /// Emitted frame paths, in emission order.
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    /// Counter value of the last file written.
    pub fn frame_count(&self) -> u64 {
        self.sequencer.frame_count()
    }

    /// Files written by this session.
    pub fn frames_written(&self) -> u64 {
        self.sequencer.frames_written()
    }

    /// Path a given counter value maps to.
    pub fn file_path(&self, counter: u64) -> PathBuf {
        self.sequencer.file_path(counter)
    }

    /// Path most recently written, if any.
    pub fn current_file_path(&self) -> Option<&Path> {
        self.sequencer.current_file_path()
    }

    /// Drawing state.
    pub fn graph(&self) -> &GraphState {
        &self.graph
    }

    /// Change the copies written per frame.
    pub fn set_duplicate_frames(&mut self, n: u32) -> TreevizResult<()> {
        self.sequencer.set_duplicate_frames(n)
    }

    /// Replace graph-level attributes.
    pub fn set_graph_attrs(&mut self, attrs: GraphAttrs) {
        self.graph.set_graph_attrs(attrs);
    }

    /// Replace node defaults.
    pub fn set_node_defaults(&mut self, defaults: NodeDefaults) {
        self.graph.set_node_defaults(defaults);
    }

    /// Replace edge defaults.
    pub fn set_edge_defaults(&mut self, defaults: EdgeDefaults) {
        self.graph.set_edge_defaults(defaults);
    }

    /// Forget everything drawn so far. The frame counter and frame list are kept.
    pub fn clear_scene(&mut self) {
        self.graph.clear();
    }

    /// Snapshot of the frames emitted so far.
    pub fn manifest(&self) -> FrameManifest {
        FrameManifest {
            frames: self.frames.clone(),
            frame_count: self.sequencer.frame_count(),
            first_frame: self.sequencer.opts().start_count + 1,
            format: self.engine.format(),
        }
    }

    /// Write [`Visualizer::manifest`] as pretty JSON, creating parent directories.
    pub fn write_manifest(&self, path: impl AsRef<Path>) -> TreevizResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.manifest())
            .map_err(|e| TreevizError::serde(format!("frame manifest: {e}")))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create manifest directory '{}'", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("write manifest '{}'", path.display()))?;
        Ok(())
    }
}

/// Borrowed view of a session wired as the traversal's render sink.
struct SessionSink<'a> {
    graph: &'a mut GraphState,
    sequencer: &'a mut FrameSequencer,
    engine: &'a mut dyn RenderEngine,
    frames: &'a mut Vec<PathBuf>,
}

impl RenderSink for SessionSink<'_> {
    fn draw(
        &mut self,
        parent: &str,
        child: Option<&str>,
        fill: Option<&str>,
        style: NodeStyle,
    ) -> TreevizResult<()> {
        self.graph.draw(parent, child, fill, style);
        Ok(())
    }

    fn highlight(&mut self, label: &str, color: &str) -> TreevizResult<()> {
        self.graph.highlight(label, color);
        Ok(())
    }

    fn emit_frame(&mut self) -> TreevizResult<()> {
        let path = self.sequencer.emit(self.engine, self.graph.scene())?;
        self.frames.push(path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/visualizer.rs"]
mod tests;
