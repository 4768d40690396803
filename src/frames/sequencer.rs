use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{TreevizError, TreevizResult},
    graph::state::Scene,
    render::engine::RenderEngine,
};

/// Frame file naming and duplication options.
///
/// Paths are `dir + base_name + counter:05 + extension`, concatenated as plain strings, so `dir`
/// should end with a path separator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerOpts {
    /// Directory prefix, including the trailing separator.
    pub dir: String,
    /// File name stem before the counter.
    pub base_name: String,
    /// File suffix, including the dot.
    pub extension: String,
    /// Identical copies written per emitted frame; stretches the animation timeline.
    pub duplicate_frames: u32,
    /// Counter value before the first write. The first file is numbered `start_count + 1`.
    pub start_count: u64,
}

impl Default for SequencerOpts {
    fn default() -> Self {
        Self {
            dir: String::new(),
            base_name: "bst_graph".to_owned(),
            extension: ".png".to_owned(),
            duplicate_frames: 1,
            start_count: 0,
        }
    }
}

impl SequencerOpts {
    /// Reject zero duplicates and an empty extension.
    pub fn validate(&self) -> TreevizResult<()> {
        if self.duplicate_frames == 0 {
            return Err(TreevizError::validation("duplicate_frames must be >= 1"));
        }
        if self.extension.is_empty() {
            return Err(TreevizError::validation("frame extension must be non-empty"));
        }
        Ok(())
    }
}

/// Owns the session frame counter and persists rendered frames as numbered files.
#[derive(Debug)]
pub struct FrameSequencer {
    opts: SequencerOpts,
    count: u64,
    current: Option<PathBuf>,
}

impl FrameSequencer {
    /// Validate `opts` and start counting at `opts.start_count`.
    pub fn new(opts: SequencerOpts) -> TreevizResult<Self> {
        opts.validate()?;
        Ok(Self {
            count: opts.start_count,
            opts,
            current: None,
        })
    }

    /// Current options.
    pub fn opts(&self) -> &SequencerOpts {
        &self.opts
    }

    /// Change the copies written per frame for subsequent emits.
    pub fn set_duplicate_frames(&mut self, n: u32) -> TreevizResult<()> {
        if n == 0 {
            return Err(TreevizError::validation("duplicate_frames must be >= 1"));
        }
        self.opts.duplicate_frames = n;
        Ok(())
    }

    /// Path a given counter value maps to. Independent of sequencer state.
    pub fn file_path(&self, counter: u64) -> PathBuf {
        compute_file_path(
            &self.opts.dir,
            &self.opts.base_name,
            counter,
            &self.opts.extension,
        )
    }

    /// Path most recently written, if any.
    pub fn current_file_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Counter value of the last written file (`start_count` before any write).
    pub fn frame_count(&self) -> u64 {
        self.count
    }

    /// Files written by this sequencer.
    pub fn frames_written(&self) -> u64 {
        self.count - self.opts.start_count
    }

    /// Render `scene` once and write it to `duplicate_frames` consecutive files.
    ///
    /// Returns the last path written. On a failed write the counter and
    /// [`current_file_path`](Self::current_file_path) stay at the last file that was written, and
    /// the error carries the counter value that failed.
    pub fn emit(&mut self, engine: &mut dyn RenderEngine, scene: &Scene) -> TreevizResult<PathBuf> {
        let bytes = engine.render(scene)?;
        let mut last = None;
        for _ in 0..self.opts.duplicate_frames {
            let counter = self
                .count
                .checked_add(1)
                .ok_or_else(|| TreevizError::validation("frame counter overflow"))?;
            let path = self.file_path(counter);
            write_frame(&path, &bytes)
                .map_err(|source| TreevizError::render_write(counter, &path, source))?;
            tracing::trace!(counter, path = %path.display(), "wrote frame");
            self.count = counter;
            self.current = Some(path.clone());
            last = Some(path);
        }

        last.ok_or_else(|| TreevizError::validation("duplicate_frames must be >= 1"))
    }
}

/// `dir + base_name + counter:05 + extension`.
pub fn compute_file_path(dir: &str, base_name: &str, counter: u64, extension: &str) -> PathBuf {
    PathBuf::from(format!("{dir}{base_name}{counter:05}{extension}"))
}

fn write_frame(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create frame directory '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write frame '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/frames/sequencer.rs"]
mod tests;
