use std::path::PathBuf;

/// Convenience result type used across treeviz.
pub type TreevizResult<T> = Result<T, TreevizError>;

/// Top-level error taxonomy used by session, traversal and rendering APIs.
///
/// A search that exhausts its work list without a match is not an error; it returns `Ok(false)`.
#[derive(thiserror::Error, Debug)]
pub enum TreevizError {
    /// Invalid user-provided options or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A tree node does not provide a capability traversal depends on.
    #[error("missing node capability: {0}")]
    MissingNodeCapability(String),

    /// The layout/render engine could not produce an image for the current scene.
    #[error("render error: {0}")]
    Render(String),

    /// Materializing a frame file failed.
    ///
    /// `frame` is the session frame counter value of the file that could not be written, so the
    /// caller can decide whether to resume from there or discard the partial sequence.
    #[error("failed to write frame {frame} to '{}': {source}", .path.display())]
    RenderWrite {
        /// Frame counter value at the time of failure.
        frame: u64,
        /// Target file path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: anyhow::Error,
    },

    /// Errors when serializing or deserializing options, trees or manifests.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TreevizError {
    /// Build a [`TreevizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TreevizError::MissingNodeCapability`] value.
    pub fn missing_capability(msg: impl Into<String>) -> Self {
        Self::MissingNodeCapability(msg.into())
    }

    /// Build a [`TreevizError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TreevizError::RenderWrite`] value.
    pub fn render_write(frame: u64, path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::RenderWrite {
            frame,
            path: path.into(),
            source,
        }
    }

    /// Build a [`TreevizError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Frame counter value carried by a [`TreevizError::RenderWrite`], if any.
    pub fn failed_frame(&self) -> Option<u64> {
        match self {
            Self::RenderWrite { frame, .. } => Some(*frame),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
