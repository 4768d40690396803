use serde::{Deserialize, Serialize};

use crate::{foundation::error::TreevizResult, graph::state::Scene};

/// Encoded output format of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Rasterized PNG.
    #[default]
    Png,
    /// SVG document.
    Svg,
    /// Graphviz DOT source.
    Dot,
}

impl OutputFormat {
    /// Frame file suffix, including the dot.
    pub fn default_extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Svg => ".svg",
            Self::Dot => ".dot",
        }
    }
}

/// Turns the current [`Scene`] into the bytes of one frame file.
///
/// Engines do no file IO; persisting frames is the sequencer's job, which lets one render be
/// written to several duplicate files.
pub trait RenderEngine {
    /// Format of the bytes [`RenderEngine::render`] produces.
    fn format(&self) -> OutputFormat;

    /// Lay out and encode `scene`.
    fn render(&mut self, scene: &Scene) -> TreevizResult<Vec<u8>>;
}

/// Create the built-in engine for `format`.
pub fn create_engine(format: OutputFormat) -> Box<dyn RenderEngine> {
    match format {
        OutputFormat::Png => Box::new(crate::render::raster::RasterEngine::new()),
        OutputFormat::Svg => Box::new(crate::render::svg::SvgEngine),
        OutputFormat::Dot => Box::new(crate::render::dot::DotEngine),
    }
}
