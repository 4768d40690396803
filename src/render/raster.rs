use std::{io::Cursor, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Canvas, Size},
        error::{TreevizError, TreevizResult},
    },
    graph::state::Scene,
    render::{
        engine::{OutputFormat, RenderEngine},
        svg::scene_to_svg,
    },
};

/// Rasterizes frames to PNG through `usvg`/`resvg`.
///
/// System fonts are loaded once per engine and shared by every frame.
pub struct RasterEngine {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for RasterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterEngine")
            .field("font_faces", &self.fontdb.faces().count())
            .finish()
    }
}

impl Default for RasterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterEngine {
    /// Engine with the system fonts loaded.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::with_fontdb(Arc::new(db))
    }

    /// Engine sharing an already loaded font database.
    pub fn with_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// Rasterize `scene` into straight-alpha RGBA8 pixels.
    pub fn rasterize(&self, scene: &Scene) -> TreevizResult<(Canvas, Vec<u8>)> {
        let svg = scene_to_svg(scene);
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| TreevizError::render(format!("parse scene svg: {e}")))?;

        let size = tree.size();
        let canvas = Canvas::from_size(Size::new(
            f64::from(size.width()),
            f64::from(size.height()),
        ))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| TreevizError::render("failed to allocate frame pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let mut rgba = pixmap.take();
        unpremultiply_rgba8_in_place(&mut rgba);
        Ok((canvas, rgba))
    }
}

impl RenderEngine for RasterEngine {
    fn format(&self) -> OutputFormat {
        OutputFormat::Png
    }

    fn render(&mut self, scene: &Scene) -> TreevizResult<Vec<u8>> {
        let (canvas, rgba) = self.rasterize(scene)?;
        let img = image::RgbaImage::from_raw(canvas.width, canvas.height, rgba)
            .ok_or_else(|| TreevizError::render("frame buffer size mismatch"))?;

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode frame png")?;
        Ok(buf)
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
