use crate::foundation::error::{TreevizError, TreevizResult};

pub use kurbo::{Point, Size, Vec2};

/// Pixel dimensions of a rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest edge accepted for a single frame.
    pub const MAX_DIM: u32 = 16_384;

    /// Validated canvas; both edges must be in `1..=MAX_DIM`.
    pub fn new(width: u32, height: u32) -> TreevizResult<Self> {
        if width == 0 || height == 0 {
            return Err(TreevizError::validation("canvas width/height must be non-zero"));
        }
        if width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(TreevizError::validation(format!(
                "canvas too large: {width}x{height} (max {max}x{max})",
                max = Self::MAX_DIM
            )));
        }
        Ok(Self { width, height })
    }

    /// Round a layout size (in pixels) up to a valid canvas.
    pub fn from_size(size: Size) -> TreevizResult<Self> {
        fn to_px(v: f64) -> TreevizResult<u32> {
            if !v.is_finite() || v < 0.0 {
                return Err(TreevizError::render("layout produced an invalid canvas size"));
            }
            Ok((v.ceil() as u32).max(1))
        }
        Self::new(to_px(size.width)?, to_px(size.height)?)
    }
}

/// Convert a Graphviz-style length in inches to pixels at `dpi`.
pub fn inches_to_px(inches: f64, dpi: f64) -> f64 {
    inches * dpi
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
