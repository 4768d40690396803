pub mod dot;
pub mod engine;
pub mod raster;
pub mod svg;
