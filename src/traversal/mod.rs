pub mod algorithm;
pub mod engine;
