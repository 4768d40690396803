pub mod model;
pub mod node;
