pub mod attrs;
pub mod state;
