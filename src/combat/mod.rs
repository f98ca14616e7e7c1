//! Turn-based battle resolution.

pub mod engine;
pub mod math;
pub mod types;

pub use engine::*;
pub use types::*;
