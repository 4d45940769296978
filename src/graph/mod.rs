//! Graph output types and an indexed view for inspection.

pub mod index;
pub mod types;

pub use index::GraphIndex;
pub use types::*;
