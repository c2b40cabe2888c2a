pub mod entities;
pub mod index;

pub use entities::*;
pub use index::VectorIndex;
