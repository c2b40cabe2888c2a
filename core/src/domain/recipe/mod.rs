pub mod catalog;
pub mod entities;
pub mod filter;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use catalog::RecipeCatalog;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
