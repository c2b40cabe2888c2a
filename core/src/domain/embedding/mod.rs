pub mod entities;
pub mod fallback;
pub mod ports;
pub mod services;
pub mod similarity;

pub use entities::*;
pub use ports::EmbeddingClient;
pub use services::EmbeddingProvider;
