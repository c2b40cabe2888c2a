pub mod ports;
pub mod response;
pub mod value_objects;

pub use ports::LLMClient;
pub use value_objects::*;
