pub mod common;
pub mod embedding;
pub mod llm;
pub mod meal_plan;
pub mod recipe;
pub mod vector_index;
pub mod wellness;
