pub mod db;
pub mod embedding;
pub mod llm;
pub mod meal_plan;
pub mod recipe;
