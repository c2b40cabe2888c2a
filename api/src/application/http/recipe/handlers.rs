pub mod get_recipe;
pub mod get_similar_recipes;
pub mod retrieve_recipes;
pub mod search_recipes;
