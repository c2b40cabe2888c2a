pub mod delete_meal_plan;
pub mod generate_meal_plan;
pub mod get_meal_plan_history;
pub mod update_meal_plan_notes;
