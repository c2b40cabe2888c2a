pub use super::meal_plans::Entity as MealPlans;
