pub mod prelude;

pub mod meal_plans;
