pub mod meal_plan;
pub mod meal_plan_record;

pub use meal_plan::*;
pub use meal_plan_record::*;
