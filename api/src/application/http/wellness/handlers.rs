pub mod analyze_stress;
pub mod generate_habit_plan;
pub mod generate_mood_plan;
