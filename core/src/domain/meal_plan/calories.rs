use crate::domain::meal_plan::value_objects::{Gender, UserProfile};

/// Daily calorie target: Harris-Benedict BMR scaled by activity and
/// adjusted for the dietary goal.
pub fn calculate_target_calories(profile: &UserProfile) -> u32 {
    let age = f64::from(profile.age);
    let weight = profile.weight_kg;
    let height = profile.height_cm;

    let bmr = match profile.gender {
        Gender::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        _ => 447.593 + 9.247 * weight + 3.098 * height - 4.33 * age,
    };

    let tdee = bmr * profile.activity_level.factor() + profile.dietary_goal.calorie_adjustment();

    tdee.round().max(0.0) as u32
}
