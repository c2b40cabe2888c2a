use ferrisfit_core::domain::meal_plan::value_objects::{
    ActivityLevel, DietaryGoal, Gender, UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_save() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMealPlanValidator {
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default)]
    pub gender: Gender,

    #[validate(range(min = 50.0, max = 272.0, message = "height_cm is out of range"))]
    #[serde(default = "default_height")]
    pub height_cm: f64,

    #[validate(range(min = 20.0, max = 400.0, message = "weight_kg is out of range"))]
    #[serde(default = "default_weight")]
    pub weight_kg: f64,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub dietary_goal: DietaryGoal,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    /// Persist the generated plan to the user's history.
    #[serde(default = "default_save")]
    pub save: bool,

    #[serde(default)]
    pub notes: Option<String>,
}

fn default_age() -> u32 {
    UserProfile::default().age
}

fn default_height() -> f64 {
    UserProfile::default().height_cm
}

fn default_weight() -> f64 {
    UserProfile::default().weight_kg
}

impl GenerateMealPlanValidator {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            gender: self.gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity_level,
            dietary_goal: self.dietary_goal,
            is_vegetarian: self.is_vegetarian,
            allergies: self.allergies.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMealPlanNotesValidator {
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MealPlanHistoryQuery {
    /// Look-back window in days, 30 by default.
    pub days: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_body_uses_profile_defaults() {
        let body: GenerateMealPlanValidator =
            serde_json::from_str(r#"{"email": "jane@example.com"}"#).unwrap();

        assert!(body.validate().is_ok());
        assert!(body.save);
        let profile = body.profile();
        assert_eq!(profile.age, 25);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_rejects_bad_email_and_age() {
        let body: GenerateMealPlanValidator =
            serde_json::from_str(r#"{"email": "not-an-email", "age": 0}"#).unwrap();

        let errors = body.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("age"));
    }

    #[test]
    fn test_accepts_unrecognised_gender_and_activity() {
        let body: GenerateMealPlanValidator = serde_json::from_str(
            r#"{"email": "jane@example.com", "gender": "Male", "activity_level": "extreme"}"#,
        )
        .unwrap();

        assert!(body.validate().is_ok());
        let profile = body.profile();
        assert_eq!(profile.gender, Gender::Other);
        assert_eq!(profile.activity_level, ActivityLevel::Unspecified);
    }
}
