use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_HISTORY_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    /// Any value other than exactly `male` or `female`.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
    #[serde(other)]
    Unspecified,
}

impl ActivityLevel {
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary | ActivityLevel::Unspecified => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::Unspecified => "unspecified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DietaryGoal {
    Lose,
    Gain,
    #[default]
    #[serde(other)]
    Maintain,
}

impl DietaryGoal {
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            DietaryGoal::Lose => -300.0,
            DietaryGoal::Maintain => 0.0,
            DietaryGoal::Gain => 300.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryGoal::Lose => "lose",
            DietaryGoal::Maintain => "maintain",
            DietaryGoal::Gain => "gain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub dietary_goal: DietaryGoal,
    pub is_vegetarian: bool,
    pub allergies: Vec<String>,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 25,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Moderate,
            dietary_goal: DietaryGoal::Maintain,
            is_vegetarian: false,
            allergies: Vec::new(),
            email: "user@example.com".to_string(),
        }
    }
}

impl UserProfile {
    pub fn constraints(&self) -> DietaryConstraints {
        DietaryConstraints {
            vegetarian: self.is_vegetarian,
            allergies: self.allergies.clone(),
        }
    }
}

/// Restrictions a generated plan must honour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietaryConstraints {
    pub vegetarian: bool,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SaveMealPlanInput {
    pub email: String,
    pub profile: UserProfile,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetMealPlanHistoryInput {
    pub email: String,
    pub days: u32,
}

#[derive(Debug, Clone)]
pub struct UpdateMealPlanNotesInput {
    pub email: String,
    pub doc_id: Uuid,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteMealPlanInput {
    pub email: String,
    pub doc_id: Uuid,
}

/// Storage key for a user: `@` and `.` replaced by `-`.
pub fn normalize_email(email: &str) -> String {
    email.replace(['@', '.'], "-")
}
