use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    meal_plan::{
        entities::meal_plan::GeneratedMealPlan,
        value_objects::{ActivityLevel, DietaryGoal, Gender, UserProfile, normalize_email},
    },
};

/// Subset of the profile stored next to a saved plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileSnapshot {
    pub age: u32,
    pub gender: Gender,
    pub is_vegetarian: bool,
    pub dietary_goal: DietaryGoal,
    pub activity_level: ActivityLevel,
    pub allergies: Vec<String>,
}

impl From<&UserProfile> for ProfileSnapshot {
    fn from(profile: &UserProfile) -> Self {
        Self {
            age: profile.age,
            gender: profile.gender,
            is_vegetarian: profile.is_vegetarian,
            dietary_goal: profile.dietary_goal,
            activity_level: profile.activity_level,
            allergies: profile.allergies.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanRecord {
    pub id: Uuid,
    pub user_key: String,
    pub email: String,
    pub date: NaiveDate,
    pub plan: GeneratedMealPlan,
    pub profile: ProfileSnapshot,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealPlanRecord {
    pub fn new(
        email: String,
        plan: GeneratedMealPlan,
        profile: ProfileSnapshot,
        notes: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_key: normalize_email(&email),
            email,
            date: now.date_naive(),
            plan,
            profile,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Logical location of the record, `users/{user_key}/meal_history/{id}`.
    pub fn path(&self) -> String {
        format!("users/{}/meal_history/{}", self.user_key, self.id)
    }
}

/// Best-effort persistence result; a failed save never fails generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveOutcome {
    pub saved: bool,
    pub doc_id: Option<Uuid>,
    pub path: Option<String>,
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn saved(record: &MealPlanRecord) -> Self {
        Self {
            saved: true,
            doc_id: Some(record.id),
            path: Some(record.path()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            saved: false,
            doc_id: None,
            path: None,
            error: Some(error.into()),
        }
    }
}
