use ferrisfit_core::domain::wellness::value_objects::{
    HabitPlanInput, MoodPlanInput, StressAnalysisInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitPlanValidator {
    #[validate(length(min = 1, message = "wakeTime is required"))]
    pub wake_time: String,

    #[validate(length(min = 1, message = "sleepTime is required"))]
    pub sleep_time: String,

    #[serde(default)]
    pub habits: Vec<String>,

    #[validate(length(min = 1, message = "goal is required"))]
    pub goal: String,
}

impl From<HabitPlanValidator> for HabitPlanInput {
    fn from(payload: HabitPlanValidator) -> Self {
        Self {
            wake_time: payload.wake_time,
            sleep_time: payload.sleep_time,
            habits: payload.habits,
            goal: payload.goal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodPlanValidator {
    #[validate(length(min = 1, message = "mood is required"))]
    pub mood: String,

    #[validate(length(min = 1, message = "sleepQuality is required"))]
    pub sleep_quality: String,

    #[validate(length(min = 1, message = "energyLevel is required"))]
    pub energy_level: String,

    #[validate(length(min = 1, message = "workload is required"))]
    pub workload: String,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<MoodPlanValidator> for MoodPlanInput {
    fn from(payload: MoodPlanValidator) -> Self {
        Self {
            mood: payload.mood,
            sleep_quality: payload.sleep_quality,
            energy_level: payload.energy_level,
            workload: payload.workload,
            notes: payload.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StressAnalysisValidator {
    #[validate(range(min = 0.0, max = 24.0, message = "sleepHours must be between 0 and 24"))]
    pub sleep_hours: f64,

    #[validate(range(min = 0.0, max = 24.0, message = "workHours must be between 0 and 24"))]
    pub work_hours: f64,

    #[validate(length(min = 1, message = "physicalActivity is required"))]
    pub physical_activity: String,

    #[validate(length(min = 1, message = "mood is required"))]
    pub mood: String,

    #[validate(length(min = 1, message = "fatigueLevel is required"))]
    pub fatigue_level: String,
}

impl From<StressAnalysisValidator> for StressAnalysisInput {
    fn from(payload: StressAnalysisValidator) -> Self {
        Self {
            sleep_hours: payload.sleep_hours,
            work_hours: payload.work_hours,
            physical_activity: payload.physical_activity,
            mood: payload.mood,
            fatigue_level: payload.fatigue_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_plan_uses_camel_case() {
        let body: HabitPlanValidator = serde_json::from_str(
            r#"{"wakeTime": "6:00 AM", "sleepTime": "10:30 PM", "habits": ["reading"], "goal": "focus"}"#,
        )
        .unwrap();
        assert!(body.validate().is_ok());
        assert_eq!(HabitPlanInput::from(body).wake_time, "6:00 AM");
    }

    #[test]
    fn test_stress_hours_are_bounded() {
        let body: StressAnalysisValidator = serde_json::from_str(
            r#"{"sleepHours": 30, "workHours": 9, "physicalActivity": "walk", "mood": "ok", "fatigueLevel": "low"}"#,
        )
        .unwrap();
        let errors = body.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }
}
