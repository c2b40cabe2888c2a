use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitPlanInput {
    pub wake_time: String,
    pub sleep_time: String,
    pub habits: Vec<String>,
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPlanInput {
    pub mood: String,
    pub sleep_quality: String,
    pub energy_level: String,
    pub workload: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysisInput {
    pub sleep_hours: f64,
    pub work_hours: f64,
    pub physical_activity: String,
    pub mood: String,
    pub fatigue_level: String,
}
