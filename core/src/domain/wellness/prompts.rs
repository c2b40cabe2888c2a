use crate::domain::wellness::value_objects::{HabitPlanInput, MoodPlanInput, StressAnalysisInput};

pub const HABIT_SYSTEM_PROMPT: &str = "You ONLY return JSON.";
pub const MOOD_SYSTEM_PROMPT: &str = "You are an AI mood planner that outputs ONLY JSON.";
pub const STRESS_SYSTEM_PROMPT: &str =
    "You are a stress & burnout analysis AI that outputs ONLY JSON.";

pub fn habit_plan_prompt(input: &HabitPlanInput) -> String {
    format!(
        r#"You are an AI habit and routine planner.

RETURN ONLY PURE JSON. NO backticks. NO explanation. NO text outside JSON.

User Info:
- Wake Time: {wake}
- Sleep Time: {sleep}
- Goal: {goal}
- Habits: {habits}

Output format:

{{
  "schedule": [
    {{ "time": "6:00 AM", "task": "Wake up", "duration": "10 min" }},
    {{ "time": "6:10 AM", "task": "Meditation", "duration": "15 min" }}
  ],
  "notes": "Summary here"
}}"#,
        wake = input.wake_time,
        sleep = input.sleep_time,
        goal = input.goal,
        habits = input.habits.join(", "),
    )
}

pub fn mood_plan_prompt(input: &MoodPlanInput) -> String {
    format!(
        r#"Create a personalized daily plan based on the user's mood and energy.

User Input:
- Mood: {mood}
- Sleep Quality: {sleep}
- Energy Level: {energy}
- Workload: {workload}
- Notes: {notes}

Rules:
- Adjust workout intensity based on energy
- Reduce tasks if user feels stressed/tired
- Add breaks if overwhelmed
- Increase productivity tasks if feeling good
- Recommend water, food, and rest
- Return ONLY JSON (no backticks)

Output Format:
{{
  "adjustedPlan": [
    {{ "time": "9:00 AM", "task": "Light workout", "reason": "Low energy" }}
  ],
  "recommendations": [
    "Drink more water",
    "Take short breaks"
  ],
  "summary": "AI explanation here"
}}"#,
        mood = input.mood,
        sleep = input.sleep_quality,
        energy = input.energy_level,
        workload = input.workload,
        notes = input.notes.as_deref().unwrap_or("none"),
    )
}

pub fn stress_analysis_prompt(input: &StressAnalysisInput) -> String {
    format!(
        r#"Analyze the user's stress and burnout risk using psychology-based patterns.

User Info:
- Sleep Hours: {sleep}
- Work Hours: {work}
- Physical Activity: {activity}
- Mood: {mood}
- Fatigue Level: {fatigue}

Rules:
- Calculate burnout risk score (0-100)
- Determine stress level (Low, Medium, High, Critical)
- Suggest rest, hydration, sleep improvements
- Suggest reducing workload if required
- Return ONLY JSON

Output Format:
{{
  "burnoutScore": 67,
  "stressLevel": "High",
  "analysis": "User is experiencing lack of sleep and high workload.",
  "recommendations": [
    "Take a 20 minute break",
    "Reduce workload",
    "Increase sleep to 7 hours"
  ]
}}"#,
        sleep = input.sleep_hours,
        work = input.work_hours,
        activity = input.physical_activity,
        mood = input.mood,
        fatigue = input.fatigue_level,
    )
}
