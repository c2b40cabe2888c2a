use rand::seq::SliceRandom;

use crate::domain::{
    meal_plan::{
        entities::{MealSlot, RecipeContext},
        value_objects::{Gender, UserProfile},
    },
    recipe::entities::Recipe,
};

pub const MEAL_PLAN_SYSTEM_PROMPT: &str = "You are a professional nutritionist. Return ONLY valid JSON. STRICTLY RESPECT DIETARY RESTRICTIONS AND ALLERGIES. Prefer recipes from the provided database.";

pub const MEAL_PLAN_TEMPERATURE: f32 = 1.0;
pub const MEAL_PLAN_MAX_TOKENS: u32 = 1500;

pub const FOCUS_CUISINES: [&str; 7] = [
    "Indian",
    "Mediterranean",
    "Asian",
    "Mexican",
    "Thai",
    "Middle Eastern",
    "Italian",
];

pub fn random_focus_cuisine() -> &'static str {
    FOCUS_CUISINES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Indian")
}

fn reference_list(recipes: &[Recipe], slot: MealSlot) -> String {
    if recipes.is_empty() {
        return format!("- Standard {} options", slot);
    }

    recipes
        .iter()
        .map(|r| format!("- {} ({}cal, {}g protein)", r.name, r.calories, r.protein))
        .collect::<Vec<_>>()
        .join("\n")
}

fn share(calories: u32, fraction: f64) -> i64 {
    (f64::from(calories) * fraction).round() as i64
}

/// Renders the full meal plan prompt around the retrieved recipes.
pub fn build_meal_plan_prompt(
    profile: &UserProfile,
    target_calories: u32,
    context: &RecipeContext,
    focus_cuisine: &str,
) -> String {
    let gender = match profile.gender {
        Gender::Male => "male",
        Gender::Female => "female",
        Gender::Other => "other",
    };

    let diet_type = if profile.is_vegetarian {
        "STRICTLY VEGETARIAN (no meat, fish, poultry, or seafood - only plant-based and dairy products)"
    } else {
        "non-vegetarian (can include meat, fish, chicken)"
    };

    let allergies = if profile.allergies.is_empty() {
        "none".to_string()
    } else {
        profile.allergies.join(", ")
    };

    let diet_directive = if profile.is_vegetarian {
        "- ABSOLUTELY NO CHICKEN, MEAT, FISH, SEAFOOD, OR EGGS\n- ONLY vegetarian options: beans, lentils, tofu, paneer, vegetables, nuts, seeds, dairy products, grains"
    } else {
        "- You can use all protein sources including chicken, fish, meat"
    };

    let c = target_calories;

    format!(
        r#"You are an expert nutritionist AI. Generate a PERSONALIZED daily meal plan using the provided recipe database.

RAG RECIPE DATABASE - SUITABLE OPTIONS FOR THIS USER:
BREAKFAST OPTIONS:
{breakfast}

LUNCH OPTIONS:
{lunch}

DINNER OPTIONS:
{dinner}

SNACK OPTIONS:
{snacks}

USER PROFILE:
- Age: {age} years
- Gender: {gender}
- Height: {height} cm
- Weight: {weight} kg
- Activity Level: {activity}
- Dietary Goal: {goal}
- Diet Type: {diet_type}
- Allergies/Restrictions: {allergies}
- Daily Calorie Target: {c} calories

STRICT REQUIREMENTS FOR THIS MEAL PLAN:
{diet_directive}
- MUST AVOID all allergies: {allergies}
- PREFERRED USE: Select recipes from the provided database when possible
- Focus cuisine: {focus_cuisine}
- Create UNIQUE meals - NOT generic suggestions
- Realistic portions and macro distribution

MEAL DISTRIBUTION (target {c} calories):
- Breakfast: 25-30% ({b_lo}-{b_hi} cal)
- Lunch: 35-40% ({l_lo}-{l_hi} cal)
- Snacks: 5-10% ({s_lo}-{s_hi} cal)
- Dinner: 25-30% ({d_lo}-{d_hi} cal)

For EACH meal item provide: name, quantity, calories, protein(g), carbs(g), fats(g)

RETURN ONLY VALID JSON (NO EXTRA TEXT):
{{
  "breakfast": [{{"item": "name", "quantity": "amount", "calories": 300, "protein_g": 10, "carbs_g": 45, "fats_g": 8}}],
  "lunch": [...],
  "snacks": [...],
  "dinner": [...],
  "total_calories": {c},
  "total_protein_g": 0,
  "total_carbs_g": 0,
  "total_fats_g": 0,
  "summary": "Personalized meal plan summary for this user"
}}"#,
        breakfast = reference_list(&context.breakfast, MealSlot::Breakfast),
        lunch = reference_list(&context.lunch, MealSlot::Lunch),
        dinner = reference_list(&context.dinner, MealSlot::Dinner),
        snacks = reference_list(&context.snacks, MealSlot::Snacks),
        age = profile.age,
        height = profile.height_cm,
        weight = profile.weight_kg,
        activity = profile.activity_level.as_str(),
        goal = profile.dietary_goal.as_str(),
        b_lo = share(c, 0.25),
        b_hi = share(c, 0.30),
        l_lo = share(c, 0.35),
        l_hi = share(c, 0.40),
        s_lo = share(c, 0.05),
        s_hi = share(c, 0.10),
        d_lo = share(c, 0.25),
        d_hi = share(c, 0.30),
    )
}
