use crate::domain::{
    meal_plan::{entities::RecipeContext, value_objects::UserProfile},
    recipe::{
        entities::Recipe,
        value_objects::{CalorieRange, RecipeCriteria},
    },
};

const CANDIDATE_POOL_SIZE: usize = 15;
const VEGETARIAN_PROTEIN_FLOOR: f64 = 8.0;
const DEFAULT_PROTEIN_FLOOR: f64 = 15.0;

/// The broad criteria query every meal plan starts from.
pub fn candidate_criteria(profile: &UserProfile) -> RecipeCriteria {
    RecipeCriteria {
        vegetarian: Some(profile.is_vegetarian),
        allergies: profile.allergies.clone(),
        calorie_range: CalorieRange { min: 150, max: 500 },
        protein_min: if profile.is_vegetarian {
            VEGETARIAN_PROTEIN_FLOOR
        } else {
            DEFAULT_PROTEIN_FLOOR
        },
        cuisines: Vec::new(),
        top_k: CANDIDATE_POOL_SIZE,
    }
}

fn pick<F>(candidates: &[Recipe], limit: usize, predicate: F) -> Vec<Recipe>
where
    F: Fn(&Recipe) -> bool,
{
    candidates
        .iter()
        .filter(|r| predicate(r))
        .take(limit)
        .cloned()
        .collect()
}

/// Splits one candidate pool into overlapping per-slot suggestions.
pub fn split_by_slot(candidates: &[Recipe]) -> RecipeContext {
    RecipeContext {
        breakfast: pick(candidates, 3, |r| {
            r.description.to_lowercase().contains("breakfast") || r.calories < 300
        }),
        lunch: pick(candidates, 3, |r| (300..=450).contains(&r.calories)),
        dinner: pick(candidates, 3, |r| (250..=400).contains(&r.calories)),
        snacks: pick(candidates, 2, |r| r.calories < 200),
    }
}
