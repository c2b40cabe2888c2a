use crate::domain::recipe::{entities::Recipe, value_objects::RecipeCriteria};

/// Deterministic structured query over the corpus.
///
/// Predicates run in sequence (vegetarian, cuisine, allergens, calories,
/// protein) and the first `top_k` survivors are returned in corpus order.
pub fn search_recipes(recipes: &[Recipe], criteria: &RecipeCriteria) -> Vec<Recipe> {
    let allergens: Vec<&str> = criteria
        .allergies
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();

    recipes
        .iter()
        .filter(|r| criteria.vegetarian.is_none_or(|v| r.vegetarian == v))
        .filter(|r| criteria.cuisines.is_empty() || criteria.cuisines.contains(&r.cuisine))
        .filter(|r| !allergens.iter().any(|a| r.has_allergen(a)))
        .filter(|r| criteria.calorie_range.contains(r.calories))
        .filter(|r| r.protein >= criteria.protein_min)
        .take(criteria.top_k)
        .cloned()
        .collect()
}
