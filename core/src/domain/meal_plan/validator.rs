use tracing::{info, warn};

use crate::domain::{
    common::entities::app_errors::{CoreError, ViolationKind},
    meal_plan::{entities::MealPlan, value_objects::DietaryConstraints},
};

/// Item-name keywords that mark a dish as non-vegetarian.
///
/// Matching is by substring, so e.g. "eggplant" trips "egg".
pub const NON_VEGETARIAN_KEYWORDS: [&str; 13] = [
    "chicken", "meat", "beef", "mutton", "lamb", "pork", "fish", "shrimp", "prawn", "egg",
    "salmon", "tuna", "turkey",
];

/// Rejects a plan whose item names contain a forbidden keyword or allergen.
///
/// Items are scanned breakfast, lunch, snacks, dinner; for each item the
/// vegetarian keywords are checked before the allergens. The first match
/// aborts the scan.
pub fn validate_meal_plan(
    plan: &MealPlan,
    constraints: &DietaryConstraints,
) -> Result<(), CoreError> {
    let allergens: Vec<String> = constraints
        .allergies
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    for item in plan.items() {
        let name = item.name.to_lowercase();

        if constraints.vegetarian {
            if let Some(keyword) = NON_VEGETARIAN_KEYWORDS.iter().find(|k| name.contains(**k)) {
                warn!("Non-vegetarian item \"{}\" given to vegetarian user", item.name);
                return Err(CoreError::ConstraintViolation {
                    kind: ViolationKind::NonVegetarian,
                    item: item.name.clone(),
                    matched: keyword.to_string(),
                });
            }
        }

        if let Some(allergen) = allergens.iter().find(|a| name.contains(a.as_str())) {
            warn!("Allergen \"{}\" found in \"{}\"", allergen, item.name);
            return Err(CoreError::ConstraintViolation {
                kind: ViolationKind::Allergen,
                item: item.name.clone(),
                matched: allergen.clone(),
            });
        }
    }

    info!("Validation passed - meal plan is safe");
    Ok(())
}
