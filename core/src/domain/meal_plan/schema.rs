use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::entities::{MealItem, MealPlan, MealSlot},
};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Quantity {
    Text(String),
    Amount(serde_json::Number),
}

#[derive(Debug, Deserialize)]
struct MealItemPayload {
    item: String,
    #[serde(default)]
    quantity: Option<Quantity>,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fats_g: f64,
}

impl From<MealItemPayload> for MealItem {
    fn from(payload: MealItemPayload) -> Self {
        let quantity = match payload.quantity {
            Some(Quantity::Text(text)) => text,
            Some(Quantity::Amount(amount)) => amount.to_string(),
            None => String::new(),
        };

        MealItem {
            name: payload.item,
            quantity,
            calories: payload.calories,
            protein_g: payload.protein_g,
            carbs_g: payload.carbs_g,
            fats_g: payload.fats_g,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MealPlanPayload {
    breakfast: Vec<MealItemPayload>,
    lunch: Vec<MealItemPayload>,
    snacks: Vec<MealItemPayload>,
    dinner: Vec<MealItemPayload>,
    total_calories: Option<f64>,
    total_protein_g: Option<f64>,
    total_carbs_g: Option<f64>,
    total_fats_g: Option<f64>,
    #[serde(default)]
    summary: Option<String>,
}

fn malformed(error: serde_path_to_error::Error<serde_json::Error>) -> CoreError {
    let path = error.path().to_string();
    if path == "." {
        CoreError::MalformedResponse(error.into_inner().to_string())
    } else {
        CoreError::MalformedResponse(format!("{}: {}", path, error.into_inner()))
    }
}

/// Checks the model's JSON against the meal plan shape.
///
/// All four slot arrays and every per-item numeric field are required.
/// Missing totals are summed from the items; a missing summary is empty.
pub fn parse_meal_plan(value: &Value) -> Result<MealPlan, CoreError> {
    let payload: MealPlanPayload = serde_path_to_error::deserialize(value).map_err(malformed)?;

    for slot in MealSlot::ALL {
        let items = match slot {
            MealSlot::Breakfast => &payload.breakfast,
            MealSlot::Lunch => &payload.lunch,
            MealSlot::Snacks => &payload.snacks,
            MealSlot::Dinner => &payload.dinner,
        };
        if let Some(i) = items.iter().position(|item| item.item.trim().is_empty()) {
            return Err(CoreError::MalformedResponse(format!(
                "{}[{}].item: expected a non-empty string",
                slot, i
            )));
        }
    }

    let convert = |items: Vec<MealItemPayload>| -> Vec<MealItem> {
        items.into_iter().map(MealItem::from).collect()
    };

    let mut plan = MealPlan {
        breakfast: convert(payload.breakfast),
        lunch: convert(payload.lunch),
        snacks: convert(payload.snacks),
        dinner: convert(payload.dinner),
        total_calories: 0.0,
        total_protein_g: 0.0,
        total_carbs_g: 0.0,
        total_fats_g: 0.0,
        summary: payload.summary.unwrap_or_default(),
    };

    let sum = |f: fn(&MealItem) -> f64| -> f64 { plan.items().map(f).sum() };
    let total_calories = payload.total_calories.unwrap_or_else(|| sum(|i| i.calories));
    let total_protein_g = payload.total_protein_g.unwrap_or_else(|| sum(|i| i.protein_g));
    let total_carbs_g = payload.total_carbs_g.unwrap_or_else(|| sum(|i| i.carbs_g));
    let total_fats_g = payload.total_fats_g.unwrap_or_else(|| sum(|i| i.fats_g));

    plan.total_calories = total_calories;
    plan.total_protein_g = total_protein_g;
    plan.total_carbs_g = total_carbs_g;
    plan.total_fats_g = total_fats_g;

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(name: &str, calories: f64) -> Value {
        json!({
            "item": name,
            "quantity": "1 bowl",
            "calories": calories,
            "protein_g": 10,
            "carbs_g": 20.5,
            "fats_g": 3
        })
    }

    #[test]
    fn test_parses_complete_plan() {
        let value = json!({
            "breakfast": [item("Oats", 300.0)],
            "lunch": [item("Rajma Rice", 550.0)],
            "snacks": [],
            "dinner": [item("Palak Paneer", 450.0)],
            "total_calories": 1300,
            "total_protein_g": 30,
            "total_carbs_g": 61.5,
            "total_fats_g": 9,
            "summary": "Balanced"
        });

        let plan = parse_meal_plan(&value).unwrap();
        assert_eq!(plan.breakfast[0].name, "Oats");
        assert_eq!(plan.lunch[0].carbs_g, 20.5);
        assert!(plan.snacks.is_empty());
        assert_eq!(plan.total_calories, 1300.0);
        assert_eq!(plan.summary, "Balanced");
        assert_eq!(plan.items().count(), 3);
    }

    #[test]
    fn test_missing_totals_are_summed() {
        let value = json!({
            "breakfast": [item("Oats", 300.0)],
            "lunch": [item("Dal", 500.0)],
            "snacks": [],
            "dinner": []
        });

        let plan = parse_meal_plan(&value).unwrap();
        assert_eq!(plan.total_calories, 800.0);
        assert_eq!(plan.total_protein_g, 20.0);
        assert_eq!(plan.summary, "");
    }

    #[test]
    fn test_numeric_and_missing_quantity() {
        let value = json!({
            "breakfast": [{"item": "Banana", "quantity": 2, "calories": 210,
                           "protein_g": 2, "carbs_g": 54, "fats_g": 0.8}],
            "lunch": [{"item": "Dal", "calories": 300,
                       "protein_g": 18, "carbs_g": 40, "fats_g": 6}],
            "snacks": [],
            "dinner": []
        });

        let plan = parse_meal_plan(&value).unwrap();
        assert_eq!(plan.breakfast[0].quantity, "2");
        assert_eq!(plan.lunch[0].quantity, "");
    }

    #[test]
    fn test_missing_slot_is_reported() {
        let value = json!({ "breakfast": [], "lunch": [], "dinner": [] });
        let err = parse_meal_plan(&value).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(msg) if msg.contains("snacks")));
    }

    #[test]
    fn test_non_numeric_field_is_reported_with_path() {
        let value = json!({
            "breakfast": [],
            "lunch": [{"item": "Dal", "quantity": "1 cup", "calories": "lots",
                       "protein_g": 1, "carbs_g": 1, "fats_g": 1}],
            "snacks": [],
            "dinner": []
        });
        let err = parse_meal_plan(&value).unwrap_err();
        assert!(
            matches!(err, CoreError::MalformedResponse(msg) if msg.starts_with("lunch[0].calories: "))
        );
    }

    #[test]
    fn test_item_requires_name() {
        let missing = json!({
            "breakfast": [{"quantity": "1", "calories": 1, "protein_g": 1, "carbs_g": 1, "fats_g": 1}],
            "lunch": [], "snacks": [], "dinner": []
        });
        assert!(parse_meal_plan(&missing).is_err());

        let blank = json!({
            "breakfast": [],
            "lunch": [], "snacks": [],
            "dinner": [{"item": "  ", "quantity": "1", "calories": 1, "protein_g": 1, "carbs_g": 1, "fats_g": 1}]
        });
        let err = parse_meal_plan(&blank).unwrap_err();
        assert!(
            matches!(err, CoreError::MalformedResponse(msg) if msg == "dinner[0].item: expected a non-empty string")
        );
    }
}
