use crate::application::http::{
    health::router::HealthApiDoc, meal_plan::router::MealPlanApiDoc,
    recipe::router::RecipeApiDoc, wellness::router::WellnessApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FerrisFit API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document; meal plan and wellness routes live at the root.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(MealPlanApiDoc::openapi());
    doc.merge(WellnessApiDoc::openapi());
    doc
}
