//! Model catalog handlers.

use std::collections::BTreeSet;

use axum::Json;
use axum::extract::{Query, State};
use routerchat_core::{PriceFilter, display_label, filter_by_category, filter_by_price};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    #[serde(default = "all")]
    pub price: String,
    #[serde(default = "all")]
    pub category: String,
}

fn all() -> String {
    "all".to_string()
}

#[derive(Serialize)]
pub struct ModelsResponse {
    pub success: bool,
    pub models: Vec<routerchat_core::ModelRecord>,
    pub count: usize,
    pub price_filter: String,
    pub category_filter: String,
}

/// List catalog models, filtered by price tier and category.
///
/// Unknown filter values fall back to `all` rather than erroring, matching
/// how the query defaults behave.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> Json<ModelsResponse> {
    let models = state.client.list_models().await;
    let models = filter_by_price(models, PriceFilter::parse(&query.price));
    let models = filter_by_category(models, &query.category);

    Json(ModelsResponse {
        success: true,
        count: models.len(),
        models,
        price_filter: query.price,
        category_filter: query.category,
    })
}

#[derive(Serialize)]
pub struct CategoryEntry {
    pub value: String,
    pub label: String,
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryEntry>,
}

/// List every category present in the current catalog, with display labels.
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let models = state.client.list_models().await;

    let values: BTreeSet<String> = models
        .into_iter()
        .flat_map(|model| model.categories)
        .collect();

    let categories = values
        .into_iter()
        .map(|value| CategoryEntry {
            label: display_label(&value),
            value,
        })
        .collect();

    Json(CategoriesResponse {
        success: true,
        categories,
    })
}
