//! Item detail route handlers.
//!
//! The detail view and the AR preview are rendered as HTMX fragments
//! shown in a modal over the menu page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tavola_core::{MenuItem, MenuItemId, NutritionInfo};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::menu::MenuItemView;
use crate::state::AppState;

/// Nutrition display data for templates.
#[derive(Clone)]
pub struct NutritionView {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl From<&NutritionInfo> for NutritionView {
    fn from(info: &NutritionInfo) -> Self {
        Self {
            calories: info.calories.clone(),
            protein: info.protein.clone(),
            carbs: info.carbs.clone(),
            fat: info.fat.clone(),
        }
    }
}

/// Item detail display data for templates.
#[derive(Clone)]
pub struct ItemDetailView {
    pub item: MenuItemView,
    pub ingredients: Vec<String>,
    pub nutrition: Option<NutritionView>,
}

impl From<&MenuItem> for ItemDetailView {
    fn from(item: &MenuItem) -> Self {
        Self {
            item: MenuItemView::from(item),
            ingredients: item.ingredients.clone(),
            nutrition: item.nutrition.as_ref().map(NutritionView::from),
        }
    }
}

/// Item detail fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/item_detail.html")]
pub struct ItemDetailTemplate {
    pub detail: ItemDetailView,
}

/// AR preview stub fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/ar_preview.html")]
pub struct ArPreviewTemplate {
    pub name: String,
}

/// Display the item detail fragment.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ItemDetailTemplate> {
    let item_id = MenuItemId::new(id);
    let item = state
        .catalog()
        .get(&item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {item_id}")))?;

    Ok(ItemDetailTemplate {
        detail: ItemDetailView::from(item),
    })
}

/// Display the AR preview stub.
///
/// The demo has no AR renderer; the fragment tells the user so. Items
/// without a model reference have no AR affordance at all, so asking
/// for one is a 404.
#[instrument(skip(state))]
pub async fn ar_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ArPreviewTemplate> {
    let item_id = MenuItemId::new(id);
    let item = state
        .catalog()
        .get(&item_id)
        .filter(|item| item.model_url.is_some())
        .ok_or_else(|| AppError::NotFound(format!("AR preview for menu item {item_id}")))?;

    Ok(ArPreviewTemplate {
        name: item.name.clone(),
    })
}
