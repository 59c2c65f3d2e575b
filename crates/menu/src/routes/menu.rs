//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tavola_core::{Category, MenuItem};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Menu item display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub has_model: bool,
    pub vegetarian: bool,
    pub spicy: bool,
    pub rating: Option<String>,
    pub prep_time: Option<String>,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.display(),
            image: item.image.clone(),
            has_model: item.model_url.is_some(),
            vegetarian: item.vegetarian,
            spicy: item.spicy,
            rating: item.rating.map(|r| format!("{r:.1}")),
            prep_time: item.prep_time.clone(),
        }
    }
}

/// Category tab display data for templates.
#[derive(Clone)]
pub struct CategoryTabView {
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Menu page query parameters.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/index.html")]
pub struct MenuIndexTemplate {
    pub restaurant_name: String,
    pub tabs: Vec<CategoryTabView>,
    pub selected_category: &'static str,
    pub items: Vec<MenuItemView>,
    pub query: String,
    pub cart_count: u32,
}

/// Display the menu page, filtered by category and search query.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<MenuQuery>,
) -> Result<MenuIndexTemplate> {
    let category = match params.category.as_deref() {
        None => Category::default(),
        Some(slug) => slug
            .parse::<Category>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
    };
    let query = params.q.unwrap_or_default();

    let tabs = Category::ALL
        .iter()
        .map(|&tab| CategoryTabView {
            slug: tab.slug(),
            title: tab.title(),
            icon: tab.icon(),
            active: tab == category,
        })
        .collect();

    let items = state
        .catalog()
        .filter(category, &query)
        .into_iter()
        .map(MenuItemView::from)
        .collect();

    let cart_count = state.cart()?.total_items();

    Ok(MenuIndexTemplate {
        restaurant_name: state.config().restaurant_name.clone(),
        tabs,
        selected_category: category.slug(),
        items,
        query,
        cart_count,
    })
}
