//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. The cart itself lives on the application state; handlers
//! take the lock, apply one engine operation, and render a fragment
//! from the result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tavola_core::{Cart, MenuItemId, OrderConfirmation, format_amount};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_items: u32,
    pub subtotal: String,
    pub tax: String,
    pub grand_total: String,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    item_id: line.item_id.to_string(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price.display(),
                    line_total: format_amount(line.line_total()),
                })
                .collect(),
            total_items: cart.total_items(),
            subtotal: format_amount(cart.subtotal()),
            tax: format_amount(cart.tax()),
            grand_total: format_amount(cart.grand_total()),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub item_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub restaurant_name: String,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct CheckoutCompleteTemplate {
    pub restaurant_name: String,
    pub order_id: String,
    pub items: u32,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl CheckoutCompleteTemplate {
    fn new(restaurant_name: String, confirmation: &OrderConfirmation) -> Self {
        Self {
            restaurant_name,
            order_id: confirmation.order_id.to_string(),
            items: confirmation.items,
            subtotal: format_amount(confirmation.subtotal),
            tax: format_amount(confirmation.tax),
            total: format_amount(confirmation.total),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<CartShowTemplate> {
    let cart = CartView::from(&*state.cart()?);
    Ok(CartShowTemplate {
        restaurant_name: state.config().restaurant_name.clone(),
        cart,
    })
}

/// Add an item to the cart (HTMX).
///
/// Looks the item up in the catalog, then hands it to the cart engine.
/// Returns the cart count badge with an HTMX trigger so other cart
/// surfaces refresh themselves.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let item_id = MenuItemId::new(form.item_id);
    let item = state
        .catalog()
        .get(&item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {item_id}")))?
        .clone();

    let count = {
        let mut cart = state.cart()?;
        cart.add_item(&item, form.quantity.unwrap_or(1));
        cart.total_items()
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Set a cart line's quantity (HTMX).
///
/// Zero or negative quantities remove the line; unknown ids are a
/// silent no-op. Either way the fresh cart items fragment is returned.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let item_id = MenuItemId::new(form.item_id);
    let cart = {
        let mut cart = state.cart()?;
        cart.update_quantity(&item_id, form.quantity);
        CartView::from(&*cart)
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Remove an item from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let item_id = MenuItemId::new(form.item_id);
    let cart = {
        let mut cart = state.cart()?;
        cart.remove_item(&item_id);
        CartView::from(&*cart)
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Empty the cart (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Response> {
    let cart = {
        let mut cart = state.cart()?;
        cart.clear();
        CartView::from(&*cart)
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<CartCountTemplate> {
    let count = state.cart()?.total_items();
    Ok(CartCountTemplate { count })
}

/// Simulated checkout.
///
/// No payment gateway is involved: the engine captures the totals,
/// clears the cart, and the confirmation page is rendered from the
/// receipt. An empty cart has nothing to check out and redirects back.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Response> {
    let confirmation = {
        let mut cart = state.cart()?;
        if cart.is_empty() {
            return Ok(Redirect::to("/cart").into_response());
        }
        cart.complete_checkout()
    };

    tracing::info!(order_id = %confirmation.order_id, items = confirmation.items, "Simulated checkout completed");

    Ok(
        CheckoutCompleteTemplate::new(state.config().restaurant_name.clone(), &confirmation)
            .into_response(),
    )
}
