//! HTTP route handlers for the menu app.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Menu
//! GET  /menu                   - Menu page (?category=starters&q=search)
//! GET  /menu/items/{id}        - Item detail fragment (HTMX modal)
//! GET  /menu/items/{id}/ar     - AR preview stub fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add item (returns count badge, triggers cart-updated)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout               - Simulated checkout, renders confirmation
//! ```

pub mod cart;
pub mod items;
pub mod landing;
pub mod menu;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index))
        .route("/items/{id}", get(items::detail))
        .route("/items/{id}/ar", get(items::ar_preview))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the menu app.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(landing::landing))
        // Health check
        .route("/health", get(health))
        // Menu routes
        .nest("/menu", menu_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Simulated checkout
        .route("/checkout", post(cart::checkout))
}
