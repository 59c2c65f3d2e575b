//! Integration tests for the cart: HTMX fragment endpoints, quantity
//! bookkeeping across requests, and the simulated checkout.

use axum::http::StatusCode;

use tavola_integration_tests::{body_text, get, post_form, test_app};

#[tokio::test]
async fn cart_starts_empty() {
    let app = test_app();

    let response = get(&app, "/cart").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn add_returns_count_badge_and_trigger() {
    let app = test_app();

    let response = post_form(&app, "/cart/add", "item_id=1&quantity=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );

    let body = body_text(response).await;
    assert!(body.contains(">2</span>"));
}

#[tokio::test]
async fn adding_unknown_item_is_not_found() {
    let app = test_app();

    let response = post_form(&app, "/cart/add", "item_id=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // nothing was added
    let count = body_text(get(&app, "/cart/count").await).await;
    assert!(!count.contains(">1</span>"));
}

#[tokio::test]
async fn add_without_quantity_defaults_to_one() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=3").await;

    let body = body_text(get(&app, "/cart").await).await;
    assert!(body.contains("Crispy Calamari"));
    assert!(body.contains("$16.00 each"));
}

#[tokio::test]
async fn repeated_adds_merge_into_one_line() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=1").await;
    post_form(&app, "/cart/add", "item_id=1").await;

    let body = body_text(get(&app, "/cart").await).await;
    // one line at quantity 2, subtotal 2 x 28
    assert_eq!(body.matches("<h4>Truffle Mushroom Risotto</h4>").count(), 1);
    assert!(body.contains("$56.00"));
}

#[tokio::test]
async fn update_sets_quantity_and_recomputes_totals() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=1").await;
    let response = post_form(&app, "/cart/update", "item_id=1&quantity=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    // 5 x 28 = 140, tax 14.00, total 154.00
    assert!(body.contains("$140.00"));
    assert!(body.contains("$14.00"));
    assert!(body.contains("$154.00"));
}

#[tokio::test]
async fn update_to_zero_removes_the_line() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=1").await;
    let response = post_form(&app, "/cart/update", "item_id=1&quantity=0").await;

    let body = body_text(response).await;
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn remove_deletes_only_the_matching_line() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=1").await;
    post_form(&app, "/cart/add", "item_id=2").await;
    let response = post_form(&app, "/cart/remove", "item_id=1").await;

    let body = body_text(response).await;
    assert!(!body.contains("Truffle Mushroom Risotto"));
    assert!(body.contains("Grilled Salmon Teriyaki"));
}

#[tokio::test]
async fn clear_empties_the_cart() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=1&quantity=3").await;
    post_form(&app, "/cart/add", "item_id=4").await;
    let response = post_form(&app, "/cart/clear", "").await;

    let body = body_text(response).await;
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn count_badge_tracks_total_quantity() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=1&quantity=2").await;
    post_form(&app, "/cart/add", "item_id=2&quantity=3").await;

    let body = body_text(get(&app, "/cart/count").await).await;
    assert!(body.contains(">5</span>"));
}

#[tokio::test]
async fn checkout_renders_confirmation_and_empties_cart() {
    let app = test_app();

    post_form(&app, "/cart/add", "item_id=2&quantity=2").await;
    let response = post_form(&app, "/checkout", "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    // 2 x 32 = 64, tax 6.40, total 70.40
    assert!(body.contains("Thank you!"));
    assert!(body.contains("$64.00"));
    assert!(body.contains("$6.40"));
    assert!(body.contains("$70.40"));

    let cart = body_text(get(&app, "/cart").await).await;
    assert!(cart.contains("Your cart is empty"));
}

#[tokio::test]
async fn checkout_with_empty_cart_redirects_back() {
    let app = test_app();

    let response = post_form(&app, "/checkout", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/cart")
    );
}
