//! Cart flows through the storefront router.

use axum::http::StatusCode;
use toyshop_core::{MAX_QUANTITY, ProductId};
use toyshop_integration_tests::{CATALOG, TestStorefront, body_text, location};

fn quantity(store: &TestStorefront, id: &str) -> u32 {
    store.state.cart().get_cart().quantity(&ProductId::from(id))
}

#[tokio::test]
async fn test_add_redirects_to_catalog_and_updates_cards() {
    let store = TestStorefront::new(CATALOG);

    let response = store.post_form("/cart/add", "id=A").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog");

    store.post_form("/cart/add", "id=A").await;
    store.post_form("/cart/add", "id=7&qty=3").await;
    assert_eq!(quantity(&store, "A"), 2);
    assert_eq!(quantity(&store, "7"), 3);

    let html = store.page("/catalog").await;
    assert!(html.contains(r#"<span id="cartCount" class="badge">5</span>"#));
    assert!(html.contains("En carrito: <strong>2</strong>"));
}

#[tokio::test]
async fn test_line_controls_follow_quantity_rules() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=A").await;

    let response = store.post_form("/cart/increment", "id=A").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");
    assert_eq!(quantity(&store, "A"), 2);

    store.post_form("/cart/decrement", "id=A").await;
    store.post_form("/cart/decrement", "id=A").await;
    assert_eq!(quantity(&store, "A"), 1, "decrement keeps one unit");

    store.post_form("/cart/quantity", "id=A&qty=4").await;
    assert_eq!(quantity(&store, "A"), 4);

    store.post_form("/cart/quantity", "id=A&qty=abc").await;
    assert_eq!(quantity(&store, "A"), 1, "unparsable input falls back to one");

    store.post_form("/cart/quantity", "id=A&qty=").await;
    assert_eq!(quantity(&store, "A"), 1);

    store.post_form("/cart/quantity", "id=A&qty=0").await;
    assert_eq!(quantity(&store, "A"), 0, "zero removes the line");

    store.post_form("/cart/add", "id=B").await;
    store.post_form("/cart/remove", "id=B").await;
    assert!(store.state.cart().get_cart().is_empty());
}

#[tokio::test]
async fn test_cart_page_lists_lines_and_total() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=A&qty=2").await;
    store.post_form("/cart/add", "id=B").await;
    store.post_form("/cart/add", "id=discontinued").await;

    let html = store.page("/cart").await;
    assert!(html.contains(r#"<div id="cartWrap">"#));
    assert!(html.contains("Pelota"));
    assert!(html.contains("$100.00"));
    assert!(html.contains(r#"<strong id="total">$130.00</strong>"#));
    assert!(!html.contains("discontinued"));
    assert!(html.contains("(4 artículos)"), "badge counts orphaned entries");
    assert!(html.contains(
        r#"action="/checkout" target="_blank" rel="noopener noreferrer">"#
    ));
}

#[tokio::test]
async fn test_empty_cart_page_shows_empty_state() {
    let store = TestStorefront::new(CATALOG);

    let html = store.page("/cart").await;
    assert!(html.contains("Tu carrito está vacío"));
    assert!(html.contains(r#"<form class="checkout" method="post" action="/checkout">"#));
    assert!(!html.contains(r#"target="_blank""#), "empty-cart notice stays in this tab");
    assert!(html.contains(r#"<strong id="total">$0.00</strong>"#));
    assert!(html.contains("(0 artículos)"));
}

#[tokio::test]
async fn test_clear_empties_cart() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=A&qty=2").await;

    let response = store.post_form("/cart/clear", "").await;
    assert_eq!(location(&response), "/cart");
    assert!(store.state.cart().get_cart().is_empty());
}

#[tokio::test]
async fn test_missing_id_is_bad_request() {
    let store = TestStorefront::new(CATALOG);

    let response = store.post_form("/cart/increment", "id=%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.state.cart().get_cart().is_empty());
}

#[tokio::test]
async fn test_cart_count_fragment() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=A&qty=3").await;

    let response = store.get("/cart/count").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await.trim(),
        r#"<span id="cartCount" class="badge">3</span>"#
    );
}

#[tokio::test]
async fn test_oversized_quantity_is_clamped_and_renders() {
    let store =
        TestStorefront::new(r#"[{"id": "A", "name": "Oro", "price": 100000000000000000000}]"#);
    store.post_form("/cart/add", "id=A").await;

    let response = store.post_form("/cart/quantity", "id=A&qty=99999999999").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(quantity(&store, "A"), MAX_QUANTITY);

    let html = store.page("/cart").await;
    assert!(html.contains(r#"<strong id="total">$"#));

    let response = store.post_form("/checkout", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
