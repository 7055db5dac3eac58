//! Checkout handoff and response headers.

use axum::http::{StatusCode, header};
use toyshop_integration_tests::{CATALOG, RECIPIENT, TestStorefront, body_text, location};

#[tokio::test]
async fn test_empty_cart_checkout_shows_notice() {
    let store = TestStorefront::new(CATALOG);

    let response = store.post_form("/checkout", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<p class="notice" role="alert">Tu carrito está vacío.</p>"#));
}

#[tokio::test]
async fn test_orphan_only_cart_checkout_shows_notice() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=gone").await;

    let response = store.post_form("/checkout", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Tu carrito está vacío."));
}

#[tokio::test]
async fn test_checkout_redirects_to_messaging_link() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=A&qty=2").await;
    store.post_form("/cart/add", "id=B").await;

    let response = store
        .post_form("/checkout", "name=Ana&zone=Coyoac%C3%A1n&note=")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::REFERRER_POLICY], "no-referrer");

    let link = location(&response);
    assert!(link.starts_with(&format!("https://wa.me/{RECIPIENT}?text=")));
    assert!(link.contains("Hola%2C%20quiero%20hacer%20un%20pedido%3A%0A"));
    assert!(link.contains("-%20Pelota%20%28x2%29%20%24100.00"));
    assert!(link.contains("Total%20estimado%3A%20%24130.00"));
    assert!(link.contains("Nombre%3A%20Ana"));
    assert!(link.contains("Zona%3A%20Coyoac%C3%A1n"));
    assert!(!link.contains("Nota"));
}

#[tokio::test]
async fn test_checkout_leaves_cart_intact() {
    let store = TestStorefront::new(CATALOG);
    store.post_form("/cart/add", "id=A").await;

    store.post_form("/checkout", "").await;
    assert_eq!(store.state.cart().cart_count(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let store = TestStorefront::new(CATALOG);

    let response = store.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let store = TestStorefront::new(CATALOG);

    let response = store.get("/catalog").await;
    let headers = response.headers();
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::CACHE_CONTROL], "no-store, max-age=0");
    assert!(headers.contains_key("x-request-id"));

    let csp = headers[header::CONTENT_SECURITY_POLICY]
        .to_str()
        .expect("ascii");
    assert!(csp.contains("form-action 'self' https://wa.me"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let store = TestStorefront::new(CATALOG);
    let request = axum::http::Request::get("/health")
        .header("x-request-id", "abc-123")
        .body(axum::body::Body::empty())
        .expect("request");

    let response = tower::ServiceExt::oneshot(store.router(), request)
        .await
        .expect("infallible");
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
