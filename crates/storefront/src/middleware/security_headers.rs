//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses. The only outside
//! destinations allowed are `https:` product images and the messaging service
//! the checkout form redirects to.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

use crate::state::AppState;

/// Build the Content-Security-Policy value.
///
/// ```text
/// default-src 'none';
/// style-src 'self';
/// img-src 'self' https: data:;
/// base-uri 'self';
/// form-action 'self' <messaging origin>;
/// frame-ancestors 'none'
/// ```
#[must_use]
pub fn content_security_policy(messaging_base: &Url) -> String {
    let messaging_origin = messaging_base.origin().ascii_serialization();
    format!(
        "default-src 'none'; \
         style-src 'self'; \
         img-src 'self' https: data:; \
         base-uri 'self'; \
         form-action 'self' {messaging_origin}; \
         frame-ancestors 'none'"
    )
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: no-referrer` - The messaging link never learns where it came from
/// - `Content-Security-Policy` - See [`content_security_policy`]
/// - `Cache-Control: no-store, max-age=0` - Views always reflect the stored cart
/// - `Cross-Origin-Opener-Policy: same-origin` - Opened links get no handle back
/// - `X-DNS-Prefetch-Control: off`
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let csp = content_security_policy(&state.config().checkout.messaging_base);

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    match HeaderValue::from_str(&csp) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => tracing::warn!(error = %e, "Skipping invalid CSP header"),
    }

    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    headers.insert(
        HeaderName::from_static("x-dns-prefetch-control"),
        HeaderValue::from_static("off"),
    );

    response
}
