//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}

/// Renders a unit count with the matching noun ("1 artículo", "3 artículos").
///
/// Usage in templates: `{{ cart_count|units }}`
#[askama::filter_fn]
pub fn units(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let count = count.to_string();
    let noun = if count == "1" { "artículo" } else { "artículos" };
    Ok(format!("{count} {noun}"))
}
