//! Catalog products.
//!
//! Products come from an external catalog document and are read-only to the
//! shop. The document shape is loose: optional fields may be missing or
//! `null`, `hasDiscount` is read for truthiness, and an `oldPrice` that is not
//! a number is ignored rather than rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::ProductId;
use super::price::Price;

/// A purchasable product as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    pub price: Price,
    /// Price before the discount, shown struck through.
    #[serde(default, deserialize_with = "numeric_only", skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    #[serde(default, deserialize_with = "truthy")]
    pub has_discount: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// The original price to display next to the current one, if any.
    ///
    /// Only returned when the product is flagged as discounted and the
    /// original price is strictly greater than the current price.
    #[must_use]
    pub fn discounted_from(&self) -> Option<Price> {
        if !self.has_discount {
            return None;
        }
        self.old_price.filter(|old| *old > self.price)
    }

    /// Category text, empty when the product has none.
    #[must_use]
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Description text, empty when the product has none.
    #[must_use]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Image reference, treating an empty string as no image.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn numeric_only<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Price>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => {
            let text = n.to_string();
            text.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
                .map(Price::new)
        }
        _ => None,
    })
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_product() {
        let p = product(r#"{"id": 1, "name": "Yo-yo", "price": 45}"#);
        assert_eq!(p.id, ProductId::from("1"));
        assert_eq!(p.price, Price::from(45_i64));
        assert!(p.old_price.is_none());
        assert!(!p.has_discount);
        assert_eq!(p.category_or_empty(), "");
        assert!(p.image_src().is_none());
    }

    #[test]
    fn test_discount_shown_when_old_price_greater() {
        let p = product(r#"{"id": "a", "name": "Tren", "price": 100, "oldPrice": 150, "hasDiscount": true}"#);
        assert_eq!(p.discounted_from(), Some(Price::from(150_i64)));
    }

    #[test]
    fn test_discount_hidden_without_flag() {
        let p = product(r#"{"id": "a", "name": "Tren", "price": 100, "oldPrice": 150, "hasDiscount": false}"#);
        assert_eq!(p.discounted_from(), None);
    }

    #[test]
    fn test_discount_hidden_when_old_price_not_greater() {
        let equal = product(r#"{"id": "a", "price": 100, "oldPrice": 100, "hasDiscount": true}"#);
        let lower = product(r#"{"id": "a", "price": 100, "oldPrice": 80, "hasDiscount": true}"#);
        assert_eq!(equal.discounted_from(), None);
        assert_eq!(lower.discounted_from(), None);
    }

    #[test]
    fn test_non_numeric_old_price_ignored() {
        let p = product(r#"{"id": "a", "price": 100, "oldPrice": "150", "hasDiscount": true}"#);
        assert!(p.old_price.is_none());
        assert_eq!(p.discounted_from(), None);
    }

    #[test]
    fn test_has_discount_truthiness() {
        let one = product(r#"{"id": "a", "price": 1, "hasDiscount": 1}"#);
        let zero = product(r#"{"id": "a", "price": 1, "hasDiscount": 0}"#);
        let text = product(r#"{"id": "a", "price": 1, "hasDiscount": "yes"}"#);
        let empty = product(r#"{"id": "a", "price": 1, "hasDiscount": ""}"#);
        let null = product(r#"{"id": "a", "price": 1, "hasDiscount": null}"#);

        assert!(one.has_discount);
        assert!(!zero.has_discount);
        assert!(text.has_discount);
        assert!(!empty.has_discount);
        assert!(!null.has_discount);
    }

    #[test]
    fn test_null_optional_fields() {
        let p = product(
            r#"{"id": 3, "name": null, "price": 9.5, "category": null, "description": null, "image": ""}"#,
        );
        assert_eq!(p.name, "");
        assert!(p.category.is_none());
        assert!(p.image_src().is_none());
    }

    #[test]
    fn test_missing_price_rejected() {
        assert!(serde_json::from_str::<Product>(r#"{"id": 1, "name": "x"}"#).is_err());
    }
}
