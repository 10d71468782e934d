//! Wire data types shared with the storefront REST API
//!
//! Everything here serializes with camelCase field names to match the
//! API's JSON. Ids are server-assigned; the client never invents one.

use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub origin: String,
    /// Non-negative decimal price in `currency` units.
    pub price: f64,
    pub category_id: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

pub(crate) fn default_in_stock() -> bool {
    true
}

/// Caller input for creating a product.
///
/// `in_stock` and `currency` are optional; the API client merges the
/// defaults (`true` / `"USD"`) underneath, so a caller-provided value
/// always wins.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub origin: String,
    pub price: f64,
    pub category_id: i64,
    pub in_stock: Option<bool>,
    pub currency: Option<String>,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        origin: impl Into<String>,
        price: f64,
        category_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            origin: origin.into(),
            price,
            category_id,
            in_stock: None,
            currency: None,
        }
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Partial update for a product; only set fields go on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// True when no field is set; such a patch would PATCH an empty body.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A product category (read-only from the client's perspective).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A navigation link driving the presentation shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub id: i64,
    pub label: String,
    pub path: String,
}

/// Hero banner content; the first entry (if any) is displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub id: i64,
    pub title: String,
    pub tagline: String,
}

/// The four startup datasets, assembled from the concurrent bulk fetch.
///
/// Each field is `Option` so a `null` body decodes to `None` and the
/// reducer can apply the documented fallback instead of adopting it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitialData {
    pub hero_content: Option<Vec<HeroContent>>,
    pub nav_links: Option<Vec<NavLink>>,
    pub categories: Option<Vec<Category>>,
    pub products: Option<Vec<Product>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_camel_case_fields() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "House Blend",
            "description": "Dark roast",
            "origin": "Vietnam",
            "price": 12.0,
            "categoryId": 1,
            "currency": "USD",
            "inStock": true,
        }))
        .unwrap();

        assert_eq!(product.category_id, 1);
        assert!(product.in_stock);
    }

    #[test]
    fn product_fills_missing_defaults() {
        // Catalog rows written before currency/inStock existed.
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 2,
            "name": "Morning Roast",
            "description": "Smooth medium roast",
            "origin": "Kenya",
            "price": 11.0,
            "categoryId": 2,
        }))
        .unwrap();

        assert_eq!(product.currency, "USD");
        assert!(product.in_stock);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ProductPatch::new().price(15.5);
        let body = serde_json::to_value(&patch).unwrap();

        assert_eq!(body, serde_json::json!({ "price": 15.5 }));
    }

    #[test]
    fn patch_uses_camel_case_on_the_wire() {
        let patch = ProductPatch::new().category_id(2).in_stock(false);
        let body = serde_json::to_value(&patch).unwrap();

        assert_eq!(body, serde_json::json!({ "categoryId": 2, "inStock": false }));
    }

    #[test]
    fn empty_patch_is_detectable() {
        assert!(ProductPatch::new().is_empty());
        assert!(!ProductPatch::new().name("x").is_empty());
    }
}
