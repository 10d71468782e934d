//! Storefront REST API client
//!
//! A thin wrapper over `reqwest`: every call either yields a decoded
//! payload or the single [`ApiError`] kind. Non-2xx statuses are folded
//! into the same error as transport failures, with no body inspection.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::ApiError;
use crate::model::{Category, HeroContent, InitialData, NavLink, Product, ProductInput, ProductPatch};

/// POST body for product creation, with the normalized defaults merged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProductBody<'a> {
    name: &'a str,
    description: &'a str,
    origin: &'a str,
    price: f64,
    category_id: i64,
    currency: &'a str,
    in_stock: bool,
}

impl<'a> CreateProductBody<'a> {
    fn from_input(input: &'a ProductInput) -> Self {
        // Defaults sit under the caller's fields, so explicit values win.
        Self {
            name: &input.name,
            description: &input.description,
            origin: &input.origin,
            price: input.price,
            category_id: input.category_id,
            currency: input.currency.as_deref().unwrap_or("USD"),
            in_stock: input.in_stock.unwrap_or(true),
        }
    }
}

/// HTTP client for the storefront API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the four startup datasets concurrently.
    ///
    /// All four GETs must succeed; the first failure fails the whole
    /// operation and no partial data is returned.
    pub async fn fetch_initial_data(&self) -> Result<InitialData, ApiError> {
        let (hero_content, nav_links, categories, products) = tokio::try_join!(
            self.get_json::<Option<Vec<HeroContent>>>("/heroContent"),
            self.get_json::<Option<Vec<NavLink>>>("/navLinks"),
            self.get_json::<Option<Vec<Category>>>("/categories"),
            self.get_json::<Option<Vec<Product>>>("/products"),
        )?;

        Ok(InitialData {
            hero_content,
            nav_links,
            categories,
            products,
        })
    }

    /// Create a product, returning the server's version of it.
    ///
    /// The returned product carries the server-assigned id; callers must
    /// adopt it rather than the raw input.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let body = CreateProductBody::from_input(input);
        let response = self
            .http
            .post(self.url("/products"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// PATCH a product with only the supplied fields.
    ///
    /// Returns the server's merged view of the product.
    pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<Product, ApiError> {
        let response = self
            .http
            .patch(self.url(&format!("/products/{id}")))
            .json(patch)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_the_configured_base_url() {
        let client = ApiClient::new(&StoreConfig::new("http://localhost:9999/"));
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert_eq!(client.url("/products"), "http://localhost:9999/products");
    }

    #[test]
    fn create_body_merges_defaults_under_input() {
        let input = ProductInput::new("Morning Roast", "Smooth blend", "Kenya", 11.25, 2);
        let body = serde_json::to_value(CreateProductBody::from_input(&input)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "name": "Morning Roast",
                "description": "Smooth blend",
                "origin": "Kenya",
                "price": 11.25,
                "categoryId": 2,
                "currency": "USD",
                "inStock": true,
            })
        );
    }

    #[test]
    fn create_body_lets_caller_override_defaults() {
        let input = ProductInput::new("Decaf", "Late night", "Peru", 9.0, 1)
            .in_stock(false)
            .currency("EUR");
        let body = serde_json::to_value(CreateProductBody::from_input(&input)).unwrap();

        assert_eq!(body["inStock"], serde_json::json!(false));
        assert_eq!(body["currency"], serde_json::json!("EUR"));
    }
}
