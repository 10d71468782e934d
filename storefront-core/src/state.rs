//! Catalog state - single source of truth
//!
//! Consumers read this through the store; only the reducer mutates it.

use crate::model::{Category, HeroContent, NavLink, Product};

/// User-facing message shown when the initial bulk fetch fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "Could not fetch product data. Make sure the API server is running and retry.";

/// Navigation links used until the API provides its own set, and again
/// whenever it returns none.
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink {
            id: 1,
            label: "Home".to_string(),
            path: "/".to_string(),
        },
        NavLink {
            id: 2,
            label: "Shop".to_string(),
            path: "/shop".to_string(),
        },
        NavLink {
            id: 3,
            label: "Admin Portal".to_string(),
            path: "/admin".to_string(),
        },
    ]
}

/// Hero banner shown when the API has no hero content.
pub fn fallback_hero() -> HeroContent {
    HeroContent {
        id: 0,
        title: "Coffee R Us".to_string(),
        tagline: "The go to store for your coffee needs".to_string(),
    }
}

/// Everything the presentation layer needs to render the storefront.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    /// Hero banner entries; the first one (if any) is displayed.
    pub hero_content: Vec<HeroContent>,

    /// Navigation links for the shell.
    pub nav_links: Vec<NavLink>,

    /// Categories, loaded once at startup.
    pub categories: Vec<Category>,

    /// The product list; ids are unique across the sequence.
    pub products: Vec<Product>,

    /// True only during the initial bulk fetch.
    pub loading: bool,

    /// Load failure message; empty string means no error.
    pub error: String,
}

impl CatalogState {
    /// The hero to display: first entry, or the hardcoded fallback.
    pub fn hero(&self) -> HeroContent {
        self.hero_content.first().cloned().unwrap_or_else(fallback_hero)
    }

    /// Look up a product by id.
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            hero_content: Vec::new(),
            nav_links: default_nav_links(),
            categories: Vec::new(),
            products: Vec::new(),
            loading: true,
            error: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_loading_with_default_nav() {
        let state = CatalogState::default();

        assert!(state.loading);
        assert!(state.error.is_empty());
        assert!(state.products.is_empty());
        assert_eq!(state.nav_links.len(), 3);
        assert_eq!(state.nav_links[2].path, "/admin");
    }

    #[test]
    fn hero_falls_back_when_empty() {
        let state = CatalogState::default();
        assert_eq!(state.hero().title, "Coffee R Us");
    }

    #[test]
    fn product_lookup_finds_by_id() {
        let state = CatalogState {
            products: vec![Product {
                id: 7,
                name: "House Blend".to_string(),
                description: "Dark roast".to_string(),
                origin: "Vietnam".to_string(),
                price: 12.0,
                category_id: 1,
                currency: "USD".to_string(),
                in_stock: true,
            }],
            ..CatalogState::default()
        };

        assert_eq!(state.product(7).map(|p| p.name.as_str()), Some("House Blend"));
        assert!(state.product(8).is_none());
    }

    #[test]
    fn hero_uses_first_entry_when_present() {
        let state = CatalogState {
            hero_content: vec![
                HeroContent {
                    id: 1,
                    title: "Seasonal Sale".to_string(),
                    tagline: "Fresh beans".to_string(),
                },
                HeroContent {
                    id: 2,
                    title: "Second".to_string(),
                    tagline: "unused".to_string(),
                },
            ],
            ..CatalogState::default()
        };

        assert_eq!(state.hero().title, "Seasonal Sale");
    }
}
