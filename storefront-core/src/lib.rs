//! storefront-core: the data layer of a small e-commerce storefront
//!
//! All catalog state lives in one store and changes only through
//! dispatched actions; async API outcomes come back as `Did*` result
//! actions, and derived views (search, drafts) are pure functions over
//! the state.
//!
//! # Example
//! ```ignore
//! use storefront_core::prelude::*;
//!
//! let config = StoreConfig::from_env();
//! let mut store = CatalogStore::new(ApiClient::new(&config));
//!
//! // One bulk load per session, before any interactive mutation.
//! store.load().await;
//!
//! let created = store
//!     .add_product(ProductInput::new("Morning Roast", "Smooth blend", "Kenya", 11.25, 2))
//!     .await?;
//!
//! let filtered = filter_products(&store.state().products, "morning", "all");
//! ```

pub mod action;
pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod model;
pub mod reducer;
pub mod search;
pub mod state;
pub mod store;

pub use action::Action;
pub use api::ApiClient;
pub use config::{StoreConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use draft::{sync_drafts, EditDraft};
pub use error::ApiError;
pub use model::{
    Category, HeroContent, InitialData, NavLink, Product, ProductInput, ProductPatch,
};
pub use reducer::reducer;
pub use search::{filter_products, ALL_CATEGORIES};
pub use state::{default_nav_links, CatalogState, LOAD_ERROR_MESSAGE};
pub use store::CatalogStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::api::ApiClient;
    pub use crate::config::StoreConfig;
    pub use crate::draft::{sync_drafts, EditDraft};
    pub use crate::error::ApiError;
    pub use crate::model::{
        Category, HeroContent, InitialData, NavLink, Product, ProductInput, ProductPatch,
    };
    pub use crate::search::filter_products;
    pub use crate::state::CatalogState;
    pub use crate::store::CatalogStore;
}
