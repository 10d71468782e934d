//! Actions describing every catalog state transition
//!
//! Naming follows the intent/result convention: `CatalogFetch` is the
//! intent that starts the bulk load, the `Did*` variants carry async
//! outcomes back into the reducer.

use crate::model::{InitialData, Product};

/// State transitions dispatched to the catalog reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Intent: the initial bulk fetch is starting.
    CatalogFetch,

    /// Result: all four startup datasets arrived.
    CatalogDidLoad(InitialData),

    /// Result: the bulk fetch failed; payload is the underlying error
    /// text (logged, not shown - the reducer sets the fixed message).
    CatalogDidError(String),

    /// Result: the server created a product.
    ProductDidCreate(Product),

    /// Result: the server updated a product.
    ProductDidUpdate(Product),
}

impl Action {
    /// Action name for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CatalogFetch => "CatalogFetch",
            Action::CatalogDidLoad(_) => "CatalogDidLoad",
            Action::CatalogDidError(_) => "CatalogDidError",
            Action::ProductDidCreate(_) => "ProductDidCreate",
            Action::ProductDidUpdate(_) => "ProductDidUpdate",
        }
    }
}
