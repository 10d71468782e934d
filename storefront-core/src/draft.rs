//! Per-product edit drafts for the admin panel
//!
//! Drafts hold unsaved edits keyed by product id. The presentation layer
//! rebuilds the map from the store's product sequence whenever it
//! changes, so drafts never drift from server-backed rows.

use std::collections::HashMap;

use crate::model::{Product, ProductPatch};

/// The editable subset of a product's fields.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub name: String,
    pub origin: String,
    pub price: f64,
}

impl EditDraft {
    /// Snapshot the editable fields of a product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            origin: product.origin.clone(),
            price: product.price,
        }
    }

    /// Turn the draft into the PATCH body a save sends.
    pub fn to_patch(&self) -> ProductPatch {
        ProductPatch::new()
            .name(self.name.clone())
            .origin(self.origin.clone())
            .price(self.price)
    }
}

/// Rebuild the id-to-draft map from the current product sequence.
pub fn sync_drafts(products: &[Product]) -> HashMap<i64, EditDraft> {
    products
        .iter()
        .map(|product| (product.id, EditDraft::from_product(product)))
        .collect()
}
