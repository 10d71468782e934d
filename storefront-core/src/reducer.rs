//! Reducer - the only place catalog state is mutated
//!
//! Returns `true` if state changed, so the store knows when to publish
//! a fresh snapshot to subscribers.

use crate::action::Action;
use crate::state::{default_nav_links, CatalogState, LOAD_ERROR_MESSAGE};

pub fn reducer(state: &mut CatalogState, action: Action) -> bool {
    match action {
        Action::CatalogFetch => {
            state.loading = true;
            state.error.clear();
            true
        }

        Action::CatalogDidLoad(data) => {
            // Adopt all four datasets at once; a null body falls back to
            // empty, nav links to the built-in default set.
            state.hero_content = data.hero_content.unwrap_or_default();
            state.nav_links = data.nav_links.unwrap_or_else(default_nav_links);
            state.categories = data.categories.unwrap_or_default();
            state.products = data.products.unwrap_or_default();
            state.loading = false;
            state.error.clear();
            true
        }

        Action::CatalogDidError(_) => {
            state.error = LOAD_ERROR_MESSAGE.to_string();
            state.loading = false;
            true
        }

        Action::ProductDidCreate(product) => {
            // Server truth, appended exactly once.
            state.products.push(product);
            true
        }

        Action::ProductDidUpdate(updated) => {
            match state.products.iter_mut().find(|product| product.id == updated.id) {
                Some(slot) => {
                    *slot = updated;
                    true
                }
                // Id no longer present locally; nothing to replace.
                None => false,
            }
        }
    }
}
