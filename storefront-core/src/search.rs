//! Product search and category filtering
//!
//! Pure derivation over the catalog's product list: no state, no side
//! effects, same inputs give the same output.

use crate::model::Product;

/// Category selector that matches every product.
pub const ALL_CATEGORIES: &str = "all";

/// Filter products by free-text search and category selection.
///
/// A product is kept when both predicates hold:
///
/// - `selected_category` is `"all"`, or parses to the product's
///   `category_id` (a selector that is neither matches nothing);
/// - the concatenation `name + " " + description + " " + origin`,
///   lowercased, contains the trimmed, lowercased `search_term`. An
///   empty term matches every product.
///
/// Input order is preserved.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    selected_category: &str,
) -> Vec<&'a Product> {
    let needle = search_term.trim().to_lowercase();

    products
        .iter()
        .filter(|product| category_matches(product, selected_category) && text_matches(product, &needle))
        .collect()
}

fn category_matches(product: &Product, selected_category: &str) -> bool {
    if selected_category == ALL_CATEGORIES {
        return true;
    }
    selected_category
        .parse::<i64>()
        .is_ok_and(|id| id == product.category_id)
}

fn text_matches(product: &Product, needle: &str) -> bool {
    let haystack = format!("{} {} {}", product.name, product.description, product.origin).to_lowercase();
    haystack.contains(needle)
}
