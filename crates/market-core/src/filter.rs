//! Shop page search and category filter.
//!
//! Filtering builds a caller-local view over a product slice; the slice
//! itself is never touched.

use crate::models::Product;

/// Category selection that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// `"All"` followed by each distinct category in first-appearance order.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for p in products {
        if !options.iter().any(|c| c == &p.category) {
            options.push(p.category.clone());
        }
    }
    options
}

/// Search text plus selected category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopFilter {
    pub query: String,
    pub category: String,
}

impl Default for ShopFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ShopFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Title contains the query (case-insensitive) and the category matches
    /// or `"All"` is selected.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let matches_category = self.category == ALL_CATEGORIES || product.category == self.category;
        matches_search && matches_category
    }

    /// Matching products in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Advance the category to the next entry of `options`, wrapping around.
    /// An unknown current category restarts at the first option.
    pub fn cycle_category(&mut self, options: &[String]) {
        if options.is_empty() {
            return;
        }
        let next = options
            .iter()
            .position(|c| c == &self.category)
            .map(|i| (i + 1) % options.len())
            .unwrap_or(0);
        self.category = options[next].clone();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != ALL_CATEGORIES
    }
}
