//! Read-only catalog store.
//!
//! [`Catalog::builtin`] hands out the process-wide sample catalog. An
//! alternative catalog can be loaded from JSON with
//! [`Catalog::from_json_file`]; sections missing from the document fall back
//! to the built-in content. Nothing here offers a write path: filtering and
//! sorting happen in caller-local views.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use market_core::error::{MarketError, Result};
use market_core::filter::category_options;
use market_core::models::{BlogPost, GalleryImage, PricingPlan, Product, Service};
use serde::Deserialize;
use tracing::{debug, info};

use crate::fixtures;

/// Number of products featured on the home page.
pub const FEATURED_COUNT: usize = 4;

/// Immutable reference content for every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    blog_posts: Vec<BlogPost>,
    services: Vec<Service>,
    pricing_plans: Vec<PricingPlan>,
    gallery_images: Vec<GalleryImage>,
}

/// On-disk shape; every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CatalogDocument {
    products: Option<Vec<Product>>,
    blog_posts: Option<Vec<BlogPost>>,
    services: Option<Vec<Service>>,
    pricing_plans: Option<Vec<PricingPlan>>,
    gallery_images: Option<Vec<GalleryImage>>,
}

impl Catalog {
    /// The built-in sample catalog, created on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            products: fixtures::products(),
            blog_posts: fixtures::blog_posts(),
            services: fixtures::services(),
            pricing_plans: fixtures::pricing_plans(),
            gallery_images: fixtures::gallery_images(),
        })
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Catalog> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        let base = Self::builtin();
        let catalog = Catalog {
            products: doc.products.unwrap_or_else(|| base.products.clone()),
            blog_posts: doc.blog_posts.unwrap_or_else(|| base.blog_posts.clone()),
            services: doc.services.unwrap_or_else(|| base.services.clone()),
            pricing_plans: doc.pricing_plans.unwrap_or_else(|| base.pricing_plans.clone()),
            gallery_images: doc.gallery_images.unwrap_or_else(|| base.gallery_images.clone()),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_json_file(path: &Path) -> Result<Catalog> {
        debug!("Loading catalog from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| MarketError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            products = catalog.products.len(),
            "Loaded catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Promote a loaded catalog to `'static` so it can be shared like the
    /// built-in one. Intended to be called once at startup.
    pub fn leak(self) -> &'static Catalog {
        Box::leak(Box::new(self))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for p in &self.products {
            if !seen.insert(p.id) {
                return Err(MarketError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    p.id
                )));
            }
            if !(0.0..=5.0).contains(&p.rating) {
                return Err(MarketError::InvalidCatalog(format!(
                    "product {} has rating {} outside 0.0-5.0",
                    p.id, p.rating
                )));
            }
            if p.title.trim().is_empty() {
                return Err(MarketError::InvalidCatalog(format!(
                    "product {} has an empty title",
                    p.id
                )));
            }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// All products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The first [`FEATURED_COUNT`] products.
    pub fn featured_products(&self) -> &[Product] {
        &self.products[..self.products.len().min(FEATURED_COUNT)]
    }

    /// `"All"` followed by each product category in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.products)
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn pricing_plans(&self) -> &[PricingPlan] {
        &self.pricing_plans
    }

    pub fn gallery_images(&self) -> &[GalleryImage] {
        &self.gallery_images
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::models::Money;
    use std::io::Write;

    #[test]
    fn test_builtin_counts() {
        let c = Catalog::builtin();
        assert_eq!(c.products().len(), 8);
        assert_eq!(c.blog_posts().len(), 3);
        assert_eq!(c.services().len(), 4);
        assert_eq!(c.pricing_plans().len(), 3);
        assert_eq!(c.gallery_images().len(), 6);
    }

    #[test]
    fn test_builtin_is_shared_instance() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_builtin_declaration_order_and_prices() {
        let c = Catalog::builtin();
        let ids: Vec<u32> = c.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(c.products()[0].price, Money::from_cents(29_999));
        assert_eq!(c.product(2).unwrap().price, Money::from_cents(19_950));
        assert!(c.product(42).is_none());
    }

    #[test]
    fn test_builtin_passes_validation() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_featured_products_are_first_four() {
        let featured = Catalog::builtin().featured_products();
        let ids: Vec<u32> = featured.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Catalog::builtin().categories(),
            vec!["All", "Electronics", "Fashion", "Furniture", "Home"]
        );
    }

    #[test]
    fn test_only_standard_plan_recommended() {
        let recommended: Vec<&str> = Catalog::builtin()
            .pricing_plans()
            .iter()
            .filter(|p| p.recommended)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(recommended, vec!["standard"]);
    }

    #[test]
    fn test_from_json_products_only_keeps_builtin_pages() {
        let json = r#"{
            "products": [
                {"id": 10, "title": "Linen Shirt", "price": 59.5, "category": "Fashion",
                 "image": "", "description": "Breathable.", "rating": 4.1}
            ]
        }"#;
        let c = Catalog::from_json_str(json).unwrap();
        assert_eq!(c.products().len(), 1);
        assert_eq!(c.products()[0].price, Money::from_cents(5_950));
        assert_eq!(c.blog_posts().len(), 3);
        assert_eq!(c.featured_products().len(), 1);
    }

    #[test]
    fn test_from_json_camel_case_sections() {
        let json = r#"{
            "galleryImages": ["https://example.com/1.jpg"],
            "blogPosts": [
                {"id": 1, "title": "Hello", "excerpt": "e", "date": "2024-02-29",
                 "image": "", "content": "c"}
            ]
        }"#;
        let c = Catalog::from_json_str(json).unwrap();
        assert_eq!(c.gallery_images().len(), 1);
        assert_eq!(c.blog_posts()[0].date.to_string(), "2024-02-29");
        assert_eq!(c.products().len(), 8);
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"{"products": [
            {"id": 1, "title": "A", "price": 1.0, "category": "X", "image": "", "description": "", "rating": 1.0},
            {"id": 1, "title": "B", "price": 2.0, "category": "X", "image": "", "description": "", "rating": 1.0}
        ]}"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, MarketError::InvalidCatalog(_)));
        assert!(err.to_string().contains("duplicate product id 1"));
    }

    #[test]
    fn test_from_json_rejects_bad_rating() {
        let json = r#"{"products": [
            {"id": 1, "title": "A", "price": 1.0, "category": "X", "image": "", "description": "", "rating": 5.5}
        ]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(MarketError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let json = r#"{"products": [
            {"id": 1, "title": "A", "price": -3.0, "category": "X", "image": "", "description": "", "rating": 1.0}
        ]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(MarketError::JsonParse(_))
        ));
    }

    #[test]
    fn test_from_json_file_roundtrip_and_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, r#"{{"services": []}}"#).unwrap();

        let c = Catalog::from_json_file(&path).unwrap();
        assert!(c.services().is_empty());

        let missing = dir.path().join("nope.json");
        let err = Catalog::from_json_file(&missing).unwrap_err();
        assert!(matches!(err, MarketError::FileRead { .. }));
    }

    #[test]
    fn test_leak_gives_static_reference() {
        let c: &'static Catalog = Catalog::from_json_str("{}").unwrap().leak();
        assert_eq!(c, Catalog::builtin());
    }
}
