//! Product record and derived display helpers.

use common::{CategoryId, Money, ProductId, Slug};
use serde::{Deserialize, Serialize};

/// Products at or below this stock level are flagged as running low.
const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog primary key.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// URL-safe identifier, unique across the catalog.
    pub slug: Slug,

    /// Current sale price per unit.
    pub price: Money,

    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,

    /// Units currently available.
    pub stock: u32,

    /// Category this product belongs to.
    pub category: CategoryId,

    /// Average review rating, 0.0–5.0.
    pub rating: f32,

    /// Number of reviews received.
    pub reviews: u32,

    /// Short description shown on cards and the detail page.
    pub description: String,

    /// Product image URL.
    pub img: String,

    /// Optional promotional badge (e.g. "Best Seller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Creates a product with the required storefront fields, deriving
    /// the slug from the name. Remaining fields start empty and can be
    /// set directly.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money, stock: u32) -> Self {
        let name = name.into();
        let slug = Slug::from_name(&name);
        Self {
            id: id.into(),
            name,
            slug,
            price,
            original_price: None,
            stock,
            category: CategoryId::new(0),
            rating: 0.0,
            reviews: 0,
            description: String::new(),
            img: String::new(),
            badge: None,
        }
    }

    /// Returns true if any units are available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns true if the product is at or below the low-stock threshold.
    pub fn low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }

    /// Returns the discount percentage when an original price above the
    /// sale price exists, rounded to the nearest whole percent.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || !original.is_positive() {
            return None;
        }
        let saved = original - self.price;
        let percent =
            (saved.cents() as f64 / original.cents() as f64 * 100.0).round() as u32;
        Some(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        let mut p = Product::new(1, "Gaming Laptop", Money::from_major(15_000_000), 10);
        p.description = "A powerful laptop".to_string();
        p.rating = 4.5;
        p.reviews = 100;
        p
    }

    #[test]
    fn new_derives_slug_from_name() {
        let p = laptop();
        assert_eq!(p.slug.as_str(), "gaming-laptop");
    }

    #[test]
    fn in_stock_and_low_stock() {
        let mut p = laptop();
        assert!(p.in_stock());
        assert!(!p.low_stock());

        p.stock = 5;
        assert!(p.low_stock());

        p.stock = 0;
        assert!(!p.in_stock());
        assert!(p.low_stock());
    }

    #[test]
    fn discount_percent_rounds() {
        let mut p = Product::new(2, "T-Shirt", Money::from_major(75), 50);
        p.original_price = Some(Money::from_major(100));
        assert_eq!(p.discount_percent(), Some(25));

        p.original_price = Some(Money::from_major(90));
        // 15/90 = 16.67% -> 17%
        assert_eq!(p.discount_percent(), Some(17));
    }

    #[test]
    fn discount_percent_absent_without_markup() {
        let mut p = Product::new(3, "Book", Money::from_major(15), 30);
        assert_eq!(p.discount_percent(), None);

        // Original price equal to the sale price is not a discount.
        p.original_price = Some(Money::from_major(15));
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn serialization_roundtrip_keeps_all_fields() {
        let mut p = laptop();
        p.original_price = Some(Money::from_major(18_000_000));
        p.badge = Some("Promo".to_string());

        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let p = laptop();
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("original_price"));
        assert!(!json.contains("badge"));
    }
}
