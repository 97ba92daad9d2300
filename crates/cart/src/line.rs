use catalog::Product;
use common::{Money, ProductId, Slug};
use serde::{Deserialize, Serialize};

/// One product entry in the cart with its quantity.
///
/// Carries every product field the cart and checkout views render, so a
/// persisted cart can be displayed without re-fetching the catalog. The
/// stock level is a hint for caller-side validation; the cart itself
/// does not clamp quantities to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to; unique within a cart.
    pub product_id: ProductId,

    /// Product display name.
    pub name: String,

    /// Product slug, for linking back to the detail page.
    pub slug: Slug,

    /// Price per unit at the time the product was added.
    pub unit_price: Money,

    /// Product image URL.
    pub img: String,

    /// Available stock at the time the product was added.
    pub stock: u32,

    /// Number of units in the cart; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line for one unit of a product.
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            unit_price: product.price,
            img: product.img.clone(),
            stock: product.stock,
            quantity: 1,
        }
    }

    /// Returns the total price for this line (`unit_price * quantity`).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
