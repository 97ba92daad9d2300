//! Pure cart state and derived totals.

use catalog::Product;
use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::line::CartLine;

/// The cart contents: an ordered sequence of lines, unique by product id.
///
/// Lines keep the order in which their products were first added;
/// quantity updates never reorder them. Serializes as a plain array of
/// lines, which is the persisted snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product. If the product is already in the
    /// cart its quantity is incremented; otherwise a new line is
    /// appended. Quantities are not clamped to stock here; the detail
    /// page validates before calling.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::for_product(product));
        }
    }

    /// Sets a line's quantity. A quantity of 0 removes the line; an
    /// unknown product id is a no-op.
    ///
    /// The quantity is signed so callers can pass `current - 1` from a
    /// decrement control without underflow checks; anything ≤ 0 removes.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity as u32;
        }
    }

    /// Removes a line if present; no-op otherwise.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity as u64).sum()
    }

    /// Returns the sum of `unit_price * quantity` across all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::total_price).sum()
    }

    /// Returns true if a line for the product exists.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|line| line.product_id == product_id)
    }

    /// Returns the line's quantity, or 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Returns all lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use common::Slug;

    use super::*;

    fn product(id: i64, name: &str, price_major: i64, stock: u32) -> Product {
        Product::new(id, name, Money::from_major(price_major), stock)
    }

    #[test]
    fn add_new_product_appends_line() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);

        cart.add(&laptop);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), Money::from_major(1000));
    }

    #[test]
    fn add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);

        cart.add(&laptop);
        cart.add(&laptop);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(laptop.id), 2);
        assert_eq!(cart.total_price(), Money::from_major(2000));
    }

    #[test]
    fn quantity_equals_number_of_adds() {
        let mut cart = Cart::new();
        let shirt = product(2, "T-Shirt", 20, 50);

        for _ in 0..7 {
            cart.add(&shirt);
        }

        assert_eq!(cart.quantity_of(shirt.id), 7);
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn set_quantity_updates_totals() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);
        cart.add(&laptop);

        cart.set_quantity(laptop.id, 5);

        assert_eq!(cart.quantity_of(laptop.id), 5);
        assert_eq!(cart.total_price(), Money::from_major(5000));
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);
        cart.add(&laptop);

        cart.set_quantity(laptop.id, 0);

        assert!(!cart.contains(laptop.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);
        cart.add(&laptop);

        // A decrement control can push the quantity below zero.
        cart.set_quantity(laptop.id, -1);

        assert!(!cart.contains(laptop.id));
    }

    #[test]
    fn set_quantity_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptop", 1000, 5));

        cart.set_quantity(ProductId::new(99), 3);

        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(99)), 0);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);
        cart.add(&laptop);

        cart.remove(laptop.id);
        let after_first = cart.clone();
        cart.remove(laptop.id);

        assert_eq!(cart, after_first);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptop", 1000, 5));
        cart.add(&product(2, "T-Shirt", 20, 50));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn insertion_order_survives_quantity_updates() {
        let mut cart = Cart::new();
        let b = product(2, "Book", 15, 30);
        let c = product(3, "Charger", 35, 12);
        cart.add(&b);
        cart.add(&c);

        cart.set_quantity(b.id, 9);
        cart.add(&c);

        let ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![b.id, c.id]);
    }

    #[test]
    fn totals_sum_over_mixed_lines() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptop", 1000, 5);
        let shirt = product(2, "T-Shirt", 20, 50);
        cart.add(&laptop);
        cart.add(&shirt);
        cart.set_quantity(shirt.id, 3);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Money::from_major(1000 + 60));
    }

    #[test]
    fn line_exposes_product_fields() {
        let mut cart = Cart::new();
        let mut laptop = product(1, "Laptop", 1000, 5);
        laptop.img = "/uploads/laptop.jpg".to_string();
        cart.add(&laptop);

        let line = cart.line(laptop.id).unwrap();
        assert_eq!(line.slug, Slug::new("laptop"));
        assert_eq!(line.img, "/uploads/laptop.jpg");
        assert_eq!(line.stock, 5);
    }

    #[test]
    fn serialization_roundtrip_preserves_order_and_fields() {
        let mut cart = Cart::new();
        cart.add(&product(2, "Book", 15, 30));
        cart.add(&product(1, "Laptop", 1000, 5));
        cart.set_quantity(ProductId::new(2), 4);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, cart);
        let ids: Vec<ProductId> = restored.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![ProductId::new(2), ProductId::new(1)]);
    }

    #[test]
    fn snapshot_format_is_a_line_array() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptop", 1000, 5));

        let value: serde_json::Value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
