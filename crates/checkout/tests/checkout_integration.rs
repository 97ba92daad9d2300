//! End-to-end shopping flow: browse, fill the cart, check out.

use cart::CartStore;
use catalog::{Product, ProductFilter, SortKey};
use checkout::{CheckoutError, CheckoutForm, PaymentMethod, place_order};
use common::{CategoryId, Money, ProductId};
use snapshot_store::InMemoryStore;

fn sample_catalog() -> Vec<Product> {
    let mut laptop = Product::new(1, "Laptop", Money::from_major(1_000), 10);
    laptop.category = CategoryId::new(1);
    laptop.description = "A powerful laptop".to_string();
    laptop.reviews = 100;

    let mut shirt = Product::new(2, "T-Shirt", Money::from_major(20), 50);
    shirt.category = CategoryId::new(2);
    shirt.description = "Comfortable t-shirt".to_string();
    shirt.reviews = 50;

    let mut book = Product::new(3, "Book", Money::from_major(15), 30);
    book.category = CategoryId::new(3);
    book.description = "Interesting book".to_string();
    book.reviews = 20;

    vec![laptop, shirt, book]
}

fn shopper() -> CheckoutForm {
    CheckoutForm {
        email: "budi@example.com".to_string(),
        first_name: "Budi".to_string(),
        last_name: "Santoso".to_string(),
        address: "Jl. Merdeka No. 17".to_string(),
        city: "Bandung".to_string(),
        postal_code: "40111".to_string(),
        phone: "+62 811 2233 4455".to_string(),
        payment_method: PaymentMethod::BankTransfer,
    }
}

#[test]
fn full_shopping_flow() {
    let catalog = sample_catalog();
    let backend = InMemoryStore::new();
    let store = CartStore::open_default(backend.clone());

    // Browse: cheapest first, pick the two cheapest products.
    let browsing = ProductFilter::new()
        .sort(SortKey::PriceLowHigh)
        .apply(&catalog);
    store.add(&browsing[0]); // Book
    store.add(&browsing[1]); // T-Shirt
    store.add(&browsing[1]);

    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_price(), Money::from_major(15 + 40));

    // Check out.
    let order = place_order(&store, shopper()).unwrap();

    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.totals.subtotal, Money::from_major(55));
    assert_eq!(order.customer.full_name(), "Budi Santoso");

    // The cart is cleared in memory and in the persisted snapshot.
    assert!(store.is_empty());
    let reopened = CartStore::open_default(backend);
    assert!(reopened.is_empty());
}

#[test]
fn checkout_rejects_unknown_cart_and_keeps_state() {
    let store = CartStore::open_default(InMemoryStore::new());
    assert_eq!(
        place_order(&store, shopper()).unwrap_err(),
        CheckoutError::EmptyCart
    );

    let laptop = &sample_catalog()[0];
    store.add(laptop);

    let mut incomplete = shopper();
    incomplete.postal_code.clear();
    assert_eq!(
        place_order(&store, incomplete).unwrap_err(),
        CheckoutError::MissingField {
            field: "postal_code"
        }
    );
    assert!(store.contains(ProductId::new(1)));
}

#[test]
fn order_captures_lines_in_cart_order() {
    let catalog = sample_catalog();
    let store = CartStore::open_default(InMemoryStore::new());

    store.add(&catalog[2]); // Book first
    store.add(&catalog[0]); // then Laptop
    store.set_quantity(ProductId::new(3), 2);

    let order = place_order(&store, shopper()).unwrap();
    let ids: Vec<ProductId> = order.lines.iter().map(|l| l.product_id).collect();
    assert_eq!(ids, vec![ProductId::new(3), ProductId::new(1)]);
    assert_eq!(order.lines[0].quantity, 2);
}
