//! Checkout for the astrea storefront.
//!
//! Validates the shopper's checkout form, computes the order totals
//! (service fee and tax on top of the cart subtotal), and places the
//! order, which clears the cart. This is the one layer where failures
//! are surfaced to the caller: the cart store itself never errors.

pub mod error;
pub mod form;
pub mod order;
pub mod totals;

pub use error::CheckoutError;
pub use form::{CheckoutForm, PaymentMethod};
pub use order::{OrderId, PlacedOrder, place_order};
pub use totals::OrderTotals;
