//! Shopping cart state store for the astrea storefront.
//!
//! The cart is the single source of truth for what the shopper intends
//! to buy. This crate provides:
//! - [`Cart`] / [`CartLine`] — the pure state: an ordered list of lines,
//!   unique by product id, with derived totals
//! - [`CartStore`] — the shared store views read from and mutate through,
//!   persisting a snapshot after every change and notifying subscribers
//!
//! The store never surfaces errors: a missing or corrupt snapshot resets
//! to an empty cart, and mutations on unknown products are no-ops.

pub mod cart;
pub mod line;
pub mod store;

pub use cart::Cart;
pub use line::CartLine;
pub use store::{CartStore, DEFAULT_CART_KEY};
