//! Shared value objects for the astrea storefront.
//!
//! These types are used across the catalog, cart, and checkout crates:
//! - [`ProductId`] / [`CategoryId`] — typed wrappers over catalog row ids
//! - [`Money`] — fixed-point currency amount in minor units
//! - [`Slug`] — URL-safe identifier derived from a display name

pub mod money;
pub mod types;

pub use money::Money;
pub use types::{CategoryId, ProductId, Slug};
