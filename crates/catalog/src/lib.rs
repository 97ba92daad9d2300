//! Product and category catalog types for the astrea storefront.
//!
//! This crate provides the read-side shapes the storefront renders:
//! - [`Product`] and [`Category`] records as served by the catalog API
//! - [`ProductFilter`] — the dashboard's in-memory search/filter/sort

pub mod category;
pub mod filter;
pub mod product;

pub use category::Category;
pub use filter::{ProductFilter, SortKey};
pub use product::Product;
