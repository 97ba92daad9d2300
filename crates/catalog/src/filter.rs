//! In-memory product list filtering and sorting.
//!
//! The storefront dashboard fetches the whole catalog once and then
//! narrows it client-side: text search over name and description, an
//! optional category filter, and one of five sort orders.

use common::CategoryId;

use crate::Product;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetical by name (the dashboard default).
    #[default]
    Name,

    /// Cheapest first.
    PriceLowHigh,

    /// Most expensive first.
    PriceHighLow,

    /// Highest rating first.
    Rating,

    /// Most reviewed first.
    Popular,
}

/// Filter and sort criteria for a product list.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    search: Option<String>,
    category: Option<CategoryId>,
    sort: SortKey,
}

impl ProductFilter {
    /// Creates an empty filter: matches everything, sorted by name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to products whose name or description contains
    /// `query`, case-insensitively.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Restricts matches to a single category.
    pub fn category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the sort order.
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Applies the filter and sort to a product list, returning a new
    /// list and leaving the input unchanged.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| {
                if let Some(ref query) = self.search {
                    let query = query.to_lowercase();
                    if !p.name.to_lowercase().contains(&query)
                        && !p.description.to_lowercase().contains(&query)
                    {
                        return false;
                    }
                }
                if let Some(category) = self.category
                    && p.category != category
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        match self.sort {
            SortKey::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::PriceLowHigh => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHighLow => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Popular => matched.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        }

        matched
    }
}
