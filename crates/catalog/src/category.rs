use common::{CategoryId, Slug};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog primary key.
    pub id: CategoryId,

    /// Display name.
    pub name: String,

    /// URL-safe identifier, unique across categories.
    pub slug: Slug,
}

impl Category {
    /// Creates a category, deriving the slug from the name.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = Slug::from_name(&name);
        Self {
            id: id.into(),
            name,
            slug,
        }
    }
}
