use reelvault_model::{AssetType, UserID};
use serde::{Deserialize, Serialize};

/// Main query structure consumed by listing surfaces
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetQuery {
    pub filters: AssetFilters,
    pub sort: SortCriteria,
    pub search: Option<SearchQuery>,
    pub pagination: Option<Pagination>,
}

/// Asset filtering options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetFilters {
    pub asset_type: Option<AssetType>,
    /// Inclusive on both ends.
    pub price_range: Option<(f64, f64)>,
    /// Match-any: an asset qualifies when its tag list intersects this set.
    pub tags: Vec<String>,
    pub uploader: Option<UserID>,
}

/// Sort criteria for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortCriteria {
    pub primary: SortBy,
    pub order: SortOrder,
    pub secondary: Option<SortBy>, // For stable sorting
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            primary: SortBy::InsertionOrder,
            order: SortOrder::Ascending,
            secondary: None,
        }
    }
}

/// Fields available for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Leave the working sequence in its incoming order.
    InsertionOrder,
    Title,
    CreatedAt,
    UpdatedAt,
    Price,
    /// Orders by recorded view count; ties broken by asset id so repeated
    /// queries return identical sequences.
    Popularity,
    Duration,
    FileSize,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Search query options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub fields: Vec<SearchField>,
}

impl SearchQuery {
    /// Case-insensitive substring search across all text fields.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fields: vec![SearchField::All],
        }
    }
}

/// Fields to search in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Description,
    Tags,
    All,
}

/// Pagination options, applied after sorting
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

/// Query construction error
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
}
