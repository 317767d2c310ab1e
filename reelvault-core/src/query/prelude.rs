//! Intentional query crate surface consumed by listing/search clients.

pub use super::builder::AssetQueryBuilder;
pub use super::filtering::{
    MarketplaceFilterParams, filter_and_sort, hash_query, ui_sort_to_criteria,
};
pub use super::sorting::{compare_assets, sort_assets_slice};
pub use super::types::{
    AssetFilters, AssetQuery, Pagination, QueryError, SearchField,
    SearchQuery, SortBy, SortCriteria, SortOrder,
};
