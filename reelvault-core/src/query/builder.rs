use super::types::*;
use reelvault_model::{AssetType, UserID};

/// Fluent API for building asset queries
#[derive(Debug, Clone)]
pub struct AssetQueryBuilder {
    query: AssetQuery,
}

impl AssetQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self {
            query: AssetQuery::default(),
        }
    }

    // === Filter methods ===

    /// Filter by asset category
    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.query.filters.asset_type = Some(asset_type);
        self
    }

    /// Filter by inclusive price range. Bounds must be finite; they are
    /// reordered when given backwards.
    pub fn price_range(mut self, min: f64, max: f64) -> Result<Self, QueryError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(QueryError::InvalidQuery(format!(
                "price bounds must be finite, got [{min}, {max}]"
            )));
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.query.filters.price_range = Some((lo, hi));
        Ok(self)
    }

    /// Require at least one of the asset's tags to match (match-any)
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.query.filters.tags.push(tag.into());
        self
    }

    /// Filter by multiple tags (match-any)
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.query.filters.tags = tags;
        self
    }

    /// Filter to a single uploader's catalog
    pub fn by_uploader(mut self, uploader: UserID) -> Self {
        self.query.filters.uploader = Some(uploader);
        self
    }

    // === Search methods ===

    /// Add text search across title, description, and tags
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = Some(SearchQuery::new(text));
        self
    }

    /// Add text search restricted to specific fields
    pub fn search_in(
        mut self,
        text: impl Into<String>,
        fields: Vec<SearchField>,
    ) -> Self {
        self.query.search = Some(SearchQuery {
            text: text.into(),
            fields,
        });
        self
    }

    // === Sort methods ===

    /// Set primary sort field and order
    pub fn sort_by(mut self, field: SortBy, order: SortOrder) -> Self {
        self.query.sort.primary = field;
        self.query.sort.order = order;
        self
    }

    /// Add secondary sort for stable sorting
    pub fn then_by(mut self, field: SortBy) -> Self {
        self.query.sort.secondary = Some(field);
        self
    }

    // === Pagination methods ===

    /// Limit the result set, starting from the first sorted asset
    pub fn limit(mut self, limit: usize) -> Self {
        let offset = self.query.pagination.map(|p| p.offset).unwrap_or(0);
        self.query.pagination = Some(Pagination { offset, limit });
        self
    }

    /// Set page (convenience method)
    pub fn page(mut self, page: usize, per_page: usize) -> Self {
        self.query.pagination = Some(Pagination {
            offset: page * per_page,
            limit: per_page,
        });
        self
    }

    // === Build method ===

    /// Build the final query
    pub fn build(self) -> AssetQuery {
        self.query
    }
}

impl Default for AssetQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// === Convenience constructors ===

impl AssetQuery {
    /// Create a simple search query
    pub fn search(text: impl Into<String>) -> Self {
        AssetQueryBuilder::new().search(text).build()
    }

    /// Create a browse query for one asset category, newest first
    pub fn browse_type(asset_type: AssetType, limit: usize) -> Self {
        AssetQueryBuilder::new()
            .asset_type(asset_type)
            .sort_by(SortBy::CreatedAt, SortOrder::Descending)
            .limit(limit)
            .build()
    }
}
