//! Shared helpers for translating UI filter state into catalog queries, and
//! the filter/sort engine itself.
//!
//! The engine is a pure function of its two inputs: it never mutates the
//! source collection, performs no I/O, and applies its stages in a fixed
//! order (search, type, price, tags, sort, pagination). Stages whose query
//! field is absent are skipped, so the default query is the identity over
//! the incoming sequence.

use super::sorting::sort_assets_slice;
use super::types::{
    AssetFilters, AssetQuery, SearchField, SearchQuery, SortBy, SortCriteria,
    SortOrder,
};
use reelvault_model::{Asset, AssetType, UiSortOption, UserID};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Parameters collected from UI or other client state to build an `AssetQuery`.
#[derive(Debug, Clone)]
pub struct MarketplaceFilterParams<'a> {
    pub asset_type: Option<AssetType>,
    pub price_range: Option<(f64, f64)>,
    pub tags: &'a [String],
    pub search: Option<&'a str>,
    pub sort: Option<UiSortOption>,
    pub uploader: Option<UserID>,
}

impl<'a> MarketplaceFilterParams<'a> {
    pub fn into_query(self) -> AssetQuery {
        let mut tags: Vec<String> = self.tags.to_vec();
        // Deduplicate to keep predicate chains short
        tags.sort_unstable();
        tags.dedup();

        let search = self.search.and_then(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(SearchQuery::new(trimmed))
            }
        });

        AssetQuery {
            filters: AssetFilters {
                asset_type: self.asset_type,
                price_range: self.price_range,
                tags,
                uploader: self.uploader,
            },
            sort: self.sort.map(ui_sort_to_criteria).unwrap_or_default(),
            search,
            pagination: None,
        }
    }
}

/// Map a listing-UI sort option to engine sort criteria.
///
/// "Popular" orders by the recorded view counter; the engine breaks ties
/// on asset id, so the ordering is reproducible rather than shuffled.
pub fn ui_sort_to_criteria(option: UiSortOption) -> SortCriteria {
    match option {
        UiSortOption::Newest => SortCriteria {
            primary: SortBy::CreatedAt,
            order: SortOrder::Descending,
            secondary: None,
        },
        UiSortOption::Popular => SortCriteria {
            primary: SortBy::Popularity,
            order: SortOrder::Descending,
            secondary: None,
        },
        UiSortOption::PriceLowToHigh => SortCriteria {
            primary: SortBy::Price,
            order: SortOrder::Ascending,
            secondary: None,
        },
        UiSortOption::PriceHighToLow => SortCriteria {
            primary: SortBy::Price,
            order: SortOrder::Descending,
            secondary: None,
        },
    }
}

/// Filter and order an asset collection according to `query`.
///
/// A price range with `min > max` or a non-finite bound matches nothing;
/// malformed bounds degrade to an empty result instead of failing.
pub fn filter_and_sort(assets: &[Asset], query: &AssetQuery) -> Vec<Asset> {
    if let Some((min, max)) = query.filters.price_range
        && (!min.is_finite() || !max.is_finite() || min > max)
    {
        return Vec::new();
    }

    let mut filtered: Vec<Asset> = assets
        .iter()
        .filter(|asset| matches_search(asset, query.search.as_ref()))
        .filter(|asset| matches_filters(asset, &query.filters))
        .cloned()
        .collect();

    sort_assets_slice(&mut filtered, &query.sort);

    if let Some(page) = query.pagination {
        filtered = filtered
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();
    }

    filtered
}

fn matches_search(asset: &Asset, search: Option<&SearchQuery>) -> bool {
    let Some(search) = search else {
        return true;
    };
    let needle = search.text.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let in_field = |field: SearchField| match field {
        SearchField::Title => asset.title().to_lowercase().contains(&needle),
        SearchField::Description => {
            asset.description().to_lowercase().contains(&needle)
        }
        SearchField::Tags => asset
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle)),
        SearchField::All => {
            asset.title().to_lowercase().contains(&needle)
                || asset.description().to_lowercase().contains(&needle)
                || asset
                    .tags()
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        }
    };

    search.fields.iter().copied().any(in_field)
}

fn matches_filters(asset: &Asset, filters: &AssetFilters) -> bool {
    if let Some(asset_type) = filters.asset_type
        && asset.asset_type != asset_type
    {
        return false;
    }

    if let Some((min, max)) = filters.price_range {
        let price = asset.price.value();
        if price < min || price > max {
            return false;
        }
    }

    if !filters.tags.is_empty()
        && !filters.tags.iter().any(|tag| asset.metadata.has_tag(tag))
    {
        return false;
    }

    if let Some(uploader) = filters.uploader
        && asset.uploader != uploader
    {
        return false;
    }

    true
}

/// Compute a stable hash for a query specification
pub fn hash_query(query: &AssetQuery) -> u64 {
    let mut hasher = DefaultHasher::new();
    query.filters.asset_type.map(|t| t.api_name()).hash(&mut hasher);

    match query.filters.price_range {
        Some((min, max)) => {
            min.to_bits().hash(&mut hasher);
            max.to_bits().hash(&mut hasher);
        }
        None => ().hash(&mut hasher),
    }

    let mut tags = query.filters.tags.clone();
    tags.sort();
    tags.dedup();
    tags.hash(&mut hasher);

    query.filters.uploader.map(|u| u.to_uuid()).hash(&mut hasher);

    match query.search.as_ref() {
        Some(search) => search.text.trim().to_lowercase().hash(&mut hasher),
        None => ().hash(&mut hasher),
    }

    query.sort.primary.hash(&mut hasher);
    query.sort.order.hash(&mut hasher);
    query.sort.secondary.hash(&mut hasher);

    if let Some(page) = query.pagination {
        page.offset.hash(&mut hasher);
        page.limit.hash(&mut hasher);
    }

    hasher.finish()
}
