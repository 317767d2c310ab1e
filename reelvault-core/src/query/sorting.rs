use super::types::{SortBy, SortCriteria, SortOrder};
use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use reelvault_model::Asset;
use std::cmp::Ordering;

/// Compare two assets using the provided sort field and order.
/// `InsertionOrder` always yields `Equal` so a stable sort leaves the
/// incoming sequence untouched.
pub fn compare_assets(
    a: &Asset,
    b: &Asset,
    sort_by: SortBy,
    sort_order: SortOrder,
) -> Ordering {
    let ord = match sort_by {
        SortBy::InsertionOrder => Ordering::Equal,
        SortBy::Title => {
            let a_title = a.title().to_lowercase();
            let b_title = b.title().to_lowercase();
            a_title.cmp(&b_title)
        }
        SortBy::CreatedAt => get_created_at(a).cmp(&get_created_at(b)),
        SortBy::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortBy::Price => {
            OrderedFloat(a.price.value()).cmp(&OrderedFloat(b.price.value()))
        }
        SortBy::Popularity => a.stats.views.cmp(&b.stats.views),
        SortBy::Duration => {
            compare_optional(get_duration(a), get_duration(b))
        }
        SortBy::FileSize => {
            a.metadata.file_size.cmp(&b.metadata.file_size)
        }
    };

    if sort_order == SortOrder::Descending {
        ord.reverse()
    } else {
        ord
    }
}

/// Sort an asset slice in-place using the given criteria.
///
/// The sort is stable, so assets that compare equal keep their relative
/// input order. Popularity ties additionally fall back to ascending asset
/// id, keeping the "popular" ordering deterministic across calls.
pub fn sort_assets_slice(items: &mut [Asset], criteria: &SortCriteria) {
    items.sort_by(|a, b| {
        let mut ord = compare_assets(a, b, criteria.primary, criteria.order);
        if ord == Ordering::Equal
            && let Some(secondary) = criteria.secondary
        {
            ord = compare_assets(a, b, secondary, SortOrder::Ascending);
        }
        if ord == Ordering::Equal && criteria.primary == SortBy::Popularity {
            ord = a.id.cmp(&b.id);
        }
        ord
    });
}

fn get_created_at(asset: &Asset) -> DateTime<Utc> {
    asset.created_at
}

fn get_duration(asset: &Asset) -> Option<OrderedFloat<f64>> {
    asset.metadata.duration_secs.map(OrderedFloat)
}

fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
