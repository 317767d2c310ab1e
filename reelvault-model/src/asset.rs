use crate::asset_type::AssetType;
use crate::chrono::{DateTime, Utc};
use crate::error::Result;
use crate::ids::{AssetID, UserID};
use crate::metadata::AssetMetadata;
use crate::money::{Price, RoyaltyPercentage};
use std::fmt;

/// Engagement counters backing the marketplace's popularity ordering.
///
/// Kept explicit on the record so "popular" sorts stay deterministic;
/// the catalog bumps `views`, the ledger bumps `purchases`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetStats {
    pub views: u64,
    pub purchases: u64,
}

/// A purchasable digital item. Immutable once created, apart from the
/// engagement counters and the active flag.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    pub id: AssetID,
    pub uploader: UserID,
    pub asset_type: AssetType,
    pub metadata: AssetMetadata,
    pub price: Price,
    pub royalty: RoyaltyPercentage,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: AssetStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Asset {
    /// Build a validated asset stamped with the current time.
    pub fn new(
        uploader: UserID,
        asset_type: AssetType,
        metadata: AssetMetadata,
        price: Price,
        royalty: RoyaltyPercentage,
    ) -> Result<Self> {
        metadata.validate()?;
        let now = Utc::now();
        Ok(Asset {
            id: AssetID::new(),
            uploader,
            asset_type,
            metadata,
            price,
            royalty,
            stats: AssetStats::default(),
            created_at: now,
            updated_at: now,
            is_active: true,
        })
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    pub fn record_view(&mut self) {
        self.stats.views = self.stats.views.saturating_add(1);
    }

    pub fn record_purchase(&mut self) {
        self.stats.purchases = self.stats.purchases.saturating_add(1);
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset")
            .field("id", &self.id)
            .field("uploader", &self.uploader)
            .field("asset_type", &self.asset_type)
            .field("title", &self.metadata.title)
            .field("price", &self.price)
            .field("royalty", &self.royalty)
            .field("stats", &self.stats)
            .field("created_at", &self.created_at)
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::{DownloadUrl, PreviewUrl};

    fn metadata(title: &str) -> AssetMetadata {
        AssetMetadata {
            title: title.to_string(),
            description: "test".to_string(),
            tags: vec!["test".to_string()],
            duration_secs: Some(10.0),
            resolution: None,
            file_size: 1024,
            preview_url: PreviewUrl::new("/api/preview/1").unwrap(),
            download_url: DownloadUrl::new("/api/download/1").unwrap(),
        }
    }

    #[test]
    fn new_asset_is_active_with_zeroed_stats() {
        let asset = Asset::new(
            UserID::new(),
            AssetType::Template,
            metadata("Intro"),
            Price::new(0.05).unwrap(),
            RoyaltyPercentage::new(10).unwrap(),
        )
        .unwrap();
        assert!(asset.is_active);
        assert_eq!(asset.stats.views, 0);
        assert_eq!(asset.created_at, asset.updated_at);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut meta = metadata("ok");
        meta.title = "   ".to_string();
        let result = Asset::new(
            UserID::new(),
            AssetType::Music,
            meta,
            Price::zero(),
            RoyaltyPercentage::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut meta = metadata("ok");
        meta.duration_secs = Some(-1.0);
        let result = Asset::new(
            UserID::new(),
            AssetType::Footage,
            meta,
            Price::zero(),
            RoyaltyPercentage::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn view_counter_saturates() {
        let mut asset = Asset::new(
            UserID::new(),
            AssetType::Effect,
            metadata("Spark"),
            Price::zero(),
            RoyaltyPercentage::default(),
        )
        .unwrap();
        asset.stats.views = u64::MAX;
        asset.record_view();
        assert_eq!(asset.stats.views, u64::MAX);
    }
}
