//! The loaded asset collection queried by listing surfaces.
//!
//! The catalog owns the in-memory records; queries clone matching assets
//! out so concurrent-looking UI refreshes never observe partial state.

use crate::error::{MarketError, Result};
use crate::query::{AssetQuery, filter_and_sort, hash_query};
use reelvault_model::{Asset, AssetID};
use std::collections::HashMap;
use tracing::debug;

/// In-memory asset store preserving insertion order.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
    index: HashMap<AssetID, usize>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset. Metadata is re-validated at this boundary so records
    /// built by hand (demo fixtures, deserialized payloads) cannot smuggle
    /// malformed values into the filter pipeline.
    pub fn insert(&mut self, asset: Asset) -> Result<()> {
        asset.metadata.validate()?;
        if self.index.contains_key(&asset.id) {
            return Err(MarketError::DuplicateAsset(asset.id));
        }
        self.index.insert(asset.id, self.assets.len());
        self.assets.push(asset);
        Ok(())
    }

    pub fn get(&self, id: &AssetID) -> Option<&Asset> {
        self.index.get(id).map(|&at| &self.assets[at])
    }

    /// All assets in insertion order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Assets currently listed for sale.
    pub fn active_assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(|asset| asset.is_active)
    }

    /// Run a query against the full collection.
    pub fn query(&self, query: &AssetQuery) -> Vec<Asset> {
        let hits = filter_and_sort(&self.assets, query);
        debug!(
            query_hash = hash_query(query),
            total = self.assets.len(),
            matched = hits.len(),
            "catalog query"
        );
        hits
    }

    /// Bump the view counter feeding the popularity ordering.
    pub fn record_view(&mut self, id: &AssetID) -> Result<u64> {
        let asset = self.get_mut(id)?;
        asset.record_view();
        Ok(asset.stats.views)
    }

    pub(crate) fn record_purchase(&mut self, id: &AssetID) -> Result<()> {
        self.get_mut(id)?.record_purchase();
        Ok(())
    }

    /// Take an asset off the marketplace without forgetting it.
    pub fn deactivate(&mut self, id: &AssetID) -> Result<()> {
        self.get_mut(id)?.deactivate();
        Ok(())
    }

    fn get_mut(&mut self, id: &AssetID) -> Result<&mut Asset> {
        match self.index.get(id) {
            Some(&at) => Ok(&mut self.assets[at]),
            None => Err(MarketError::AssetNotFound(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvault_model::{
        AssetMetadata, AssetType, DownloadUrl, PreviewUrl, Price,
        RoyaltyPercentage, UserID,
    };

    fn asset(title: &str) -> Asset {
        Asset::new(
            UserID::new(),
            AssetType::Template,
            AssetMetadata {
                title: title.to_string(),
                description: String::new(),
                tags: vec![],
                duration_secs: None,
                resolution: None,
                file_size: 10,
                preview_url: PreviewUrl::new("/p").unwrap(),
                download_url: DownloadUrl::new("/d").unwrap(),
            },
            Price::zero(),
            RoyaltyPercentage::default(),
        )
        .unwrap()
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut catalog = AssetCatalog::new();
        let a = asset("one");
        let id = a.id;
        catalog.insert(a.clone()).unwrap();
        assert!(matches!(
            catalog.insert(a),
            Err(MarketError::DuplicateAsset(dup)) if dup == id
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn insert_revalidates_metadata() {
        let mut catalog = AssetCatalog::new();
        let mut bad = asset("ok");
        bad.metadata.duration_secs = Some(-5.0);
        assert!(catalog.insert(bad).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn record_view_feeds_popularity() {
        let mut catalog = AssetCatalog::new();
        let a = asset("clip");
        let id = a.id;
        catalog.insert(a).unwrap();
        assert_eq!(catalog.record_view(&id).unwrap(), 1);
        assert_eq!(catalog.record_view(&id).unwrap(), 2);
        assert!(catalog.record_view(&AssetID::new()).is_err());
    }

    #[test]
    fn deactivated_assets_leave_the_active_listing() {
        let mut catalog = AssetCatalog::new();
        let a = asset("gone");
        let id = a.id;
        catalog.insert(a).unwrap();
        catalog.deactivate(&id).unwrap();
        assert_eq!(catalog.active_assets().count(), 0);
        assert_eq!(catalog.len(), 1);
    }
}
