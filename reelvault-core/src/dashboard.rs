//! Aggregated per-user statistics for the dashboard view.

use crate::catalog::AssetCatalog;
use crate::market::TransactionLedger;
use reelvault_model::{UserID, VideoProject};
use serde::{Deserialize, Serialize};

/// The stat tiles shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Confirmed purchase income across the user's catalog.
    pub total_earnings: f64,
    /// Views accumulated by the user's uploaded assets.
    pub total_views: u64,
    /// Projects still in draft or generating.
    pub active_projects: usize,
    /// Assets uploaded by the user.
    pub assets_owned: usize,
}

impl DashboardStats {
    /// Pure aggregation over the in-memory records; nothing is cached.
    pub fn collect(
        user: &UserID,
        catalog: &AssetCatalog,
        projects: &[VideoProject],
        ledger: &TransactionLedger,
    ) -> Self {
        let owned = catalog
            .assets()
            .iter()
            .filter(|asset| asset.uploader == *user);

        let mut total_views = 0;
        let mut assets_owned = 0;
        for asset in owned {
            total_views += asset.stats.views;
            assets_owned += 1;
        }

        DashboardStats {
            total_earnings: ledger.earnings_for(user),
            total_views,
            active_projects: projects
                .iter()
                .filter(|p| p.owner == *user && p.status.is_active())
                .count(),
            assets_owned,
        }
    }
}
