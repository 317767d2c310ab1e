//! Presentation-focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in listing or orchestration layers.

pub use super::asset::{Asset, AssetStats};
pub use super::asset_type::AssetType;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::filter_types::{UiSortOption, popular_tags};
pub use super::generation::{GenerationRequest, GenerationType, QualityTier};
pub use super::ids::{AssetID, GenerationID, ProjectID, TransactionID, UserID};
pub use super::metadata::{AssetMetadata, Resolution};
pub use super::money::{Price, RoyaltyPercentage};
pub use super::project::{ProjectCustomizations, ProjectStatus, VideoProject};
pub use super::transaction::{Transaction, TransactionKind, TransactionStatus};
pub use super::urls::{DownloadUrl, PreviewUrl};
pub use super::user::{ProfileInfo, User};
