//! Core data model definitions shared across Reelvault crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod asset;
pub mod asset_type;
pub mod error;
pub mod filter_types;
pub mod generation;
pub mod ids;
pub mod metadata;
pub mod money;
pub mod prelude;
pub mod project;
pub mod transaction;
pub mod urls;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use asset::{Asset, AssetStats};
pub use asset_type::AssetType;
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{UiSortOption, popular_tags};
pub use generation::{GenerationRequest, GenerationType, QualityTier};
pub use ids::{AssetID, GenerationID, ProjectID, TransactionID, UserID};
pub use metadata::{AssetMetadata, Resolution};
pub use money::{Price, RoyaltyPercentage};
pub use project::{ProjectCustomizations, ProjectStatus, VideoProject};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use urls::{DownloadUrl, PreviewUrl};
pub use user::{ProfileInfo, User};
