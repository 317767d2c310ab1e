use reelvault_model::{AssetID, GenerationID, TransactionID};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Model error: {0}")]
    Model(#[from] reelvault_model::ModelError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Asset not found: {0}")]
    AssetNotFound(AssetID),

    #[error("Duplicate asset: {0}")]
    DuplicateAsset(AssetID),

    #[error("Asset is not listed for sale: {0}")]
    AssetInactive(AssetID),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionID),

    #[error("Transaction already settled: {0}")]
    AlreadySettled(TransactionID),

    #[error("Generation job not found: {0}")]
    JobNotFound(GenerationID),

    #[error("Invalid job transition: {0}")]
    InvalidJobTransition(String),

    #[error("Insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: u32, available: u32 },
}

pub type Result<T> = std::result::Result<T, MarketError>;
