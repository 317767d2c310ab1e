//! # Reelvault Core
//!
//! Core library for the Reelvault video-asset marketplace, providing the
//! asset catalog, the filter/sort query engine, and the business logic for
//! purchases and AI generation jobs.
//!
//! ## Overview
//!
//! `reelvault-core` is the foundation of the Reelvault ecosystem, offering:
//!
//! - **Query System**: Pure, deterministic asset filtering and sorting
//! - **Catalog**: An in-memory asset collection with engagement counters
//! - **Marketplace**: A transaction ledger with explicit settlement states
//! - **AI Studio**: Generation-job tracking with credit accounting
//! - **Dashboard**: Per-user aggregate statistics
//! - **Demo Mode**: Reproducible catalog seeding for development
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`query`]: Asset querying with filters and sorting
//! - [`catalog`]: The loaded asset collection queried by listing surfaces
//! - [`market`]: Purchase transactions and settlement
//! - [`studio`]: AI generation requests and job lifecycle
//! - [`dashboard`]: Aggregated per-user statistics
//! - [`demo`]: Demo catalog generation
//!
//! ## Examples
//!
//! ```
//! use reelvault_core::demo::{DemoCatalogOptions, seed_catalog};
//! use reelvault_core::query::AssetQueryBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = seed_catalog(&DemoCatalogOptions::default())?;
//! let query = AssetQueryBuilder::new()
//!     .search("business")
//!     .price_range(0.0, 0.5)?
//!     .build();
//! let hits = catalog.query(&query);
//! assert!(hits.len() <= catalog.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dashboard;
pub mod demo;
pub mod error;
pub mod market;
pub mod query;
pub mod studio;

pub use catalog::AssetCatalog;
pub use dashboard::DashboardStats;
pub use error::{MarketError, Result};
pub use market::{SettlementEvent, SettlementSource, TransactionLedger};
pub use studio::{GenerationEvent, GenerationJob, GenerationSource, JobState, Studio};
