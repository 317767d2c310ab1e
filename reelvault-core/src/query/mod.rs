pub mod builder;
pub mod filtering;
pub mod prelude;
pub mod sorting;
pub mod types;


pub use builder::AssetQueryBuilder;
pub use filtering::{MarketplaceFilterParams, filter_and_sort, hash_query};
pub use sorting::*;
pub use types::*;
