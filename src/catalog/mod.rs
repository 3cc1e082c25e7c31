//! Recipe catalog: the bundled read-only store and the filter engine over it.
//!
//! # Modules
//!
//! - `store`: [`Catalog`], built once from compiled-in JSON
//! - `filter`: [`filter`], [`QueryState`], [`FilterMode`] and match highlighting

pub mod filter;
pub mod store;

pub use filter::{filter, match_range, normalize_query, FilterMode, QueryState};
pub use store::Catalog;
