//! Domain layer for the Emerald Shaker plugin.
//!
//! Core types that know nothing about Zellij, rendering, or the ad network.
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe record and identifier

pub mod error;
pub mod recipe;

pub use error::{Result, ShakerError};
pub use recipe::{Recipe, RecipeId};
