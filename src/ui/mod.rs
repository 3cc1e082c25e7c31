//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready screen descriptions
//! - [`renderer`]: Dispatch from view model to screen
//! - [`components`]: Screen parts printed at explicit rows
//! - [`helpers`]: Character-aware text utilities and match highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, DetailLine, DetailView, EmptyState, FooterInfo, HeaderInfo, InterstitialView,
    ListingView, SearchBarInfo, SplashView, UIViewModel,
};
