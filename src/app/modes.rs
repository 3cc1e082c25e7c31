//! Screen and input mode types.
//!
//! [`NavigationState`] is the screen being shown. [`InputMode`] decides how
//! keys are interpreted while the listing is on screen.
//!
//! ```text
//! Splash ──timer──▶ Listing ◀──back── Detail(id)
//!                      │                  ▲
//!                      └──select──────────┘
//! ```

use crate::domain::RecipeId;

/// Current input handling mode of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands.
    #[default]
    Normal,

    /// Search bar focused: characters go to the query, arrows move the
    /// selection.
    Search,
}

/// The screen on display.
///
/// `Detail` holds the recipe identifier only; the record itself lives in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Splash,
    Listing,
    Detail(RecipeId),
}
