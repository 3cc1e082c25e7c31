//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: strings already
//! truncated, wrapped and windowed, highlight ranges resolved to character
//! indices.

/// One screen worth of renderable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIViewModel {
    Splash(SplashView),
    Listing(ListingView),
    Detail(DetailView),
    Interstitial(InterstitialView),
}

/// Branded splash screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashView {
    pub glyph: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

/// Searchable recipe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub tabs: Vec<TabInfo>,
    /// Alcohol-type shortcuts; empty unless filtering by alcohol type.
    pub chips: Vec<ChipInfo>,
    pub cards: Vec<CardItem>,
    pub empty_state: Option<EmptyState>,
    pub banner: Option<BannerInfo>,
    pub footer: FooterInfo,
}

/// Title and subtitle above the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Shown in place of an empty query.
    pub placeholder: String,
    pub is_focused: bool,
}

/// Filter mode tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: &'static str,
    pub is_active: bool,
}

/// Alcohol-type shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipInfo {
    pub label: String,
    pub is_active: bool,
}

/// One recipe card in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub name: String,
    /// Character range of the query inside `name`.
    pub name_highlight: Option<(usize, usize)>,
    pub badge: String,
    /// Character range of the query inside `badge`.
    pub badge_highlight: Option<(usize, usize)>,
    pub glass: String,
    pub ingredients: String,
    /// `"Pair with: ..."`, absent when the recipe lists no pairings.
    pub pairings: Option<String>,
    pub is_selected: bool,
}

/// Message shown when the filter matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Banner ad line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub advertiser: String,
    pub headline: String,
    pub call_to_action: String,
}

/// Keybinding help line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Full recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub back_label: &'static str,
    pub title: String,
    pub badge: String,
    /// Body lines inside the scroll window.
    pub lines: Vec<DetailLine>,
    pub has_more_above: bool,
    pub has_more_below: bool,
    pub footer: FooterInfo,
}

/// One line of the recipe body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Heading(String),
    Text(String),
    Bullet(String),
    Blank,
}

/// Full-pane interstitial ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterstitialView {
    pub label: &'static str,
    pub advertiser: String,
    pub headline: String,
    pub body: Vec<String>,
    pub call_to_action: String,
    pub prompt: &'static str,
}
