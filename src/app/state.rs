//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything the navigation state
//! machine mutates: the query, the screen, the pending selection, the ad
//! placements and the splash timer. The catalog is shared read-only.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`] for the
//! renderer. It resolves card windowing around the selection, match
//! highlighting, detail scrolling and the interstitial overlay.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use emerald_shaker::ads::AdConfig;
//! use emerald_shaker::app::AppState;
//! use emerald_shaker::catalog::Catalog;
//! use emerald_shaker::ui::theme::Theme;
//!
//! let catalog = Arc::new(Catalog::bundled().unwrap());
//! let state = AppState::new(catalog, &AdConfig::disabled(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::modes::{InputMode, NavigationState};
use super::splash::{SplashTimer, DEFAULT_SPLASH_SECONDS};
use crate::ads::{AdConfig, AdReadiness, BannerSlot, InterstitialGateway};
use crate::catalog::{filter, match_range, normalize_query, Catalog, FilterMode, QueryState};
use crate::domain::{Recipe, RecipeId};
use crate::ui::helpers::{char_len, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, CardItem, ChipInfo, DetailLine, DetailView, EmptyState, FooterInfo, HeaderInfo,
    InterstitialView, ListingView, SearchBarInfo, SplashView, TabInfo, UIViewModel,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Rows taken by one recipe card, spacing included.
pub const CARD_HEIGHT: usize = 5;

/// Rows above the cards: padding, title, subtitle, border, search box, tabs.
const LISTING_TOP_ROWS: usize = 8;

/// Rows below the cards: border and footer.
const LISTING_BOTTOM_ROWS: usize = 2;

/// Rows of the detail screen outside the scrolling body.
const DETAIL_CHROME_ROWS: usize = 7;

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

const EMPTY_MESSAGE: &str = "No cocktails found. Try a different search.";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared read-only recipe catalog.
    pub catalog: Arc<Catalog>,

    /// Current search input.
    pub query: QueryState,

    /// Identifiers of the recipes matching `query`, in catalog order.
    ///
    /// Recomputed by `apply_filter()`.
    pub filtered: Vec<RecipeId>,

    /// Zero-based cursor within `filtered`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub navigation: NavigationState,

    /// Recipe chosen while an interstitial is on screen.
    ///
    /// Set only when empty; consumed when the presentation ends.
    pub pending: Option<RecipeId>,

    pub interstitial: InterstitialGateway,

    pub banner: BannerSlot,

    pub splash: SplashTimer,

    /// Delay before the listing replaces the splash screen.
    pub splash_seconds: f64,

    /// First visible body line of the detail screen.
    pub detail_scroll: usize,

    pub theme: Theme,

    rows: usize,
    cols: usize,
    clock: fn() -> DateTime<Utc>,
}

impl AppState {
    /// Creates the state for a fresh plugin instance, on the splash screen.
    ///
    /// Placements without a unit identifier in `ads` never show an ad.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, ads: &AdConfig, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            query: QueryState::default(),
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            navigation: NavigationState::Splash,
            pending: None,
            interstitial: InterstitialGateway::new(ads.interstitial_unit().map(str::to_string)),
            banner: BannerSlot::new(ads.banner_unit().map(str::to_string)),
            splash: SplashTimer::default(),
            splash_seconds: DEFAULT_SPLASH_SECONDS,
            detail_scroll: 0,
            theme,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            clock: Utc::now,
        };
        state.apply_filter();
        state
    }

    /// Replaces the wall clock used for ad expiry.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Records the pane size used for detail scroll bounds.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.detail_scroll = self.detail_scroll.min(self.detail_max_scroll());
    }

    /// Recomputes `filtered` from the query and clamps the cursor.
    pub fn apply_filter(&mut self) {
        self.filtered = filter(self.catalog.all(), &self.query)
            .into_iter()
            .map(|recipe| recipe.id.clone())
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.filtered
            .get(self.selected_index)
            .and_then(|id| self.catalog.get(id))
    }

    /// The recipe on the detail screen, if that screen is shown.
    #[must_use]
    pub fn detail_recipe(&self) -> Option<&Recipe> {
        match &self.navigation {
            NavigationState::Detail(id) => self.catalog.get(id),
            _ => None,
        }
    }

    /// Whether an interstitial currently holds navigation back.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        self.pending.is_some() || self.interstitial.readiness() == AdReadiness::Presenting
    }

    /// Shows the detail screen for `id`, scrolled to the top.
    pub fn open_detail(&mut self, id: RecipeId) {
        tracing::debug!(recipe_id = %id, "opening detail");
        self.navigation = NavigationState::Detail(id);
        self.detail_scroll = 0;
    }

    /// Returns from the detail screen, leaving query, cursor and input mode
    /// untouched. Returns `false` when not on the detail screen.
    pub fn back_to_listing(&mut self) -> bool {
        if !matches!(self.navigation, NavigationState::Detail(_)) {
            return false;
        }
        self.navigation = NavigationState::Listing;
        self.detail_scroll = 0;
        true
    }

    /// Index of the alcohol type the query currently names exactly.
    #[must_use]
    pub fn active_chip(&self) -> Option<usize> {
        if self.query.mode != FilterMode::ByAlcoholType {
            return None;
        }
        let needle = normalize_query(&self.query.text);
        self.catalog
            .distinct_alcohol_types()
            .iter()
            .position(|kind| kind.to_lowercase() == needle)
    }

    fn shows_chips(&self) -> bool {
        self.query.mode == FilterMode::ByAlcoholType
            && !self.catalog.distinct_alcohol_types().is_empty()
            && (self.query.is_blank() || self.active_chip().is_some())
    }

    /// Sets the query to the next (or previous) alcohol type, wrapping.
    ///
    /// Switches to alcohol-type mode first when filtering by name. Returns
    /// `false` when the catalog has no types.
    pub fn cycle_alcohol_type(&mut self, forward: bool) -> bool {
        let count = self.catalog.distinct_alcohol_types().len();
        if count == 0 {
            return false;
        }
        if self.query.mode != FilterMode::ByAlcoholType {
            self.query.set_mode(FilterMode::ByAlcoholType);
        }

        let next = match (self.active_chip(), forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };

        self.query.text.clone_from(&self.catalog.distinct_alcohol_types()[next]);
        self.selected_index = 0;
        self.apply_filter();
        true
    }

    const fn detail_viewport(rows: usize) -> usize {
        let body = rows.saturating_sub(DETAIL_CHROME_ROWS);
        if body == 0 {
            1
        } else {
            body
        }
    }

    /// Largest useful scroll offset for the current recipe and pane size.
    #[must_use]
    pub fn detail_max_scroll(&self) -> usize {
        self.detail_recipe().map_or(0, |recipe| {
            Self::detail_lines(recipe, self.cols)
                .len()
                .saturating_sub(Self::detail_viewport(self.rows))
        })
    }

    /// Scrolls the detail body by one line. Returns whether it moved.
    pub fn scroll_detail(&mut self, down: bool) -> bool {
        let before = self.detail_scroll;
        if down {
            self.detail_scroll = (self.detail_scroll + 1).min(self.detail_max_scroll());
        } else {
            self.detail_scroll = self.detail_scroll.saturating_sub(1);
        }
        before != self.detail_scroll
    }

    /// Computes the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        if let Some(creative) = self.interstitial.presenting() {
            return UIViewModel::Interstitial(InterstitialView {
                label: "Advertisement",
                advertiser: creative.advertiser.clone(),
                headline: truncate(&creative.headline, cols.saturating_sub(4)),
                body: wrap_text(&creative.body, cols.saturating_sub(8).max(10)),
                call_to_action: creative.call_to_action.clone(),
                prompt: "Press any key to continue",
            });
        }

        match &self.navigation {
            NavigationState::Splash => UIViewModel::Splash(SplashView {
                glyph: "🍸",
                title: "Emerald Shaker",
                tagline: "Mixing classics...",
            }),
            NavigationState::Listing => UIViewModel::Listing(self.compute_listing(rows, cols)),
            NavigationState::Detail(id) => match self.catalog.get(id) {
                Some(recipe) => UIViewModel::Detail(self.compute_detail(recipe, rows, cols)),
                None => {
                    tracing::warn!(recipe_id = %id, "detail recipe missing from catalog");
                    UIViewModel::Listing(self.compute_listing(rows, cols))
                }
            },
        }
    }

    fn compute_listing(&self, rows: usize, cols: usize) -> ListingView {
        let chips = self.compute_chips();
        let banner = self.banner.visible_creative().map(|creative| BannerInfo {
            advertiser: creative.advertiser.clone(),
            headline: creative.headline.clone(),
            call_to_action: creative.call_to_action.clone(),
        });

        let chrome = LISTING_TOP_ROWS
            + LISTING_BOTTOM_ROWS
            + usize::from(!chips.is_empty())
            + usize::from(banner.is_some());
        let available_cards = (rows.saturating_sub(chrome) / CARD_HEIGHT).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_cards / 2);
        let visible_end = (visible_start + available_cards).min(self.filtered.len());
        if visible_end - visible_start < available_cards && self.filtered.len() >= available_cards {
            visible_start = visible_end.saturating_sub(available_cards);
        }

        let cards = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(offset, id)| {
                let recipe = self.catalog.get(id)?;
                Some(self.compute_card(recipe, visible_start + offset, cols))
            })
            .collect();

        let empty_state = self.filtered.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            subtitle: if self.catalog.is_empty() {
                "The recipe catalog is unavailable.".to_string()
            } else {
                format!(
                    "Nothing matches \"{}\" by {}.",
                    self.query.text.trim(),
                    self.query.mode.label().to_lowercase()
                )
            },
        });

        ListingView {
            header: HeaderInfo {
                title: "Emerald Shaker".to_string(),
                subtitle: format!("{} Classic Cocktails", self.catalog.len()),
            },
            search_bar: SearchBarInfo {
                query: self.query.text.clone(),
                placeholder: self.query.mode.placeholder().to_string(),
                is_focused: self.input_mode == InputMode::Search,
            },
            tabs: [FilterMode::ByName, FilterMode::ByAlcoholType]
                .into_iter()
                .map(|mode| TabInfo {
                    label: mode.label(),
                    is_active: self.query.mode == mode,
                })
                .collect(),
            chips,
            cards,
            empty_state,
            banner,
            footer: self.compute_footer(),
        }
    }

    fn compute_card(&self, recipe: &Recipe, absolute_idx: usize, cols: usize) -> CardItem {
        let text_width = cols.saturating_sub(6);
        let name = truncate(&recipe.name, text_width.saturating_sub(char_len(&recipe.alcohol_type) + 3));

        let (name_highlight, badge_highlight) = match self.query.mode {
            FilterMode::ByName => (match_range(&name, &self.query.text), None),
            FilterMode::ByAlcoholType => (None, match_range(&recipe.alcohol_type, &self.query.text)),
        };

        let pairings = (!recipe.food_pairings.is_empty())
            .then(|| truncate(&format!("Pair with: {}", recipe.pairings_line()), text_width));

        CardItem {
            name,
            name_highlight,
            badge: recipe.alcohol_type.clone(),
            badge_highlight,
            glass: truncate(&recipe.glass, text_width),
            ingredients: truncate(&recipe.ingredients_preview(), text_width),
            pairings,
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_chips(&self) -> Vec<ChipInfo> {
        if !self.shows_chips() {
            return vec![];
        }
        let active = self.active_chip();
        self.catalog
            .distinct_alcohol_types()
            .iter()
            .enumerate()
            .map(|(i, kind)| ChipInfo {
                label: kind.clone(),
                is_active: active == Some(i),
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.navigation, self.input_mode) {
            (NavigationState::Detail(_), _) => "j/k: scroll  Esc/b: back  q: quit",
            (_, InputMode::Search) => {
                "ESC: exit search  Enter: open  ↑/↓ Ctrl+n/p: navigate  Tab: name/type  Type to filter"
            }
            (_, InputMode::Normal) => {
                "j/k: navigate  Enter: open  /: search  Tab: name/type  [ ]: types  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_detail(&self, recipe: &Recipe, rows: usize, cols: usize) -> DetailView {
        let all = Self::detail_lines(recipe, cols);
        let viewport = Self::detail_viewport(rows);
        let scroll = self.detail_scroll.min(all.len().saturating_sub(viewport));
        let end = (scroll + viewport).min(all.len());

        DetailView {
            back_label: "← Back",
            title: truncate(&recipe.name, cols.saturating_sub(4)),
            badge: recipe.alcohol_type.clone(),
            lines: all[scroll..end].to_vec(),
            has_more_above: scroll > 0,
            has_more_below: end < all.len(),
            footer: self.compute_footer(),
        }
    }

    /// Full recipe body, wrapped to the pane width.
    fn detail_lines(recipe: &Recipe, cols: usize) -> Vec<DetailLine> {
        let width = cols.saturating_sub(4).max(10);
        let mut lines = vec![
            DetailLine::Heading("Glass".to_string()),
            DetailLine::Text(recipe.glass.clone()),
            DetailLine::Blank,
            DetailLine::Heading("Ingredients".to_string()),
        ];
        lines.extend(recipe.ingredients.iter().map(|i| DetailLine::Bullet(i.clone())));

        lines.push(DetailLine::Blank);
        lines.push(DetailLine::Heading("Instructions".to_string()));
        lines.extend(wrap_text(&recipe.instructions, width).into_iter().map(DetailLine::Text));

        if !recipe.food_pairings.is_empty() {
            lines.push(DetailLine::Blank);
            lines.push(DetailLine::Heading("Food Pairings".to_string()));
            lines.extend(recipe.food_pairings.iter().map(|p| DetailLine::Bullet(p.clone())));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str, alcohol_type: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            alcohol_type: alcohol_type.to_string(),
            glass: "Coupe".to_string(),
            ingredients: vec!["2 oz spirit".to_string(), "1 oz citrus".to_string()],
            food_pairings: vec!["Ceviche".to_string()],
            instructions: "Shake with ice and strain into a chilled glass.".to_string(),
        }
    }

    fn state() -> AppState {
        let catalog = Catalog::from_recipes(vec![
            recipe("1", "Margarita", "Tequila"),
            recipe("2", "Daiquiri", "Rum"),
            recipe("3", "Mojito", "Rum"),
            recipe("4", "Negroni", "Gin"),
        ])
        .unwrap();
        let mut state = AppState::new(Arc::new(catalog), &AdConfig::disabled(), Theme::default());
        state.navigation = NavigationState::Listing;
        state
    }

    #[test]
    fn new_state_starts_on_splash_with_everything_visible() {
        let catalog = Arc::new(Catalog::from_recipes(vec![recipe("1", "Gimlet", "Gin")]).unwrap());
        let state = AppState::new(catalog, &AdConfig::disabled(), Theme::default());
        assert_eq!(state.navigation, NavigationState::Splash);
        assert_eq!(state.filtered, [RecipeId::new("1")]);
        assert!(matches!(state.compute_viewmodel(24, 80), UIViewModel::Splash(_)));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 3);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filtering_clamps_the_cursor() {
        let mut state = state();
        state.selected_index = 3;
        state.query.set_mode(FilterMode::ByAlcoholType);
        state.query.text = "rum".to_string();
        state.apply_filter();
        assert_eq!(state.filtered, [RecipeId::new("2"), RecipeId::new("3")]);
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_recipe().map(|r| r.name.as_str()), Some("Mojito"));
    }

    #[test]
    fn cycling_types_switches_mode_and_wraps() {
        let mut state = state();
        state.query.text = "mar".to_string();

        assert!(state.cycle_alcohol_type(true));
        assert_eq!(state.query.mode, FilterMode::ByAlcoholType);
        assert_eq!(state.query.text, "Gin");

        state.cycle_alcohol_type(true);
        state.cycle_alcohol_type(true);
        assert_eq!(state.query.text, "Tequila");
        state.cycle_alcohol_type(true);
        assert_eq!(state.query.text, "Gin");
        state.cycle_alcohol_type(false);
        assert_eq!(state.query.text, "Tequila");
    }

    #[test]
    fn chips_show_for_blank_or_exact_type_queries() {
        let mut state = state();
        state.query.set_mode(FilterMode::ByAlcoholType);
        let UIViewModel::Listing(view) = state.compute_viewmodel(40, 80) else {
            panic!("expected listing");
        };
        assert_eq!(view.chips.len(), 3);
        assert!(view.chips.iter().all(|c| !c.is_active));

        state.query.text = "RUM".to_string();
        state.apply_filter();
        let UIViewModel::Listing(view) = state.compute_viewmodel(40, 80) else {
            panic!("expected listing");
        };
        assert!(view.chips[1].is_active);

        state.query.text = "ru".to_string();
        state.apply_filter();
        let UIViewModel::Listing(view) = state.compute_viewmodel(40, 80) else {
            panic!("expected listing");
        };
        assert!(view.chips.is_empty());
    }

    #[test]
    fn back_keeps_query_cursor_and_input_mode() {
        let mut state = state();
        state.query.text = "o".to_string();
        state.apply_filter();
        state.selected_index = 1;
        state.input_mode = InputMode::Search;
        let before = (state.query.clone(), state.selected_index, state.input_mode);

        state.open_detail(RecipeId::new("3"));
        assert!(state.back_to_listing());
        assert_eq!((state.query.clone(), state.selected_index, state.input_mode), before);
        assert!(!state.back_to_listing());
    }

    #[test]
    fn listing_windows_cards_around_selection() {
        let mut state = state();
        state.selected_index = 3;
        // 8 + 2 chrome rows leave room for two cards.
        let UIViewModel::Listing(view) = state.compute_viewmodel(20, 80) else {
            panic!("expected listing");
        };
        let names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Mojito", "Negroni"]);
        assert!(view.cards[1].is_selected);
    }

    #[test]
    fn name_matches_are_highlighted() {
        let mut state = state();
        state.query.text = "qui".to_string();
        state.apply_filter();
        let UIViewModel::Listing(view) = state.compute_viewmodel(40, 80) else {
            panic!("expected listing");
        };
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name_highlight, Some((3, 6)));
        assert_eq!(view.cards[0].badge_highlight, None);
    }

    #[test]
    fn empty_result_has_empty_state() {
        let mut state = state();
        state.query.text = "zzz".to_string();
        state.apply_filter();
        let UIViewModel::Listing(view) = state.compute_viewmodel(24, 80) else {
            panic!("expected listing");
        };
        assert!(view.cards.is_empty());
        let empty = view.empty_state.unwrap();
        assert_eq!(empty.message, "No cocktails found. Try a different search.");
    }

    #[test]
    fn detail_scroll_is_bounded() {
        let mut state = state();
        state.set_viewport(10, 40);
        state.open_detail(RecipeId::new("1"));

        let max = state.detail_max_scroll();
        assert!(max > 0);
        for _ in 0..max + 5 {
            state.scroll_detail(true);
        }
        assert_eq!(state.detail_scroll, max);
        assert!(!state.scroll_detail(true));

        let UIViewModel::Detail(view) = state.compute_viewmodel(10, 40) else {
            panic!("expected detail");
        };
        assert!(view.has_more_above);
        assert!(!view.has_more_below);
        assert_eq!(view.lines.len(), 3);
        assert_eq!(view.lines.last(), Some(&DetailLine::Bullet("Ceviche".to_string())));
    }

    #[test]
    fn search_footer_matches_search_keys() {
        let mut state = state();
        state.input_mode = InputMode::Search;
        let UIViewModel::Listing(view) = state.compute_viewmodel(24, 80) else {
            panic!("expected listing");
        };
        assert!(view.search_bar.is_focused);
        assert!(view.footer.keybindings.contains("ESC: exit search"));
        assert!(!view.footer.keybindings.contains("j/k"));
    }
}
