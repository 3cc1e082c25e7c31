//! Composable UI component renderers.
//!
//! Each component prints one part of a screen at an explicit row and returns
//! the next free row where that is useful to the caller.
//!
//! # Components
//!
//! - [`header`]: Title and catalog size
//! - [`search`]: Search box, filter mode tabs, alcohol-type chips
//! - [`cards`]: Recipe cards
//! - [`empty`]: Empty state message
//! - [`banner`]: Banner ad line
//! - [`footer`]: Keybinding hints
//! - [`detail`]: Recipe detail screen
//! - [`splash`]: Splash screen
//! - [`interstitial`]: Full-pane interstitial ad

mod banner;
mod cards;
mod detail;
mod empty;
mod footer;
mod header;
mod interstitial;
mod search;
mod splash;

pub use detail::render_detail;
pub use interstitial::render_interstitial;
pub use splash::render_splash;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListingView;

use banner::render_banner;
use cards::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::{render_chips, render_search_bar, render_tabs};

/// Renders a horizontal border line at `row` and returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the listing screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Subtitle]
/// [Border]
/// [Search Bar - 3 lines]
/// [Tabs]
/// [Chips - alcohol-type mode only]
/// [Cards or empty state]
/// [Banner - when loaded]
/// [Border]
/// [Footer]
/// ```
pub fn render_listing(vm: &ListingView, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_tabs(current_row, &vm.tabs, theme, cols);
    if !vm.chips.is_empty() {
        current_row = render_chips(current_row, &vm.chips, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        render_cards(current_row + 1, &vm.cards, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if let Some(banner) = &vm.banner {
        render_banner(border_row.saturating_sub(1), banner, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
