//! Search bar, filter mode tabs and alcohol-type chips.

use crate::ui::helpers::{char_len, position_cursor, truncate, truncate_start};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChipInfo, SearchBarInfo, TabInfo};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box at `row`.
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ ⌕ Search by cocktail name... │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// An empty query shows the placeholder dimmed. A focused box shows a block
/// cursor after the query.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let (text, style) = if search.query.is_empty() {
        let text = format!(" ⌕ {cursor}{}", search.placeholder);
        (truncate(&text, inner_width), Theme::fg(&theme.colors.text_dim))
    } else {
        let text = search_text(&search.query, search.is_focused, inner_width);
        (text, Theme::fg(&theme.colors.text_normal))
    };
    let padding = inner_width.saturating_sub(char_len(&text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{style}{text}");
    print!("{}", " ".repeat(padding));
    print!("{border}│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// The query line inside the box. While typing, the end of the query and
/// the cursor stay visible and the start is cut instead.
fn search_text(query: &str, is_focused: bool, inner_width: usize) -> String {
    const PREFIX: &str = " ⌕ ";
    if is_focused {
        let tail = truncate_start(&format!("{query}█"), inner_width.saturating_sub(char_len(PREFIX)));
        truncate(&format!("{PREFIX}{tail}"), inner_width)
    } else {
        truncate(&format!("{PREFIX}{query}"), inner_width)
    }
}

/// Renders the filter mode tabs on one line. The active tab is underlined
/// in the accent color.
pub fn render_tabs(row: usize, tabs: &[TabInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    let mut used = SEARCH_BOX_MARGIN;

    for tab in tabs {
        if tab.is_active {
            print!("{}{}\u{1b}[4m", Theme::bold(), Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", tab.label);
        print!("{}  ", Theme::reset());
        used += char_len(tab.label) + 4;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Renders the alcohol-type chips, dropping those that do not fit.
pub fn render_chips(row: usize, chips: &[ChipInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    let mut used = SEARCH_BOX_MARGIN;

    for chip in chips {
        let width = char_len(&chip.label) + 3;
        if used + width > cols {
            break;
        }
        if chip.is_active {
            print!("{}", Theme::fg(&theme.colors.badge_fg));
            print!("{}", Theme::bg(&theme.colors.badge_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.accent));
        }
        print!(" {} ", chip.label);
        print!("{} ", Theme::reset());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
