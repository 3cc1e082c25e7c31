//! Shown in place of the cards when the filter matches nothing.

use crate::ui::helpers::print_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message at `row` and a dimmed explanation below it.
///
/// ```text
///        No cocktails found. Try a different search.
///              Nothing matches "zzz" by name.
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print_centered_line(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered_line(row + 1, &empty.subtitle, &subtitle_style, cols);
}
