//! Keybinding hints on the last row.

use crate::ui::helpers::print_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the hints centered at `row`, truncated so the line never wraps.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    print_centered_line(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
}
