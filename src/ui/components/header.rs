//! Listing title bar.

use crate::ui::helpers::print_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders title and catalog size at `row` and `row + 1`; returns the next
/// free row.
///
/// ```text
///                 Emerald Shaker
///             36 Classic Cocktails
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let mut title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        title_style.push_str(&Theme::bg(bg));
    }
    print_centered_line(row, &header.title, &title_style, cols);
    print_centered_line(row + 1, &header.subtitle, &Theme::fg(&theme.colors.text_dim), cols);

    row + 2
}
