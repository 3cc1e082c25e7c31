//! Splash screen.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SplashView;

/// Renders glyph, title and tagline centered in the pane.
pub fn render_splash(view: &SplashView, theme: &Theme, rows: usize, cols: usize) {
    let middle = (rows / 2).max(3);

    // The glyph is an emoji and occupies two columns.
    print_centered(middle - 2, view.glyph, 2, "", cols);

    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print_centered(middle, view.title, char_len(view.title), &title_style, cols);

    let tagline_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(middle + 1, view.tagline, char_len(view.tagline), &tagline_style, cols);
}

fn print_centered(row: usize, text: &str, width: usize, style: &str, cols: usize) {
    let padding = cols.saturating_sub(width) / 2;
    position_cursor(row, padding + 1);
    print!("{style}{text}{}", Theme::reset());
}
