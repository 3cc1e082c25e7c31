//! Recipe detail screen.
//!
//! ```text
//! ← Back
//! Margarita
//!  Tequila                                              ▲ more
//! ────────────────────────────────────────────────────────────
//!   Glass
//!     Coupe
//!   ...
//!                                                       ▼ more
//! ────────────────────────────────────────────────────────────
//!                  j/k: scroll  Esc/b: back  q: quit
//! ```

use super::{footer::render_footer, render_border};
use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailView};

const MORE_ABOVE: &str = "▲ more";
const MORE_BELOW: &str = "▼ more";

pub fn render_detail(view: &DetailView, theme: &Theme, rows: usize, cols: usize) {
    position_cursor(1, 1);
    print!("{}{}{}", Theme::fg(&theme.colors.accent), view.back_label, Theme::reset());

    position_cursor(2, 1);
    print!("{}{}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), view.title, Theme::reset());

    position_cursor(3, 1);
    print!("{}{}", Theme::fg(&theme.colors.badge_fg), Theme::bg(&theme.colors.badge_bg));
    print!(" {} ", view.badge);
    print!("{}", Theme::reset());
    if view.has_more_above {
        render_indicator(3, MORE_ABOVE, char_len(&view.badge) + 2, theme, cols);
    }

    let body_row = render_border(4, &theme.colors.border, cols);
    let width = cols.saturating_sub(4);
    for (offset, line) in view.lines.iter().enumerate() {
        position_cursor(body_row + offset, 1);
        match line {
            DetailLine::Heading(text) => print!(
                "  {}{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.accent),
                truncate(text, width),
                Theme::reset()
            ),
            DetailLine::Text(text) => print!(
                "    {}{}{}",
                Theme::fg(&theme.colors.text_normal),
                truncate(text, width),
                Theme::reset()
            ),
            DetailLine::Bullet(text) => print!(
                "    {}•{} {}{}",
                Theme::fg(&theme.colors.accent),
                Theme::fg(&theme.colors.text_normal),
                truncate(text, width.saturating_sub(2)),
                Theme::reset()
            ),
            DetailLine::Blank => {}
        }
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if view.has_more_below {
        render_indicator(border_row.saturating_sub(1), MORE_BELOW, 0, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &view.footer, theme, cols);
}

/// Right-aligns a scroll hint on `row`, after `used` columns.
fn render_indicator(row: usize, text: &str, used: usize, theme: &Theme, cols: usize) {
    let len = char_len(text);
    if used + len + 1 > cols {
        return;
    }
    position_cursor(row, cols - len);
    print!("{}{}{}", Theme::fg(&theme.colors.text_dim), text, Theme::reset());
}
