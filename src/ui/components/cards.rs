//! Recipe card list.
//!
//! Each card takes [`CARD_HEIGHT`](crate::app::state::CARD_HEIGHT) rows:
//!
//! ```text
//! ▎ Margarita                                   Tequila
//! ▎ Coupe
//! ▎ 2 oz Blanco tequila • 1 oz Lime juice • 3/4 oz Cointreau...
//! ▎ Pair with: Fish tacos • Guacamole
//!
//! ```
//!
//! The bar marks the selected card, whose name line also takes the
//! selection colors.

use crate::app::state::CARD_HEIGHT;
use crate::ui::helpers::{char_len, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

const CARD_MARGIN: usize = 2;

/// Renders `cards` from `row` down. Returns the row after the last card.
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        render_card(current_row, card, theme, cols);
        current_row += CARD_HEIGHT;
    }
    current_row
}

fn render_prefix(card: &CardItem, theme: &Theme) {
    if card.is_selected {
        print!("{}▎ {}", Theme::fg(&theme.colors.accent), Theme::reset());
    } else {
        print!("  ");
    }
}

fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) {
    let name_style = if card.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    };
    let badge_style = format!(
        "{}{}",
        Theme::fg(&theme.colors.badge_fg),
        Theme::bg(&theme.colors.badge_bg)
    );

    // Name line: name left, badge right.
    position_cursor(row, 1);
    render_prefix(card, theme);
    print!("{name_style} ");
    render_highlighted_text(&card.name, card.name_highlight, theme, &name_style);
    print!(" {}", Theme::reset());

    let badge_width = char_len(&card.badge) + 2;
    let gap = cols.saturating_sub(CARD_MARGIN + char_len(&card.name) + 2 + badge_width + CARD_MARGIN);
    print!("{}", " ".repeat(gap));
    print!("{badge_style} ");
    render_highlighted_text(&card.badge, card.badge_highlight, theme, &badge_style);
    print!(" {}", Theme::reset());

    position_cursor(row + 1, 1);
    render_prefix(card, theme);
    print!(" {}{}{}", Theme::fg(&theme.colors.text_dim), card.glass, Theme::reset());

    position_cursor(row + 2, 1);
    render_prefix(card, theme);
    print!(" {}{}{}", Theme::fg(&theme.colors.text_normal), card.ingredients, Theme::reset());

    position_cursor(row + 3, 1);
    render_prefix(card, theme);
    if let Some(pairings) = &card.pairings {
        print!(" {}{}{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), pairings, Theme::reset());
    }
}
